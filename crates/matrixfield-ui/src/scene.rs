//! Retained scenes the host backend draws.
//!
//! The field only ever emits rounded rectangles, borders and the dropdown
//! arrow icon, so the node set stays that small. Rects are in local
//! coordinates of the scene (thumbnail origin or editor origin); the host
//! applies its own placement transform.

use matrixfield_core::Rect;

use crate::color::Color;

/// Host-supplied artwork referenced by name rather than by pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    DropdownArrow,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Rect {
        rect: Rect,
        color: Color,
        radius: f32,
    },
    Border {
        rect: Rect,
        color: Color,
        width: f32,
        radius: f32,
    },
    Icon {
        rect: Rect,
        icon: Icon,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }
}
