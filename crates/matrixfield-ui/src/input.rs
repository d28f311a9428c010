//! Pointer events as forwarded by the host toolkit.

use matrixfield_core::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down(PointerButton),
    Move,
    Up(PointerButton),
}

/// One pointer event, positioned relative to the receiving scene's origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub position: Vec2,
    pub kind: PointerEventKind,
}

impl PointerEvent {
    pub fn down(position: Vec2, button: PointerButton) -> Self {
        Self {
            position,
            kind: PointerEventKind::Down(button),
        }
    }

    pub fn moved(position: Vec2) -> Self {
        Self {
            position,
            kind: PointerEventKind::Move,
        }
    }

    pub fn up(position: Vec2, button: PointerButton) -> Self {
        Self {
            position,
            kind: PointerEventKind::Up(button),
        }
    }
}
