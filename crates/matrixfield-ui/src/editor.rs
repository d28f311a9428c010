//! The floating editor: the cell stage plus its clear/fill buttons.

use std::cell::RefCell;
use std::rc::Rc;

use matrixfield_core::{MATRIX_NODE_PAD, MatrixModel, Rect, Size};

use crate::input::{PointerButton, PointerEvent, PointerEventKind};
use crate::scene::{Scene, SceneNode};
use crate::theme::FieldTheme;

/// Side of the round clear/fill buttons under the stage.
pub const BUTTON_SIZE: f32 = 24.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Paint {
    Fill,
    Clear,
}

/// One open editor session.
///
/// Owned by `MatrixField` while the dropdown is visible; dropping it is the
/// whole teardown. Coordinates are stage-local: (0, 0) is the stage's
/// top-left corner and the button row sits below the stage.
pub struct EditorSession {
    model: Rc<RefCell<MatrixModel>>,
    theme: FieldTheme,
    /// Cell state latched on primary-down and painted while dragging.
    paint: Option<Paint>,
}

impl EditorSession {
    pub(crate) fn new(model: Rc<RefCell<MatrixModel>>, theme: FieldTheme) -> Self {
        Self {
            model,
            theme,
            paint: None,
        }
    }

    pub fn stage_size(&self) -> Size {
        self.model.borrow().editor_layout().stage_size()
    }

    /// Full footprint: stage plus the button row.
    pub fn size(&self) -> Size {
        let stage = self.stage_size();
        Size {
            width: stage.width,
            height: stage.height + BUTTON_SIZE + 2.0 * MATRIX_NODE_PAD,
        }
    }

    pub fn clear_button_rect(&self) -> Rect {
        let stage = self.stage_size();
        Rect {
            x: MATRIX_NODE_PAD,
            y: stage.height + MATRIX_NODE_PAD,
            w: BUTTON_SIZE,
            h: BUTTON_SIZE,
        }
    }

    pub fn fill_button_rect(&self) -> Rect {
        let stage = self.stage_size();
        Rect {
            x: stage.width - MATRIX_NODE_PAD - BUTTON_SIZE,
            y: stage.height + MATRIX_NODE_PAD,
            w: BUTTON_SIZE,
            h: BUTTON_SIZE,
        }
    }

    /// Stage background, one rect per cell, then the two action buttons.
    pub fn scene(&self) -> Scene {
        let model = self.model.borrow();
        let layout = model.editor_layout();
        let grid = layout.grid();
        let stage = layout.stage_size();
        let mut scene = Scene::new();

        let stage_rect = Rect {
            x: 0.0,
            y: 0.0,
            w: stage.width,
            h: stage.height,
        };
        scene.push(SceneNode::Rect {
            rect: stage_rect,
            color: self.theme.colour,
            radius: layout.corner_radius(),
        });
        scene.push(SceneNode::Border {
            rect: stage_rect,
            color: self.theme.colour_tertiary,
            width: 1.0,
            radius: layout.corner_radius(),
        });

        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let lit = model.is_lit(grid.index_of(row, col));
                scene.push(SceneNode::Rect {
                    rect: layout.cell_rect(row, col),
                    color: if lit {
                        self.theme.lit
                    } else {
                        self.theme.colour_secondary
                    },
                    radius: layout.corner_radius(),
                });
            }
        }

        scene.push(SceneNode::Rect {
            rect: self.clear_button_rect(),
            color: self.theme.colour_secondary,
            radius: BUTTON_SIZE * 0.5,
        });
        scene.push(SceneNode::Rect {
            rect: self.fill_button_rect(),
            color: self.theme.lit,
            radius: BUTTON_SIZE * 0.5,
        });
        scene
    }

    /// Routes one stage-local pointer event.
    ///
    /// Primary-down over a cell toggles it and latches the resulting state;
    /// moves while the button is held paint that state over every cell they
    /// cross. Down events over the buttons clear or fill the whole grid.
    /// Everything else, including non-primary buttons, is ignored.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event.kind {
            PointerEventKind::Down(PointerButton::Primary) => {
                if self.clear_button_rect().contains(event.position) {
                    log::debug!("matrix editor: clear all");
                    self.model.borrow_mut().clear_all();
                    return;
                }
                if self.fill_button_rect().contains(event.position) {
                    log::debug!("matrix editor: fill all");
                    self.model.borrow_mut().fill_all();
                    return;
                }
                let hit = self.model.borrow().hit_test(event.position);
                if let Some(index) = hit {
                    let mut model = self.model.borrow_mut();
                    let was_lit = model.is_lit(index);
                    model.toggle_cell(index);
                    self.paint = Some(if was_lit { Paint::Clear } else { Paint::Fill });
                    log::trace!("matrix editor: latched {:?} at cell {index}", self.paint);
                }
            }
            PointerEventKind::Move => {
                let Some(paint) = self.paint else { return };
                let hit = self.model.borrow().hit_test(event.position);
                if let Some(index) = hit {
                    log::trace!("matrix editor: paint {paint:?} over cell {index}");
                    let mut model = self.model.borrow_mut();
                    match paint {
                        Paint::Fill => model.fill_cell(index),
                        Paint::Clear => model.clear_cell(index),
                    }
                }
            }
            PointerEventKind::Up(PointerButton::Primary) => {
                self.paint = None;
            }
            _ => {}
        }
    }
}
