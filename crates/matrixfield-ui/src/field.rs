//! The inline field widget: thumbnail, dropdown arrow, editor lifecycle.

use std::cell::RefCell;
use std::rc::Rc;

use matrixfield_core::{MatrixModel, Rect, Size, SubId, ValueChange, Vec2};

use crate::editor::EditorSession;
use crate::input::{PointerButton, PointerEvent, PointerEventKind};
use crate::scene::{Icon, Scene, SceneNode};
use crate::theme::FieldTheme;

/// A matrix picker field attached to a block.
///
/// The host calls [`thumbnail_scene`](Self::thumbnail_scene) whenever it
/// repaints the block, forwards clicks on the field footprint to
/// [`handle_pointer`](Self::handle_pointer), and while the editor is open
/// forwards stage-local pointer events to the [`EditorSession`].
pub struct MatrixField {
    model: Rc<RefCell<MatrixModel>>,
    theme: FieldTheme,
    editor: Option<EditorSession>,
}

impl MatrixField {
    pub fn new() -> Self {
        Self {
            model: Rc::new(RefCell::new(MatrixModel::new())),
            theme: FieldTheme::default(),
            editor: None,
        }
    }

    pub fn with_value(raw: &str) -> Self {
        let field = Self::new();
        field.model.borrow_mut().set_value(raw);
        field
    }

    pub fn themed(mut self, theme: FieldTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn theme(&self) -> FieldTheme {
        self.theme
    }

    /// Shared handle to the model; the host's document layer keeps one for
    /// serialization.
    pub fn model(&self) -> Rc<RefCell<MatrixModel>> {
        self.model.clone()
    }

    pub fn value(&self) -> String {
        self.model.borrow().value()
    }

    pub fn set_value(&self, raw: &str) {
        self.model.borrow_mut().set_value(raw);
    }

    pub fn set_size(&self, rows: usize, cols: usize) {
        self.model.borrow_mut().set_size(rows, cols);
    }

    pub fn on_change(&self, f: impl Fn(&ValueChange) + 'static) -> SubId {
        self.model.borrow_mut().on_change(f)
    }

    /// Inline footprint the host reserves in the block's layout.
    pub fn field_size(&self) -> Size {
        self.model.borrow().thumbnail_layout().field_size()
    }

    /// One rounded rect per cell plus the dropdown arrow, in field-local
    /// coordinates.
    pub fn thumbnail_scene(&self) -> Scene {
        let model = self.model.borrow();
        let layout = model.thumbnail_layout();
        let grid = layout.grid();
        let mut scene = Scene::new();
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let lit = model.is_lit(grid.index_of(row, col));
                scene.push(SceneNode::Rect {
                    rect: layout.cell_rect(row, col),
                    color: if lit { self.theme.lit } else { self.theme.colour },
                    radius: layout.corner_radius(),
                });
            }
        }
        scene.push(SceneNode::Icon {
            rect: layout.arrow_rect(),
            icon: Icon::DropdownArrow,
        });
        scene
    }

    pub fn is_editor_open(&self) -> bool {
        self.editor.is_some()
    }

    /// Opens the floating editor. An already-open session is discarded
    /// first, the way the host clears a dropdown before reusing it.
    pub fn open_editor(&mut self) {
        if self.editor.take().is_some() {
            log::debug!("matrix field: discarding stale editor session");
        }
        log::debug!("matrix field: editor opened");
        self.editor = Some(EditorSession::new(self.model.clone(), self.theme));
    }

    pub fn close_editor(&mut self) {
        if self.editor.take().is_some() {
            log::debug!("matrix field: editor closed");
        }
    }

    pub fn editor(&self) -> Option<&EditorSession> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut EditorSession> {
        self.editor.as_mut()
    }

    /// Pointer handling for the inline part: a primary press anywhere on the
    /// field footprint opens the editor.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if let PointerEventKind::Down(PointerButton::Primary) = event.kind {
            let bounds = Rect::from_origin_size(Vec2::default(), self.field_size());
            if bounds.contains(event.position) {
                self.open_editor();
            }
        }
    }
}

impl Default for MatrixField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_scene_has_one_rect_per_cell_plus_the_arrow() {
        let field = MatrixField::new();
        let scene = field.thumbnail_scene();
        assert_eq!(scene.nodes.len(), 26);
        assert!(matches!(
            scene.nodes.last(),
            Some(SceneNode::Icon {
                icon: Icon::DropdownArrow,
                ..
            })
        ));
    }

    #[test]
    fn lit_cells_paint_white_and_unlit_cells_paint_the_block_colour() {
        let field = MatrixField::with_value("1111100000000000000000000");
        let theme = field.theme();
        let scene = field.thumbnail_scene();
        for (i, node) in scene.nodes.iter().take(25).enumerate() {
            let SceneNode::Rect { color, .. } = node else {
                panic!("cell nodes come first");
            };
            let expected = if i < 5 { theme.lit } else { theme.colour };
            assert_eq!(*color, expected, "cell {i}");
        }
    }

    #[test]
    fn field_size_covers_thumbnail_arrow_and_padding() {
        let field = MatrixField::new();
        let size = field.field_size();
        assert_eq!(size.width, 49.0);
        assert_eq!(size.height, 26.0);
    }

    #[test]
    fn primary_press_on_the_footprint_opens_the_editor() {
        let mut field = MatrixField::new();
        field.handle_pointer(PointerEvent::down(
            Vec2::new(10.0, 10.0),
            PointerButton::Primary,
        ));
        assert!(field.is_editor_open());
    }

    #[test]
    fn presses_outside_or_with_other_buttons_are_ignored() {
        let mut field = MatrixField::new();
        field.handle_pointer(PointerEvent::down(
            Vec2::new(100.0, 10.0),
            PointerButton::Primary,
        ));
        assert!(!field.is_editor_open());

        field.handle_pointer(PointerEvent::down(
            Vec2::new(10.0, 10.0),
            PointerButton::Secondary,
        ));
        assert!(!field.is_editor_open());
    }

    #[test]
    fn reopening_replaces_the_session_and_keeps_the_value() {
        let mut field = MatrixField::with_value("111:000:000");
        field.open_editor();
        field.open_editor();
        assert!(field.is_editor_open());
        assert_eq!(field.value(), "111:000:000");

        field.close_editor();
        assert!(!field.is_editor_open());
        assert_eq!(field.value(), "111:000:000");
    }
}
