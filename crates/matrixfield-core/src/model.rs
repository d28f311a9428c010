//! The field model: canonical cell-state string plus grid geometry.
//!
//! Every mutation funnels through [`MatrixModel::set_value`] so padding and
//! change notification live in one place. Invalid input never errors on this
//! surface: sizes clamp, out-of-range indices and empty values are no-ops.

use std::fmt;

use smallvec::SmallVec;

use crate::events::{ChangeBus, SubId, ValueChange};
use crate::geometry::Vec2;
use crate::grid::GridSize;
use crate::layout::{EditorLayout, ThumbnailLayout};
use crate::value::{self, CellString, ROW_SEPARATOR};

pub struct MatrixModel {
    size: GridSize,
    /// Canonical value; `None` until a value is explicitly assigned. Reads
    /// materialize the all-zero string, and row/column inference from a
    /// separated input is only allowed while this is `None`.
    value: Option<String>,
    changes: ChangeBus,
}

impl MatrixModel {
    pub fn new() -> Self {
        Self {
            size: GridSize::default(),
            value: None,
            changes: ChangeBus::new(),
        }
    }

    pub fn with_value(raw: &str) -> Self {
        let mut model = Self::new();
        model.set_value(raw);
        model
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Canonical row-separated value. All zeros until something is assigned.
    pub fn value(&self) -> String {
        self.value
            .clone()
            .unwrap_or_else(|| value::normalize("", self.size))
    }

    /// The value with separators stripped, length `rows * cols`.
    pub fn flat_value(&self) -> String {
        value::flatten(&self.value())
    }

    pub fn is_lit(&self, index: usize) -> bool {
        self.flat_value().chars().nth(index) == Some('1')
    }

    /// Resizes the grid, clamping each axis and treating zero as the default.
    ///
    /// The reinit guard is kept exactly as shipped: the second comparison
    /// reads rows where cols would be expected, so some same-size calls
    /// still reinitialize. Reinitializing discards the cell content; callers
    /// that want to keep it must re-assign the value afterwards.
    pub fn set_size(&mut self, rows: usize, cols: usize) {
        let next = GridSize::new(rows, cols);
        if self.size.rows() != next.rows() || self.size.rows() != next.cols() {
            self.size = next;
            self.value = None;
            log::debug!("matrix resized to {}x{}", next.rows(), next.cols());
        }
    }

    /// Assigns a serialized value, normalizing it to canonical form.
    ///
    /// A flat string is split into rows using the current geometry. A
    /// row-separated string assigned to a model that never held a value
    /// infers the geometry from its shape first. Storing the same canonical
    /// value twice is a no-op and emits nothing.
    pub fn set_value(&mut self, raw: &str) {
        if raw.is_empty() {
            return;
        }
        if raw.contains(ROW_SEPARATOR) && self.value.is_none() {
            let rows: SmallVec<[&str; 9]> = raw.split(ROW_SEPARATOR).collect();
            let width = rows.first().map_or(0, |r| r.chars().count());
            self.set_size(rows.len(), width);
        }
        let canonical = value::normalize(raw, self.size);
        let old = self.value();
        if canonical == old {
            return;
        }
        log::debug!("matrix value {:?} -> {:?}", old, canonical);
        self.value = Some(canonical.clone());
        self.changes.emit(&ValueChange {
            old,
            new: canonical,
        });
    }

    pub fn toggle_cell(&mut self, index: usize) {
        let state = if self.is_lit(index) { '0' } else { '1' };
        self.put_cell(index, state);
    }

    pub fn fill_cell(&mut self, index: usize) {
        self.put_cell(index, '1');
    }

    pub fn clear_cell(&mut self, index: usize) {
        self.put_cell(index, '0');
    }

    fn put_cell(&mut self, index: usize, state: char) {
        if index >= self.size.cell_count() {
            return;
        }
        let flat: String = self
            .flat_value()
            .chars()
            .enumerate()
            .map(|(i, ch)| if i == index { state } else { ch })
            .collect();
        self.set_value(&flat);
    }

    pub fn clear_all(&mut self) {
        let flat = value::zeros(self.size);
        self.set_value(&flat);
    }

    pub fn fill_all(&mut self) {
        let flat = value::ones(self.size);
        self.set_value(&flat);
    }

    pub fn on_change(&mut self, f: impl Fn(&ValueChange) + 'static) -> SubId {
        self.changes.subscribe(f)
    }

    /// Gates change emission; hosts mute the bus while replaying a document.
    pub fn set_change_events_enabled(&mut self, on: bool) {
        self.changes.set_enabled(on);
    }

    pub fn change_events_enabled(&self) -> bool {
        self.changes.is_enabled()
    }

    pub fn thumbnail_layout(&self) -> ThumbnailLayout {
        ThumbnailLayout::new(self.size)
    }

    pub fn editor_layout(&self) -> EditorLayout {
        EditorLayout::new(self.size)
    }

    /// Cell index under a pointer in editor-stage coordinates, if any.
    pub fn hit_test(&self, p: Vec2) -> Option<usize> {
        self.editor_layout().hit_test(p)
    }
}

impl Default for MatrixModel {
    fn default() -> Self {
        Self::new()
    }
}

impl From<CellString> for MatrixModel {
    fn from(cells: CellString) -> Self {
        Self {
            size: cells.size(),
            value: Some(cells.canonical()),
            changes: ChangeBus::new(),
        }
    }
}

impl fmt::Debug for MatrixModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatrixModel")
            .field("size", &self.size)
            .field("value", &self.value)
            .field("changes", &self.changes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorded(model: &mut MatrixModel) -> Rc<RefCell<Vec<ValueChange>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        model.on_change(move |c| sink.borrow_mut().push(c.clone()));
        log
    }

    #[test]
    fn fresh_model_reads_all_zeros_at_the_default_size() {
        let model = MatrixModel::new();
        assert_eq!(model.size(), GridSize::new(5, 5));
        assert_eq!(model.value(), "00000:00000:00000:00000:00000");
        assert!(!model.is_lit(0));
    }

    #[test]
    fn flat_value_is_canonicalized() {
        let mut model = MatrixModel::new();
        model.set_value("1111100000000000000000000");
        assert_eq!(model.value(), "11111:00000:00000:00000:00000");
        assert_eq!(model.flat_value(), "1111100000000000000000000");
    }

    #[test]
    fn set_value_is_idempotent() {
        let mut model = MatrixModel::new();
        let log = recorded(&mut model);
        model.set_value("1111100000000000000000000");
        model.set_value("11111:00000:00000:00000:00000");
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(log.borrow()[0].old, "00000:00000:00000:00000:00000");
        assert_eq!(log.borrow()[0].new, "11111:00000:00000:00000:00000");
    }

    #[test]
    fn empty_input_is_ignored() {
        let mut model = MatrixModel::new();
        let log = recorded(&mut model);
        model.set_value("");
        assert_eq!(log.borrow().len(), 0);
        assert_eq!(model.value(), "00000:00000:00000:00000:00000");
    }

    #[test]
    fn assigning_zeros_to_a_fresh_model_emits_nothing() {
        let mut model = MatrixModel::new();
        let log = recorded(&mut model);
        model.set_value("0000000000000000000000000");
        assert_eq!(log.borrow().len(), 0);
    }

    #[test]
    fn short_values_are_right_padded() {
        let mut model = MatrixModel::new();
        model.set_value("11111");
        assert_eq!(model.value(), "11111:00000:00000:00000:00000");
    }

    #[test]
    fn separated_value_infers_size_only_while_unset() {
        let mut model = MatrixModel::new();
        model.set_value("111:000:000");
        assert_eq!(model.size(), GridSize::new(3, 3));
        assert_eq!(model.value(), "111:000:000");

        // Already set: a 5-row value is re-normalized to 3x3, not resized.
        model.set_value("11111:00000:00000:00000:00000");
        assert_eq!(model.size(), GridSize::new(3, 3));
        assert_eq!(model.value(), "111:110:000");
    }

    #[test]
    fn inferred_size_is_clamped() {
        let mut model = MatrixModel::new();
        model.set_value("11:00");
        assert_eq!(model.size(), GridSize::new(3, 3));
    }

    #[test]
    fn set_size_clamps_and_defaults() {
        let mut model = MatrixModel::new();
        model.set_size(20, 30);
        assert_eq!(model.size(), GridSize::new(9, 17));
        model.set_size(0, 0);
        assert_eq!(model.size(), GridSize::new(5, 5));
    }

    #[test]
    fn resize_discards_content() {
        let mut model = MatrixModel::new();
        model.set_value("1111111111111111111111111");
        model.set_size(3, 3);
        assert_eq!(model.value(), "000:000:000");
    }

    // The shipped guard compares rows against the new column count, so a
    // same-size call only survives when rows == cols.
    #[test]
    fn reinit_guard_matches_shipped_behavior() {
        let mut model = MatrixModel::new();
        model.set_size(3, 3);
        model.set_value("111:111:111");
        model.set_size(3, 3);
        assert_eq!(model.value(), "111:111:111");

        let mut model = MatrixModel::new();
        model.set_size(5, 3);
        model.set_value("111111111111111");
        model.set_size(5, 3);
        assert_eq!(model.value(), "000:000:000:000:000");
    }

    #[test]
    fn toggle_twice_restores_the_cell() {
        let mut model = MatrixModel::new();
        model.toggle_cell(7);
        assert!(model.is_lit(7));
        model.toggle_cell(7);
        assert!(!model.is_lit(7));
    }

    #[test]
    fn fill_and_clear_are_absorbing() {
        let mut model = MatrixModel::new();
        let log = recorded(&mut model);
        model.fill_cell(3);
        model.fill_cell(3);
        assert_eq!(log.borrow().len(), 1);
        model.clear_cell(3);
        model.clear_cell(3);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn out_of_range_indices_are_no_ops() {
        let mut model = MatrixModel::new();
        let log = recorded(&mut model);
        model.toggle_cell(25);
        model.fill_cell(usize::MAX);
        model.clear_cell(25);
        assert_eq!(log.borrow().len(), 0);
        assert_eq!(model.value(), "00000:00000:00000:00000:00000");
    }

    #[test]
    fn fill_all_and_clear_all_cover_the_grid() {
        let mut model = MatrixModel::new();
        let log = recorded(&mut model);
        model.fill_all();
        assert_eq!(model.value(), "11111:11111:11111:11111:11111");
        model.fill_all();
        model.clear_all();
        assert_eq!(model.value(), "00000:00000:00000:00000:00000");
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn muted_bus_suppresses_notification_but_stores() {
        let mut model = MatrixModel::new();
        let log = recorded(&mut model);
        model.set_change_events_enabled(false);
        model.set_value("11111");
        assert_eq!(log.borrow().len(), 0);
        assert_eq!(model.value(), "11111:00000:00000:00000:00000");
    }

    #[test]
    fn model_from_parsed_cells() {
        let cells: CellString = "101:010:101".parse().unwrap();
        let model = MatrixModel::from(cells);
        assert_eq!(model.size(), GridSize::new(3, 3));
        assert_eq!(model.value(), "101:010:101");
    }
}
