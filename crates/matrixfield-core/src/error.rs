use thiserror::Error;

use crate::grid::GridSize;

/// Failures of the strict cell-string parser.
///
/// Only the persistence path reports these; the interactive `set_value` path
/// absorbs malformed input instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMatrixError {
    #[error("empty matrix string")]
    Empty,

    #[error("rows have differing lengths")]
    RaggedRows,

    #[error(
        "{0} rows outside supported range {min}..={max}",
        min = GridSize::MIN_ROWS,
        max = GridSize::MAX_ROWS
    )]
    RowCountOutOfRange(usize),

    #[error(
        "{0} columns outside supported range {min}..={max}",
        min = GridSize::MIN_COLS,
        max = GridSize::MAX_COLS
    )]
    ColCountOutOfRange(usize),

    #[error("invalid cell character {ch:?} at offset {at}")]
    InvalidCell { ch: char, at: usize },
}
