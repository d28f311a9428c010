//! Cell-state string codec.
//!
//! The persisted form is `rows` segments of `cols` characters from
//! {'0', '1'}, joined with `':'`. Everything the model stores goes through
//! [`normalize`]; everything the document model reads back in goes through
//! the strict [`CellString`] parser.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::error::ParseMatrixError;
use crate::grid::GridSize;

pub const ROW_SEPARATOR: char = ':';

/// Strips row separators, leaving the flat cell buffer.
pub fn flatten(value: &str) -> String {
    value.chars().filter(|c| *c != ROW_SEPARATOR).collect()
}

/// All-off flat buffer for `size`.
pub fn zeros(size: GridSize) -> String {
    "0".repeat(size.cell_count())
}

/// All-on flat buffer for `size`.
pub fn ones(size: GridSize) -> String {
    "1".repeat(size.cell_count())
}

/// Normalizes arbitrary input into canonical form for `size`.
///
/// Separators are dropped, the flat buffer is truncated to the cell count and
/// right-padded with '0', then re-chunked into rows. Cell characters are not
/// validated here; [`CellString`] is the validating entry point.
pub fn normalize(raw: &str, size: GridSize) -> String {
    let count = size.cell_count();
    let mut flat: String = raw
        .chars()
        .filter(|c| *c != ROW_SEPARATOR)
        .take(count)
        .collect();
    for _ in flat.chars().count()..count {
        flat.push('0');
    }
    chunk(&flat, size)
}

fn chunk(flat: &str, size: GridSize) -> String {
    let mut out = String::with_capacity(flat.len() + size.rows());
    for (i, ch) in flat.chars().enumerate() {
        if i > 0 && i % size.cols() == 0 {
            out.push(ROW_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Strictly validated cell state, as read back from a persisted document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellString {
    size: GridSize,
    flat: String,
}

impl CellString {
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// The separator-free cell buffer, length `rows * cols`.
    pub fn flat(&self) -> &str {
        &self.flat
    }

    pub fn canonical(&self) -> String {
        chunk(&self.flat, self.size)
    }
}

impl fmt::Display for CellString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl FromStr for CellString {
    type Err = ParseMatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseMatrixError::Empty);
        }
        for (at, ch) in s.char_indices() {
            if ch != '0' && ch != '1' && ch != ROW_SEPARATOR {
                return Err(ParseMatrixError::InvalidCell { ch, at });
            }
        }
        let rows: SmallVec<[&str; 9]> = s.split(ROW_SEPARATOR).collect();
        let row_count = rows.len();
        if !(GridSize::MIN_ROWS..=GridSize::MAX_ROWS).contains(&row_count) {
            return Err(ParseMatrixError::RowCountOutOfRange(row_count));
        }
        let width = rows[0].len();
        if rows.iter().any(|r| r.len() != width) {
            return Err(ParseMatrixError::RaggedRows);
        }
        if !(GridSize::MIN_COLS..=GridSize::MAX_COLS).contains(&width) {
            return Err(ParseMatrixError::ColCountOutOfRange(width));
        }
        Ok(Self {
            size: GridSize::new(row_count, width),
            flat: rows.concat(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_chunks_a_flat_buffer() {
        let size = GridSize::new(5, 5);
        assert_eq!(
            normalize("1111100000000000000000000", size),
            "11111:00000:00000:00000:00000"
        );
    }

    #[test]
    fn normalize_pads_and_truncates_ignoring_separators() {
        let size = GridSize::new(3, 3);
        assert_eq!(normalize("11", size), "110:000:000");
        assert_eq!(normalize("11:01", size), "110:100:000");
        assert_eq!(normalize("1111111111111", size), "111:111:111");
    }

    #[test]
    fn normalize_rechunks_to_the_given_geometry() {
        let size = GridSize::new(3, 4);
        assert_eq!(normalize("111:000:101", size), "1110:0010:1000");
    }

    #[test]
    fn flatten_strips_every_separator() {
        assert_eq!(flatten("101:010:111"), "101010111");
        assert_eq!(flatten("101"), "101");
    }

    #[test]
    fn parse_accepts_canonical_form_and_infers_size() {
        let cells: CellString = "11111:00000:00000:00000:00000".parse().unwrap();
        assert_eq!(cells.size(), GridSize::new(5, 5));
        assert_eq!(cells.flat(), "1111100000000000000000000");
        assert_eq!(cells.to_string(), "11111:00000:00000:00000:00000");
    }

    #[test]
    fn parse_rejects_malformed_strings() {
        assert_eq!("".parse::<CellString>(), Err(ParseMatrixError::Empty));
        assert_eq!(
            "11:11".parse::<CellString>(),
            Err(ParseMatrixError::RowCountOutOfRange(2))
        );
        assert_eq!(
            "111:11:111".parse::<CellString>(),
            Err(ParseMatrixError::RaggedRows)
        );
        assert_eq!(
            "1a1:000:000".parse::<CellString>(),
            Err(ParseMatrixError::InvalidCell { ch: 'a', at: 1 })
        );

        let row = "0".repeat(19);
        let wide = [row.as_str(); 3].join(":");
        assert_eq!(
            wide.parse::<CellString>(),
            Err(ParseMatrixError::ColCountOutOfRange(19))
        );
    }

    #[test]
    fn zeros_and_ones_cover_the_grid() {
        let size = GridSize::new(3, 4);
        assert_eq!(zeros(size), "000000000000");
        assert_eq!(ones(size), "111111111111");
    }
}
