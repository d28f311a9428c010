//! # Matrix field model
//!
//! Core of the LED-grid ("matrix") picker field used by block-programming
//! editors: a block carries a compact thumbnail of an R×C grid of on/off
//! cells, and clicking it opens a floating editor that toggles cells and
//! writes the field's string value back into the program.
//!
//! This crate is the toolkit-free half of that widget: canonical cell-state
//! string, clamped grid geometry, thumbnail/editor layout arithmetic,
//! hit-testing and change notification. Rendering and event binding live in
//! `matrixfield-ui` and in the host toolkit behind it.
//!
//! The canonical value is `rows` segments of `cols` characters from
//! {'0', '1'} joined with `':'`:
//!
//! ```rust
//! use matrixfield_core::MatrixModel;
//!
//! let mut field = MatrixModel::new();
//! field.set_value("1111100000000000000000000");
//! assert_eq!(field.value(), "11111:00000:00000:00000:00000");
//!
//! field.toggle_cell(24);
//! assert_eq!(field.value(), "11111:00000:00000:00000:00001");
//! ```
//!
//! Invalid input never errors on the interactive surface: sizes clamp,
//! out-of-range cell indices and empty values are silent no-ops. The strict
//! [`CellString`] parser (and the `serde` feature built on it) is the only
//! place malformed data is reported.

pub mod error;
pub mod events;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod model;
pub mod value;

#[cfg(feature = "serde")]
mod serde_impl;

pub use error::*;
pub use events::*;
pub use geometry::*;
pub use grid::*;
pub use layout::*;
pub use model::*;
pub use value::*;
