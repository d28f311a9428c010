//! Presentation adapter for the matrix LED-grid field.
//!
//! `matrixfield-core` owns the value and the geometry; this crate turns it
//! into something a host toolkit can draw and poke: retained [`Scene`]s for
//! the inline thumbnail and the floating editor, pointer routing for both,
//! and the [`RenderBackend`] trait the host implements to put pixels on
//! screen. The host stays responsible for windowing, dropdown positioning
//! and the actual drawing primitives.

pub mod backend;
pub mod color;
pub mod editor;
pub mod field;
pub mod input;
pub mod scene;
pub mod theme;

pub use backend::*;
pub use color::*;
pub use editor::*;
pub use field::*;
pub use input::*;
pub use scene::*;
pub use theme::*;
