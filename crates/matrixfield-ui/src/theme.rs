//! Field colours, taken from the owning block's category.

use crate::color::Color;

/// Colour triple of the source block plus the lit-cell colour.
///
/// `colour` fills unlit thumbnail cells and the stage background,
/// `colour_secondary` fills unlit editor cells and the clear button,
/// `colour_tertiary` outlines the stage, and `lit` is shared by lit cells
/// and the fill button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldTheme {
    pub colour: Color,
    pub colour_secondary: Color,
    pub colour_tertiary: Color,
    pub lit: Color,
}

impl Default for FieldTheme {
    fn default() -> Self {
        Self {
            colour: Color::from_hex("#4C97FF"),
            colour_secondary: Color::from_hex("#4280D7"),
            colour_tertiary: Color::from_hex("#3373CC"),
            lit: Color::WHITE,
        }
    }
}
