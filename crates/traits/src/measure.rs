//! The text measurement seam.
//!
//! The layout engine never rasterises glyphs. It only needs to know how large
//! a run of text will be once the host renders it, and it asks a
//! [`TextMeasurer`] for that.

use std::fmt::Debug;

/// A concrete font request. `size` is the em size in internal layout units.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
            bold: false,
            italic: false,
        }
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }
}

/// Measured size of a single line of text, in internal layout units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

impl TextExtent {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Measures single-line text runs.
///
/// Implementations must be deterministic: the same text and font always
/// produce the same extent, and the height of any run equals
/// [`line_height`](TextMeasurer::line_height) for its font. The pagination
/// engine relies on this to predict overflow before placing a line.
pub trait TextMeasurer: Send + Sync + Debug {
    fn measure(&self, text: &str, font: &FontSpec) -> TextExtent;

    /// Height of one line set in `font`.
    fn line_height(&self, font: &FontSpec) -> f64;

    /// Returns a human-readable name for this measurer (for logging/debugging).
    fn name(&self) -> &'static str;
}
