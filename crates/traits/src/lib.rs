pub mod font;
pub mod measure;

pub use font::{FontError, FontProvider, FontQuery, InMemoryFontProvider, SharedFontData};
pub use measure::{FontSpec, TextExtent, TextMeasurer};
