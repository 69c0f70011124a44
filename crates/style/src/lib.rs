pub mod error;
pub mod library;
pub mod stylesheet;
pub mod text;
pub mod text_style;

pub use error::StyleError;
pub use library::{StyleId, TextStyleLib};
pub use stylesheet::StyleDefinition;
pub use text::TextAlign;
pub use text_style::{ResolvedStyle, TextStyle};
