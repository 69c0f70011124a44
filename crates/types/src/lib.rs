pub mod color;
pub mod geometry;
pub mod units;

pub use color::Color;
pub use geometry::{Point, Rect, RectCorner, Size};
pub use units::{ACCURACY_FAC, internal_to_mm, mm_to_internal};
