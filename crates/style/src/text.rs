use serde::{Deserialize, Serialize};

/// Horizontal alignment of a text run relative to its reference x position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// The x coordinate of the left edge of a run of `width` aligned at `x`.
    pub fn left_edge(self, x: f64, width: f64) -> f64 {
        match self {
            TextAlign::Left => x,
            TextAlign::Center => x - width / 2.0,
            TextAlign::Right => x - width,
        }
    }
}
