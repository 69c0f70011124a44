//! Serializable style definitions, used to declare additional named styles
//! in a report configuration.

use crate::text_style::TextStyle;
use serde::{Deserialize, Serialize};
use simple_report_types::Color;

#[derive(Deserialize, Serialize, Default, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StyleDefinition {
    pub name: String,
    /// Name of the parent style; absent or empty means the root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size_mm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl StyleDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Copies every attribute this definition sets onto `style`; unset
    /// attributes leave `style` untouched.
    pub fn apply_to(&self, style: &mut TextStyle) {
        if let Some(name) = &self.font_name {
            style.set_font_name(Some(name.as_str()));
        }
        if self.font_size_mm.is_some() {
            style.set_font_size_mm(self.font_size_mm);
        }
        if self.bold.is_some() {
            style.set_bold(self.bold);
        }
        if self.italic.is_some() {
            style.set_italic(self.italic);
        }
        if self.color.is_some() {
            style.set_color(self.color);
        }
    }
}
