use crate::library::StyleId;
use simple_report_types::Color;

pub const ROOT_FONT_NAME: &str = "Arial";
pub const ROOT_FONT_SIZE_MM: f64 = 2.0;

/// A node in the style tree.
///
/// Every attribute is either set on this node or `None`, which means the
/// value is taken from the parent. Nodes are created and owned by
/// [`TextStyleLib`](crate::TextStyleLib); the parent link is an index into
/// that library.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStyle {
    font_name: Option<String>,
    font_size_mm: Option<f64>,
    bold: Option<bool>,
    italic: Option<bool>,
    color: Option<Color>,
    pub(crate) parent: Option<StyleId>,
}

impl TextStyle {
    pub(crate) fn root() -> Self {
        Self {
            font_name: Some(ROOT_FONT_NAME.to_string()),
            font_size_mm: Some(ROOT_FONT_SIZE_MM),
            bold: Some(false),
            italic: Some(false),
            color: Some(Color::BLACK),
            parent: None,
        }
    }

    pub(crate) fn child_of(parent: StyleId) -> Self {
        Self {
            parent: Some(parent),
            ..Self::default()
        }
    }

    pub fn parent(&self) -> Option<StyleId> {
        self.parent
    }

    pub fn font_name(&self) -> Option<&str> {
        self.font_name.as_deref()
    }

    pub fn font_size_mm(&self) -> Option<f64> {
        self.font_size_mm
    }

    pub fn bold(&self) -> Option<bool> {
        self.bold
    }

    pub fn italic(&self) -> Option<bool> {
        self.italic
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// A blank name cannot select a font, so it is stored as "inherit".
    pub fn set_font_name(&mut self, name: Option<&str>) -> &mut Self {
        self.font_name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        self
    }

    /// Non-positive or non-finite sizes are stored as "inherit".
    pub fn set_font_size_mm(&mut self, size: Option<f64>) -> &mut Self {
        self.font_size_mm = size.filter(|s| s.is_finite() && *s > 0.0);
        self
    }

    pub fn set_bold(&mut self, bold: Option<bool>) -> &mut Self {
        self.bold = bold;
        self
    }

    pub fn set_italic(&mut self, italic: Option<bool>) -> &mut Self {
        self.italic = italic;
        self
    }

    pub fn set_color(&mut self, color: Option<Color>) -> &mut Self {
        self.color = color;
        self
    }

    /// True if no attribute is set on this node.
    pub fn is_transparent(&self) -> bool {
        self.font_name.is_none()
            && self.font_size_mm.is_none()
            && self.bold.is_none()
            && self.italic.is_none()
            && self.color.is_none()
    }
}

/// All attributes of a style after walking the parent chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub font_name: String,
    pub font_size_mm: f64,
    pub bold: bool,
    pub italic: bool,
    pub color: Color,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self {
            font_name: ROOT_FONT_NAME.to_string(),
            font_size_mm: ROOT_FONT_SIZE_MM,
            bold: false,
            italic: false,
            color: Color::BLACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_sizes_mean_inherit() {
        let mut style = TextStyle::default();
        style.set_font_size_mm(Some(-1.0));
        assert_eq!(style.font_size_mm(), None);
        style.set_font_size_mm(Some(0.0));
        assert_eq!(style.font_size_mm(), None);
        style.set_font_size_mm(Some(f64::NAN));
        assert_eq!(style.font_size_mm(), None);
        style.set_font_size_mm(Some(3.0));
        assert_eq!(style.font_size_mm(), Some(3.0));
    }

    #[test]
    fn test_blank_font_name_means_inherit() {
        let mut style = TextStyle::default();
        style.set_font_name(Some("  "));
        assert_eq!(style.font_name(), None);
        style.set_font_name(Some(" Courier "));
        assert_eq!(style.font_name(), Some("Courier"));
    }

    #[test]
    fn test_root_has_everything_set() {
        let root = TextStyle::root();
        assert!(root.font_name().is_some());
        assert!(root.font_size_mm().is_some());
        assert!(root.bold().is_some());
        assert!(root.italic().is_some());
        assert!(root.color().is_some());
        assert!(TextStyle::default().is_transparent());
    }
}
