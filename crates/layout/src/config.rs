use crate::LayoutError;
use serde::{Deserialize, Serialize};
use simple_report_style::StyleDefinition;

/// Tunables of the pagination engine.
///
/// Every field has a default, so a JSON document only needs to name the
/// values it changes:
///
/// ```json
/// { "lineSkipFactor": 1.25, "dateFormat": "%d.%m.%Y" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportConfig {
    /// Vertical advance after a line, as a multiple of the line height.
    ///
    /// Defaults to `1.1`.
    pub line_skip_factor: f64,

    /// Fixed gap between the header/footer band and the content area.
    ///
    /// Defaults to `2.0` mm.
    pub header_footer_skip_mm: f64,

    pub thin_line_width_mm: f64,
    pub medium_line_width_mm: f64,
    pub thick_line_width_mm: f64,

    /// Font family of the root text style.
    pub default_font_name: String,

    pub paragraph_font_size_mm: f64,
    pub h1_font_size_mm: f64,
    pub h2_font_size_mm: f64,

    /// chrono format string used for the `$D$` token.
    pub date_format: String,
    /// chrono format string used for the `$T$` token.
    pub time_format: String,

    /// Additional named styles created after the built-in ones, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<StyleDefinition>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            line_skip_factor: 1.1,
            header_footer_skip_mm: 2.0,
            thin_line_width_mm: 0.1,
            medium_line_width_mm: 0.35,
            thick_line_width_mm: 0.7,
            default_font_name: "Arial".to_string(),
            paragraph_font_size_mm: 2.0,
            h1_font_size_mm: 5.0,
            h2_font_size_mm: 3.5,
            date_format: "%Y-%m-%d".to_string(),
            time_format: "%H:%M".to_string(),
            styles: Vec::new(),
        }
    }
}

impl ReportConfig {
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let config: ReportConfig = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Replaces values the engine cannot work with by their defaults.
    pub(crate) fn sanitized(mut self) -> Self {
        self.sanitize();
        self
    }

    /// Resets every unusable value to its default, logging each one.
    /// Returns the configuration keys that were reset.
    fn sanitize(&mut self) -> Vec<&'static str> {
        let defaults = ReportConfig::default();
        let positive = |v: f64| v.is_finite() && v > 0.0;
        let non_negative = |v: f64| v.is_finite() && v >= 0.0;

        let mut reset = Vec::new();
        let mut check = |key: &'static str, value: &mut f64, default: f64, valid: fn(f64) -> bool| {
            if !valid(*value) {
                log::warn!("Ignoring {} = {}, using {}", key, value, default);
                *value = default;
                reset.push(key);
            }
        };
        check("lineSkipFactor", &mut self.line_skip_factor, defaults.line_skip_factor, positive);
        check("headerFooterSkipMm", &mut self.header_footer_skip_mm, defaults.header_footer_skip_mm, non_negative);
        check("thinLineWidthMm", &mut self.thin_line_width_mm, defaults.thin_line_width_mm, positive);
        check("mediumLineWidthMm", &mut self.medium_line_width_mm, defaults.medium_line_width_mm, positive);
        check("thickLineWidthMm", &mut self.thick_line_width_mm, defaults.thick_line_width_mm, positive);
        check("paragraphFontSizeMm", &mut self.paragraph_font_size_mm, defaults.paragraph_font_size_mm, positive);
        check("h1FontSizeMm", &mut self.h1_font_size_mm, defaults.h1_font_size_mm, positive);
        check("h2FontSizeMm", &mut self.h2_font_size_mm, defaults.h2_font_size_mm, positive);

        if self.default_font_name.trim().is_empty() {
            log::warn!("Ignoring empty defaultFontName, using {}", defaults.default_font_name);
            self.default_font_name = defaults.default_font_name;
            reset.push("defaultFontName");
        }
        reset
    }
}
