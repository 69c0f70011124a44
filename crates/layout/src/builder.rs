use crate::LayoutError;
use crate::config::ReportConfig;
use crate::fonts::ApproxMeasurer;
use crate::generator::ReportGenerator;
use chrono::NaiveDateTime;
use simple_report_traits::TextMeasurer;
use std::sync::Arc;

/// A builder for creating a `ReportGenerator`.
///
/// Starts out as A4 portrait with a 20 mm margin, the default
/// configuration and the approximate measurer.
pub struct ReportBuilder {
    width_mm: f64,
    height_mm: f64,
    margin_mm: f64,
    config: ReportConfig,
    measurer: Option<Arc<dyn TextMeasurer>>,
    timestamp: Option<NaiveDateTime>,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self {
            width_mm: 210.0,
            height_mm: 297.0,
            margin_mm: 20.0,
            config: ReportConfig::default(),
            measurer: None,
            timestamp: None,
        }
    }
}

impl ReportBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_page_size(mut self, width_mm: f64, height_mm: f64) -> Self {
        self.width_mm = width_mm;
        self.height_mm = height_mm;
        self
    }

    pub fn with_margin(mut self, margin_mm: f64) -> Self {
        self.margin_mm = margin_mm;
        self
    }

    pub fn with_config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    /// Reads the configuration from a JSON document.
    pub fn with_config_json(mut self, json: &str) -> Result<Self, LayoutError> {
        self.config = ReportConfig::from_json(json)?;
        Ok(self)
    }

    /// Selects the measurer used for every line height and text extent.
    pub fn with_measurer(mut self, measurer: Arc<dyn TextMeasurer>) -> Self {
        self.measurer = Some(measurer);
        self
    }

    /// Fixes the moment substituted for the date and time tokens. Without
    /// it the local time at `build` is used.
    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Consumes the builder and creates the `ReportGenerator`.
    pub fn build(self) -> Result<ReportGenerator, LayoutError> {
        let measurer = self
            .measurer
            .unwrap_or_else(|| Arc::new(ApproxMeasurer::default()));
        let timestamp = self
            .timestamp
            .unwrap_or_else(|| chrono::Local::now().naive_local());
        ReportGenerator::from_parts(
            self.width_mm,
            self.height_mm,
            self.margin_mm,
            self.config,
            measurer,
            timestamp,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_defaults_are_a4() {
        let generator = ReportBuilder::new().build().unwrap();
        assert_eq!(generator.page_width_mm(), 210.0);
        assert_eq!(generator.page_height_mm(), 297.0);
        assert_eq!(generator.margin_mm(), 20.0);
        assert_eq!(generator.measurer().name(), "ApproxMeasurer");
    }

    #[test]
    fn test_builder_validates() {
        let err = ReportBuilder::new().with_margin(200.0).build().unwrap_err();
        assert!(matches!(err, LayoutError::MarginTooLarge { .. }));
    }

    #[test]
    fn test_config_styles_are_created() {
        let generator = ReportBuilder::new()
            .with_config_json(r#"{ "styles": [ { "name": "Note", "parent": "H2", "italic": true } ] }"#)
            .unwrap()
            .build()
            .unwrap();
        let note = generator.text_style("Note").unwrap();
        assert_eq!(generator.style_lib().font_size_mm(note), 3.5);
        assert!(generator.style_lib().is_italic(note));
    }

    #[test]
    fn test_config_with_unknown_parent_fails() {
        let err = ReportBuilder::new()
            .with_config_json(r#"{ "styles": [ { "name": "Note", "parent": "Missing" } ] }"#)
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(err, LayoutError::Style(_)));
    }

    #[test]
    fn test_timestamp_drives_tokens() {
        let ts = NaiveDate::from_ymd_opt(2023, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap();
        let mut generator = ReportBuilder::new()
            .with_page_size(100.0, 100.0)
            .with_margin(10.0)
            .with_timestamp(ts)
            .build()
            .unwrap();
        generator.start_next_page();
        assert_eq!(generator.resolve_tokens("$D$ $T$ $#$/$##$", 0), "2023-12-31 23:59 1/1");
    }
}
