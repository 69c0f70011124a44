use chrono::NaiveDate;
use simple_report::{FontSpec, ReportBuilder, ReportGenerator, mm_to_internal};

/// A4 portrait, 20 mm margin, clock fixed at 2024-03-05 14:30.
pub fn a4_report() -> ReportGenerator {
    super::init_logger();
    let timestamp = NaiveDate::from_ymd_opt(2024, 3, 5)
        .and_then(|d| d.and_hms_opt(14, 30, 0))
        .unwrap();
    ReportBuilder::new().with_timestamp(timestamp).build().unwrap()
}

/// Height the header band reserves, in millimeters, for the default
/// configuration.
pub fn header_band_mm(report: &ReportGenerator) -> f64 {
    let size = report.style_lib().font_size_mm(report.text_style("Header").unwrap());
    let font = FontSpec::new("Arial", mm_to_internal(size)).with_italic(true);
    let height = report.measurer().line_height(&font) / mm_to_internal(1.0);
    height * report.config().line_skip_factor
}

/// Body line advance of the root style, in millimeters.
pub fn line_advance_mm(report: &ReportGenerator) -> f64 {
    let size = report.style_lib().font_size_mm(report.root_style());
    let font = FontSpec::new("Arial", mm_to_internal(size));
    report.measurer().line_height(&font) / mm_to_internal(1.0) * report.config().line_skip_factor
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}
