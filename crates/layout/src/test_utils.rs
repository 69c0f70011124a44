use crate::fonts::font_spec;
use crate::generator::{HEADER_STYLE, ReportGenerator};
use crate::page::{Page, PageItem, TextItem};
use simple_report_types::internal_to_mm;

/// A4 portrait with a 20 mm margin and the default approximate measurer.
pub fn a4_generator() -> ReportGenerator {
    let _ = env_logger::builder().is_test(true).try_init();
    ReportGenerator::new(210.0, 297.0, 20.0).unwrap()
}

/// Line height of the named style in millimeters; `""` is the root style.
pub fn line_height_mm(generator: &ReportGenerator, style_name: &str) -> f64 {
    let style = generator.text_style(style_name).unwrap();
    let font = font_spec(&generator.style_lib().resolve(style));
    internal_to_mm(generator.measurer().line_height(&font))
}

/// Text items of the page content, header/footer layer excluded.
pub fn text_items(page: &Page) -> Vec<&TextItem> {
    page.items().iter().filter_map(PageItem::as_text).collect()
}

/// Where the first line of a fresh page starts with the default
/// configuration: margin, header band and the fixed gap.
pub fn top_mm(generator: &ReportGenerator) -> f64 {
    let band = line_height_mm(generator, HEADER_STYLE) * generator.config().line_skip_factor;
    generator.margin_mm() + band + generator.config().header_footer_skip_mm
}
