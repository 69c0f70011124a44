use crate::error::RenderError;
use simple_report_layout::PageItem;

/// Receives the pages of a report, one item at a time.
///
/// Items arrive in internal units (millimeters × `ACCURACY_FAC`), content
/// first and the header/footer layer last. `new_page` is called between
/// two pages, never before the first or after the last one.
pub trait PageSink {
    fn begin_page(&mut self, index: usize, width_mm: f64, height_mm: f64) -> Result<(), RenderError>;

    fn draw_item(&mut self, item: &PageItem) -> Result<(), RenderError>;

    fn new_page(&mut self) -> Result<(), RenderError>;

    fn finish(&mut self) -> Result<(), RenderError>;
}
