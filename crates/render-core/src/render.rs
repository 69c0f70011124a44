use crate::error::RenderError;
use crate::traits::PageSink;
use crate::types::PageRange;
use crate::utils::{rect_to_mm, styled_font_name};
use simple_report_layout::{Page, PageItem};
use simple_report_types::internal_to_mm;
use std::io::Write;

/// Replays the pages selected by `range` into `sink` and returns how many
/// pages were rendered. An empty report renders nothing and succeeds.
///
/// # Errors
///
/// Returns [`RenderError::EmptyRange`] if `range` selects no page of a
/// non-empty report, and passes on any error of the sink.
pub fn render_pages<S: PageSink + ?Sized>(
    pages: &[Page],
    range: PageRange,
    sink: &mut S,
) -> Result<usize, RenderError> {
    if pages.is_empty() {
        log::debug!("Nothing to render: report has no pages");
        sink.finish()?;
        return Ok(0);
    }
    let indices = range.resolve(pages.len()).ok_or(RenderError::EmptyRange {
        from: range.from,
        to: range.to,
        page_count: pages.len(),
    })?;

    let mut rendered = 0;
    for index in indices {
        if rendered > 0 {
            sink.new_page()?;
        }
        let page = &pages[index];
        sink.begin_page(index, page.width_mm(), page.height_mm())?;
        for item in page.all_items() {
            sink.draw_item(item)?;
        }
        rendered += 1;
    }
    sink.finish()?;
    log::debug!("Rendered {} of {} pages", rendered, pages.len());
    Ok(rendered)
}

/// Writes a human-readable listing of every item, in millimeters.
pub struct TextDumpSink<W: Write> {
    writer: W,
}

impl<W: Write> TextDumpSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PageSink for TextDumpSink<W> {
    fn begin_page(&mut self, index: usize, width_mm: f64, height_mm: f64) -> Result<(), RenderError> {
        writeln!(self.writer, "page {} ({:.2} x {:.2} mm)", index + 1, width_mm, height_mm)?;
        Ok(())
    }

    fn draw_item(&mut self, item: &PageItem) -> Result<(), RenderError> {
        let r = rect_to_mm(item.bounding_rect());
        match item {
            PageItem::Text(text) => writeln!(
                self.writer,
                "  text  [{:.2}, {:.2}, {:.2} x {:.2}] {} {:.2}mm {:?}",
                r.x,
                r.y,
                r.width,
                r.height,
                styled_font_name(&text.font),
                internal_to_mm(text.font.size),
                text.text
            )?,
            PageItem::Line(line) => writeln!(
                self.writer,
                "  line  ({:.2}, {:.2}) -> ({:.2}, {:.2}) width {:.2}",
                internal_to_mm(line.from.x),
                internal_to_mm(line.from.y),
                internal_to_mm(line.to.x),
                internal_to_mm(line.to.y),
                internal_to_mm(line.width)
            )?,
            PageItem::Rect(rect) => writeln!(
                self.writer,
                "  rect  [{:.2}, {:.2}, {:.2} x {:.2}] fill {}",
                r.x,
                r.y,
                r.width,
                r.height,
                rect.fill.map(|c| c.to_hex()).unwrap_or_else(|| "none".to_string())
            )?,
            PageItem::Svg(svg) => writeln!(
                self.writer,
                "  svg   [{:.2}, {:.2}, {:.2} x {:.2}] {} bytes",
                r.x,
                r.y,
                r.width,
                r.height,
                svg.data.len()
            )?,
        }
        Ok(())
    }

    fn new_page(&mut self) -> Result<(), RenderError> {
        writeln!(self.writer, "---")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        self.writer.flush()?;
        Ok(())
    }
}
