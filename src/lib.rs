//! Paginated report layout.
//!
//! A [`ReportGenerator`] flows lines, tab-aligned columns, tables and rules
//! down fixed-size pages, breaking to a new page whenever the next block no
//! longer fits, and records every page as a display list of abstract
//! primitives. Hosts replay those display lists through a [`PageSink`].
//!
//! ```no_run
//! use simple_report::{LineType, PageRange, ReportGenerator, TextDumpSink, render_pages};
//!
//! let mut report = ReportGenerator::new(210.0, 297.0, 20.0)?;
//! report.set_footer("", "Page $#$ of $##$", "");
//! report.write_line_named("Quarterly figures", "H1", 2.0, 0.0);
//! report.add_hor_line(LineType::Medium, 1.0, 0.0);
//! report.insert_header_and_footer();
//!
//! let mut sink = TextDumpSink::new(std::io::stdout());
//! render_pages(report.pages(), PageRange::all(), &mut sink)?;
//! # Ok::<(), simple_report::ReportError>(())
//! ```

pub mod text_report;

use thiserror::Error;

// Layout engine
pub use simple_report_layout::{
    ApproxMeasurer, HeaderFooterText, LayoutError, LineChart, LineItem, LineType, Page, PageItem, RectItem,
    ReportBuilder, ReportConfig, ReportGenerator, ShapingMeasurer, SvgItem, TabDef, TabJustification, TabSet,
    TableWriter, TextItem, H1_STYLE, H2_STYLE, HEADER_STYLE, TABLE_HEADER_STYLE,
};

// Foundation types
pub use simple_report_style::{ResolvedStyle, StyleDefinition, StyleError, StyleId, TextAlign, TextStyle, TextStyleLib};
pub use simple_report_traits::{FontError, FontProvider, FontQuery, FontSpec, InMemoryFontProvider, TextExtent, TextMeasurer};
pub use simple_report_types::{ACCURACY_FAC, Color, Point, Rect, RectCorner, Size, internal_to_mm, mm_to_internal};

// Host seam
pub use simple_report_render_core::{PageRange, PageSink, RenderError, TextDumpSink, render_pages};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Style error: {0}")]
    Style(#[from] StyleError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
