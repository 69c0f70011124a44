use simple_report_style::StyleError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Page width must be a positive number of millimeters, got {0:.2}.")]
    InvalidPageWidth(f64),
    #[error("Page height must be a positive number of millimeters, got {0:.2}.")]
    InvalidPageHeight(f64),
    #[error("Margin must be a non-negative number of millimeters, got {0:.2}.")]
    InvalidMargin(f64),
    #[error("Margin of {margin:.2} mm leaves no room on a page dimension of {dimension:.2} mm.")]
    MarginTooLarge { margin: f64, dimension: f64 },
    #[error("A table needs at least one tab stop.")]
    TableWithoutTabs,
    #[error("Table tab stops must lie right of the leading column at 0 mm.")]
    TableTabAtOrigin,
    #[error("Invalid chart geometry: origin ({x0:.2}, {y0:.2}) must not be negative and size {width:.2} x {height:.2} must be at least 1 mm.")]
    InvalidChartGeometry {
        x0: f64,
        y0: f64,
        width: f64,
        height: f64,
    },
    #[error("Chart value range [{min}, {max}] on the {axis} axis is empty.")]
    DegenerateChartRange { axis: char, min: f64, max: f64 },
    #[error(transparent)]
    Style(#[from] StyleError),
    #[error("Invalid report configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub mod algorithms;
pub mod builder;
pub mod chart;
pub mod config;
pub mod fonts;
pub mod generator;
pub mod header_footer;
pub mod page;
pub mod svg;
pub mod table;
pub mod tabs;

pub use self::builder::ReportBuilder;
pub use self::chart::LineChart;
pub use self::config::ReportConfig;
pub use self::fonts::{ApproxMeasurer, ShapingMeasurer};
pub use self::generator::{HEADER_STYLE, H1_STYLE, H2_STYLE, ReportGenerator};
pub use self::header_footer::HeaderFooterText;
pub use self::page::{LineItem, LineType, Page, PageItem, RectItem, SvgItem, TextItem};
pub use self::table::{TABLE_HEADER_STYLE, TableWriter};
pub use self::tabs::{TabDef, TabJustification, TabSet};

// Re-export the foundation types used throughout the public API
pub use simple_report_style::{StyleId, TextAlign, TextStyle, TextStyleLib};
pub use simple_report_traits::{FontSpec, TextExtent, TextMeasurer};
pub use simple_report_types::{Color, Point, Rect, RectCorner, Size};

#[cfg(test)]
mod test_utils;
