//! The retained display list of a single page.
//!
//! All coordinates and lengths stored here are internal units
//! (millimeters × [`ACCURACY_FAC`](simple_report_types::ACCURACY_FAC)).

use crate::config::ReportConfig;
use serde::{Deserialize, Serialize};
use simple_report_traits::FontSpec;
use simple_report_types::{Color, Point, Rect, Size, internal_to_mm};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineType {
    #[default]
    Thin,
    Medium,
    Thick,
}

impl LineType {
    pub fn width_mm(self, config: &ReportConfig) -> f64 {
        match self {
            LineType::Thin => config.thin_line_width_mm,
            LineType::Medium => config.medium_line_width_mm,
            LineType::Thick => config.thick_line_width_mm,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub from: Point,
    pub to: Point,
    pub width: f64,
    pub color: Color,
}

/// A single run of text. `origin` is the top-left corner of its box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub origin: Point,
    pub extent: Size,
    pub text: String,
    pub font: FontSpec,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RectItem {
    pub rect: Rect,
    pub line_width: f64,
    pub stroke: Color,
    pub fill: Option<Color>,
}

/// SVG source kept verbatim, to be drawn scaled into `rect`.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgItem {
    pub rect: Rect,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageItem {
    Line(LineItem),
    Text(TextItem),
    Rect(RectItem),
    Svg(SvgItem),
}

impl PageItem {
    pub fn bounding_rect(&self) -> Rect {
        match self {
            PageItem::Line(line) => {
                let half = line.width / 2.0;
                let x = line.from.x.min(line.to.x);
                let y = line.from.y.min(line.to.y);
                Rect::new(
                    x - half,
                    y - half,
                    (line.from.x - line.to.x).abs() + line.width,
                    (line.from.y - line.to.y).abs() + line.width,
                )
            }
            PageItem::Text(text) => Rect::from_origin_size(text.origin, text.extent),
            PageItem::Rect(rect) => rect.rect,
            PageItem::Svg(svg) => svg.rect,
        }
    }

    pub fn as_text(&self) -> Option<&TextItem> {
        match self {
            PageItem::Text(text) => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    width: f64,
    height: f64,
    band: f64,
    items: Vec<PageItem>,
    header_footer: Vec<PageItem>,
}

impl Page {
    /// A blank page whose only item is a white frame covering it. `band`
    /// is the height kept free for the header below the top margin, and
    /// for the footer above the bottom margin.
    pub fn new(width: f64, height: f64, band: f64) -> Self {
        let frame = PageItem::Rect(RectItem {
            rect: Rect::new(0.0, 0.0, width, height),
            line_width: 0.0,
            stroke: Color::WHITE,
            fill: Some(Color::WHITE),
        });
        Self {
            width,
            height,
            band: band.max(0.0),
            items: vec![frame],
            header_footer: Vec::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn width_mm(&self) -> f64 {
        internal_to_mm(self.width)
    }

    pub fn height_mm(&self) -> f64 {
        internal_to_mm(self.height)
    }

    /// Header/footer band reserved when the page was started, internal units.
    pub fn band_height(&self) -> f64 {
        self.band
    }

    /// Content items in insertion order, starting with the page frame.
    pub fn items(&self) -> &[PageItem] {
        &self.items
    }

    pub fn header_footer_items(&self) -> &[PageItem] {
        &self.header_footer
    }

    /// Content followed by the header/footer layer.
    pub fn all_items(&self) -> impl Iterator<Item = &PageItem> {
        self.items.iter().chain(self.header_footer.iter())
    }

    /// Every text item of the page, header/footer included.
    pub fn texts(&self) -> impl Iterator<Item = &TextItem> {
        self.all_items().filter_map(PageItem::as_text)
    }

    pub(crate) fn push(&mut self, item: PageItem) {
        self.items.push(item);
    }

    pub(crate) fn set_header_footer(&mut self, items: Vec<PageItem>) {
        self.header_footer = items;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_page_has_frame() {
        let page = Page::new(100.0, 200.0, 0.0);
        assert_eq!(page.items().len(), 1);
        assert_eq!(page.items()[0].bounding_rect(), Rect::new(0.0, 0.0, 100.0, 200.0));
        assert!(page.header_footer_items().is_empty());
    }

    #[test]
    fn test_line_bounding_rect_includes_width() {
        let item = PageItem::Line(LineItem {
            from: Point::new(10.0, 20.0),
            to: Point::new(0.0, 20.0),
            width: 2.0,
            color: Color::BLACK,
        });
        assert_eq!(item.bounding_rect(), Rect::new(-1.0, 19.0, 12.0, 2.0));
    }

    #[test]
    fn test_texts_include_header_footer_layer() {
        let mut page = Page::new(100.0, 100.0, 0.0);
        let text = |s: &str| {
            PageItem::Text(TextItem {
                origin: Point::new(0.0, 0.0),
                extent: Size::new(1.0, 1.0),
                text: s.to_string(),
                font: FontSpec::new("Arial", 100.0),
                color: Color::BLACK,
            })
        };
        page.push(text("body"));
        page.set_header_footer(vec![text("footer")]);

        let texts: Vec<_> = page.texts().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["body", "footer"]);
        assert_eq!(page.all_items().count(), 3);
    }

    #[test]
    fn test_line_type_widths_follow_config() {
        let config = ReportConfig::default();
        assert_eq!(LineType::Thin.width_mm(&config), 0.1);
        assert_eq!(LineType::Medium.width_mm(&config), 0.35);
        assert_eq!(LineType::Thick.width_mm(&config), 0.7);
    }
}
