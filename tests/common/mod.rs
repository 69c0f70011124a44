pub mod fixtures;

use simple_report::{PageItem, PageSink, RenderError};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// What a sink saw, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Begin(usize),
    Text(String),
    Line,
    Rect,
    Svg,
    NewPage,
    Finish,
}

/// Records every call so tests can assert on the replay order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn texts(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, event: &SinkEvent) -> usize {
        self.events.iter().filter(|e| *e == event).count()
    }
}

impl PageSink for RecordingSink {
    fn begin_page(&mut self, index: usize, _width_mm: f64, _height_mm: f64) -> Result<(), RenderError> {
        self.events.push(SinkEvent::Begin(index));
        Ok(())
    }

    fn draw_item(&mut self, item: &PageItem) -> Result<(), RenderError> {
        self.events.push(match item {
            PageItem::Text(text) => SinkEvent::Text(text.text.clone()),
            PageItem::Line(_) => SinkEvent::Line,
            PageItem::Rect(_) => SinkEvent::Rect,
            PageItem::Svg(_) => SinkEvent::Svg,
        });
        Ok(())
    }

    fn new_page(&mut self) -> Result<(), RenderError> {
        self.events.push(SinkEvent::NewPage);
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        self.events.push(SinkEvent::Finish);
        Ok(())
    }
}
