use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Page sink error: {0}")]
    Sink(String),
    #[error("Page range {from}..={to} selects no page of a {page_count}-page report")]
    EmptyRange {
        from: usize,
        to: usize,
        page_count: usize,
    },
    #[error("Other rendering error: {0}")]
    Other(String),
}

impl From<&str> for RenderError {
    fn from(s: &str) -> Self {
        RenderError::Other(s.to_string())
    }
}
