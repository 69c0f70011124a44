//! Core rendering abstractions for hosts that display or print reports.
//!
//! This crate provides the seam between the laid-out pages and a host:
//! - `PageSink` trait for receiving page display lists item by item
//! - `PageRange` for the page-range arithmetic of a print dialog
//! - `render_pages` to replay a range of pages into a sink
//! - `TextDumpSink`, a sink writing a readable listing of every item

mod error;
mod render;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use render::{TextDumpSink, render_pages};
pub use traits::PageSink;
pub use types::PageRange;
