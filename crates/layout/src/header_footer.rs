//! Page header/footer texts and their placeholder tokens.

use chrono::NaiveDateTime;
use std::fmt::Write;

/// Replaced by the 1-based number of the page.
pub const PAGE_NUMBER_TOKEN: &str = "$#$";
/// Replaced by the total number of pages.
pub const PAGE_COUNT_TOKEN: &str = "$##$";
pub const DATE_TOKEN: &str = "$D$";
pub const TIME_TOKEN: &str = "$T$";

/// The six text slots of a page: left, center and right for both the
/// header and the footer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderFooterText {
    pub header: [String; 3],
    pub footer: [String; 3],
}

impl HeaderFooterText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_header(&mut self, left: &str, center: &str, right: &str) {
        self.header = [left.trim().to_string(), center.trim().to_string(), right.trim().to_string()];
    }

    pub fn set_footer(&mut self, left: &str, center: &str, right: &str) {
        self.footer = [left.trim().to_string(), center.trim().to_string(), right.trim().to_string()];
    }

    pub fn has_header(&self) -> bool {
        self.header.iter().any(|s| !s.is_empty())
    }

    pub fn has_footer(&self) -> bool {
        self.footer.iter().any(|s| !s.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        !self.has_header() && !self.has_footer()
    }
}

/// Values substituted into header/footer text for one page.
#[derive(Debug, Clone, Copy)]
pub struct TokenContext<'a> {
    pub page_number: usize,
    pub page_count: usize,
    pub timestamp: NaiveDateTime,
    pub date_format: &'a str,
    pub time_format: &'a str,
}

pub fn substitute_tokens(text: &str, ctx: &TokenContext<'_>) -> String {
    if !text.contains('$') {
        return text.to_string();
    }
    let mut out = text
        .replace(PAGE_COUNT_TOKEN, &ctx.page_count.to_string())
        .replace(PAGE_NUMBER_TOKEN, &ctx.page_number.to_string());
    if out.contains(DATE_TOKEN) {
        out = out.replace(DATE_TOKEN, &format_timestamp(&ctx.timestamp, ctx.date_format));
    }
    if out.contains(TIME_TOKEN) {
        out = out.replace(TIME_TOKEN, &format_timestamp(&ctx.timestamp, ctx.time_format));
    }
    out
}

/// An invalid format string yields an empty string instead of panicking.
fn format_timestamp(timestamp: &NaiveDateTime, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", timestamp.format(format)).is_err() {
        log::warn!("Invalid date/time format '{}'", format);
        out.clear();
    }
    out
}
