use std::ops::RangeInclusive;

/// A page range as a print dialog reports it: 1-based and inclusive, with
/// `0` meaning "not specified".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageRange {
    pub from: usize,
    pub to: usize,
}

impl PageRange {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Every page.
    pub fn all() -> Self {
        Self::default()
    }

    /// The 0-based page indices selected in a report of `page_count` pages.
    ///
    /// An unspecified start is the first page and an unspecified end the
    /// last one; the end is clamped to the report. Returns `None` when
    /// nothing remains to print.
    pub fn resolve(&self, page_count: usize) -> Option<RangeInclusive<usize>> {
        if page_count == 0 {
            return None;
        }
        let first = self.from.max(1);
        let last = if self.to == 0 { page_count } else { self.to.min(page_count) };
        if first > last {
            return None;
        }
        Some(first - 1..=last - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unspecified_is_everything() {
        assert_eq!(PageRange::all().resolve(5), Some(0..=4));
        assert_eq!(PageRange::new(0, 3).resolve(5), Some(0..=2));
        assert_eq!(PageRange::new(2, 0).resolve(5), Some(1..=4));
    }

    #[test]
    fn test_clamps_to_document() {
        assert_eq!(PageRange::new(4, 99).resolve(5), Some(3..=4));
        assert_eq!(PageRange::new(6, 9).resolve(5), None);
    }

    #[test]
    fn test_empty_cases() {
        assert_eq!(PageRange::all().resolve(0), None);
        assert_eq!(PageRange::new(3, 2).resolve(5), None);
        assert_eq!(PageRange::new(1, 1).resolve(1), Some(0..=0));
    }
}
