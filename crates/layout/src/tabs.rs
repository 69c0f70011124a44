//! Horizontal tab stops.
//!
//! A [`TabSet`] is kept sorted by position with at most one stop per
//! position. Positions are millimeters measured from the left margin.

use serde::{Deserialize, Serialize};
use simple_report_style::TextAlign;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabJustification {
    #[default]
    Left,
    Center,
    Right,
}

impl From<TabJustification> for TextAlign {
    fn from(j: TabJustification) -> Self {
        match j {
            TabJustification::Left => TextAlign::Left,
            TabJustification::Center => TextAlign::Center,
            TabJustification::Right => TextAlign::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TabDef {
    pub position: f64,
    pub justification: TabJustification,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabSet {
    tabs: Vec<TabDef>,
}

impl TabSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a stop, replacing any stop at exactly the same position.
    /// Negative or non-finite positions are ignored.
    pub fn add_tab(&mut self, position: f64, justification: TabJustification) {
        if !position.is_finite() || position < 0.0 {
            log::debug!("Ignoring tab at invalid position {}", position);
            return;
        }
        self.remove_tab(position);
        let idx = self.tabs.partition_point(|t| t.position < position);
        self.tabs.insert(
            idx,
            TabDef {
                position,
                justification,
            },
        );
    }

    pub fn remove_tab(&mut self, position: f64) {
        self.tabs.retain(|t| t.position != position);
    }

    pub fn clear_all_tabs(&mut self) {
        self.tabs.clear();
    }

    pub fn has_tab(&self, position: f64) -> bool {
        self.tabs.iter().any(|t| t.position == position)
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// # Panics
    ///
    /// Panics if `index >= self.tab_count()`.
    pub fn tab_at(&self, index: usize) -> TabDef {
        self.tabs[index]
    }

    pub fn get(&self, index: usize) -> Option<TabDef> {
        self.tabs.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TabDef> {
        self.tabs.iter()
    }

    /// A copy with every stop moved right by `offset` millimeters.
    pub fn shifted(&self, offset: f64) -> TabSet {
        let mut out = TabSet::new();
        for tab in &self.tabs {
            out.add_tab(tab.position + offset, tab.justification);
        }
        out
    }
}

/// Splits a tab-separated line into at most `columns` trimmed fragments.
///
/// Surplus fragments are folded into the last column, joined by a single
/// space. `columns == 0` yields the whole line as one fragment.
pub fn split_columns(text: &str, columns: usize) -> Vec<String> {
    let mut fragments: Vec<String> = text.split('\t').map(|s| s.trim().to_string()).collect();
    let columns = columns.max(1);
    while fragments.len() > columns {
        let Some(last) = fragments.pop() else { break };
        if let Some(prev) = fragments.last_mut()
            && !last.is_empty()
        {
            if !prev.is_empty() {
                prev.push(' ');
            }
            prev.push_str(&last);
        }
    }
    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_are_sorted() {
        let mut tabs = TabSet::new();
        tabs.add_tab(50.0, TabJustification::Left);
        tabs.add_tab(10.0, TabJustification::Right);
        tabs.add_tab(30.0, TabJustification::Center);

        let positions: Vec<f64> = tabs.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![10.0, 30.0, 50.0]);
    }

    #[test]
    fn test_same_position_replaces() {
        let mut tabs = TabSet::new();
        tabs.add_tab(20.0, TabJustification::Left);
        tabs.add_tab(20.0, TabJustification::Right);

        assert_eq!(tabs.tab_count(), 1);
        assert_eq!(tabs.tab_at(0).justification, TabJustification::Right);
    }

    #[test]
    fn test_negative_position_is_ignored() {
        let mut tabs = TabSet::new();
        tabs.add_tab(-1.0, TabJustification::Left);
        tabs.add_tab(f64::NAN, TabJustification::Left);
        assert!(tabs.is_empty());
        tabs.add_tab(0.0, TabJustification::Left);
        assert!(tabs.has_tab(0.0));
    }

    #[test]
    fn test_remove_any_position() {
        let mut tabs = TabSet::new();
        tabs.add_tab(10.0, TabJustification::Left);
        tabs.add_tab(20.0, TabJustification::Left);
        tabs.add_tab(30.0, TabJustification::Left);

        tabs.remove_tab(20.0);
        assert_eq!(tabs.tab_count(), 2);
        assert!(!tabs.has_tab(20.0));
        tabs.remove_tab(99.0);
        assert_eq!(tabs.tab_count(), 2);
        tabs.clear_all_tabs();
        assert!(tabs.is_empty());
    }

    #[test]
    fn test_get_out_of_range() {
        let tabs = TabSet::new();
        assert!(tabs.get(0).is_none());
    }

    #[test]
    #[should_panic]
    fn test_tab_at_out_of_range_panics() {
        TabSet::new().tab_at(0);
    }

    #[test]
    fn test_shifted() {
        let mut tabs = TabSet::new();
        tabs.add_tab(10.0, TabJustification::Center);
        let shifted = tabs.shifted(2.0);
        assert_eq!(shifted.tab_at(0).position, 12.0);
        assert_eq!(shifted.tab_at(0).justification, TabJustification::Center);
    }

    #[test]
    fn test_split_merges_surplus_into_last_column() {
        let fragments = split_columns("a\tb\tc\td\te", 3);
        assert_eq!(fragments, vec!["a", "b", "c d e"]);
    }

    #[test]
    fn test_split_trims_and_keeps_short_lines() {
        assert_eq!(split_columns(" a \t b ", 3), vec!["a", "b"]);
        assert_eq!(split_columns("plain", 2), vec!["plain"]);
        assert_eq!(split_columns("a\t\tb", 1), vec!["a b"]);
        assert_eq!(split_columns("a\tb", 0), vec!["a b"]);
    }
}
