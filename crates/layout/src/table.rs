//! Tables written row by row through the pagination engine.
//!
//! A table has one column per tab stop plus a leading column at position 0.
//! When the rows overflow a page the table is closed with a rule, a new
//! page is started and the header is repeated, optionally preceded by a
//! continuation caption.

use crate::LayoutError;
use crate::generator::ReportGenerator;
use crate::page::LineType;
use crate::tabs::{TabJustification, TabSet};
use simple_report_style::StyleId;

/// Bold style used for the header row, created on first use.
pub const TABLE_HEADER_STYLE: &str = "TableHeader";

#[derive(Debug, Clone)]
pub struct TableWriter {
    tabs: TabSet,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    continuation_caption: String,
    extra_row_skip_mm: f64,
    left_indentation_mm: f64,
}

fn clean_cell(text: &str) -> String {
    text.replace('\t', " ")
}

impl TableWriter {
    /// # Errors
    ///
    /// Returns [`LayoutError::TableWithoutTabs`] if `tabs` is empty and
    /// [`LayoutError::TableTabAtOrigin`] if a tab sits at 0 mm, where the
    /// leading column is placed.
    pub fn new(tabs: TabSet) -> Result<Self, LayoutError> {
        if tabs.is_empty() {
            return Err(LayoutError::TableWithoutTabs);
        }
        if tabs.has_tab(0.0) {
            return Err(LayoutError::TableTabAtOrigin);
        }
        let columns = tabs.tab_count() + 1;
        Ok(Self {
            tabs,
            header: vec![String::new(); columns],
            rows: Vec::new(),
            continuation_caption: String::new(),
            extra_row_skip_mm: 1.0,
            left_indentation_mm: 2.0,
        })
    }

    pub fn column_count(&self) -> usize {
        self.tabs.tab_count() + 1
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Sets one cell, growing the table as needed. Returns `false` for a
    /// column outside the table.
    pub fn set_cell(&mut self, row: usize, col: usize, text: &str) -> bool {
        if col >= self.column_count() {
            return false;
        }
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize(col + 1, String::new());
        }
        cells[col] = clean_cell(text);
        true
    }

    /// Sets the leading cells of `row`; surplus cells are dropped.
    pub fn set_row<S: AsRef<str>>(&mut self, row: usize, cells: &[S]) -> bool {
        let columns = self.column_count();
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        for (col, text) in cells.iter().take(columns).enumerate() {
            self.set_cell(row, col, text.as_ref());
        }
        true
    }

    pub fn append_row<S: AsRef<str>>(&mut self, cells: &[S]) -> bool {
        let row = self.rows.len();
        self.set_row(row, cells)
    }

    pub fn set_header<S: AsRef<str>>(&mut self, cells: &[S]) {
        for (slot, text) in self.header.iter_mut().zip(cells) {
            *slot = clean_cell(text.as_ref());
        }
    }

    pub fn set_header_cell(&mut self, col: usize, text: &str) -> bool {
        match self.header.get_mut(col) {
            Some(slot) => {
                *slot = clean_cell(text);
                true
            }
            None => false,
        }
    }

    /// Text written centered above the repeated header on every
    /// continuation page. Empty disables it.
    pub fn set_continuation_caption(&mut self, caption: &str) {
        self.continuation_caption = caption.trim().to_string();
    }

    /// Extra space below every row, in millimeters.
    pub fn set_extra_row_skip(&mut self, skip_mm: f64) {
        if skip_mm.is_finite() && skip_mm >= 0.0 {
            self.extra_row_skip_mm = skip_mm;
        }
    }

    /// Offset of the whole table from the left margin, in millimeters.
    pub fn set_left_indentation(&mut self, indent_mm: f64) {
        if indent_mm.is_finite() && indent_mm >= 0.0 {
            self.left_indentation_mm = indent_mm;
        }
    }

    fn effective_tabs(&self) -> TabSet {
        let mut tabs = self.tabs.shifted(self.left_indentation_mm);
        tabs.add_tab(self.left_indentation_mm, TabJustification::Left);
        tabs
    }

    pub fn write(&self, report: &mut ReportGenerator) {
        let header_style = match report.text_style(TABLE_HEADER_STYLE) {
            Some(id) => id,
            None => match report.create_child_text_style(TABLE_HEADER_STYLE, "") {
                Ok(id) => {
                    if let Some(style) = report.style_lib_mut().style_mut(id) {
                        style.set_bold(Some(true));
                    }
                    id
                }
                Err(e) => {
                    log::warn!("Could not create the table header style: {}", e);
                    report.root_style()
                }
            },
        };
        let root = report.root_style();

        report.push_tabs(self.effective_tabs());
        self.write_header(report, header_style);

        for cells in &self.rows {
            if !report.has_space_for_another_line(root, 0.0) {
                if report.has_space_for_hor_line(LineType::Medium, 0.0) {
                    report.add_hor_line(LineType::Medium, 0.0, 0.0);
                }
                report.start_next_page();
                log::debug!("Table continues on page {}", report.page_count());
                if !self.continuation_caption.is_empty() {
                    let mut centered = TabSet::new();
                    centered.add_tab(report.content_width_mm() / 2.0, TabJustification::Center);
                    report.push_tabs(centered);
                    report.write_line(&self.continuation_caption, root, 0.0, 0.0);
                    report.pop_tabs();
                }
                self.write_header(report, header_style);
            }
            report.write_line(&cells.join("\t"), root, self.extra_row_skip_mm, 0.0);
        }

        report.add_hor_line(LineType::Medium, 0.0, 0.0);
        report.pop_tabs();
    }

    fn write_header(&self, report: &mut ReportGenerator, style: StyleId) {
        let half = self.extra_row_skip_mm / 2.0;
        report.add_hor_line(LineType::Medium, 0.0, 0.0);
        report.write_line(&self.header.join("\t"), style, half, half);
        report.add_hor_line(LineType::Thin, 0.0, 0.0);
        report.skip(self.extra_row_skip_mm);
    }
}
