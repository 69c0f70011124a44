//! Flowing a lightly marked-up plain text document into a report.
//!
//! One input line becomes one report line. A few prefixes select other
//! primitives:
//!
//! | line            | effect                                           |
//! |-----------------|--------------------------------------------------|
//! | `# Title`       | line in the `H1` style                           |
//! | `## Title`      | line in the `H2` style                           |
//! | `---`           | medium horizontal rule                           |
//! | `===`           | page break                                       |
//! | `@tabs 20 60:right 90:center` | replaces the tab stops (`@tabs` alone clears them) |
//! | `@header l\|c\|r`, `@footer l\|c\|r` | sets the global header/footer      |
//!
//! Everything else, including tab characters, is written as is in the root
//! style.

use simple_report_layout::{H1_STYLE, H2_STYLE, LineType, ReportGenerator, TabJustification, TabSet};

const HEADING_SKIP_MM: f64 = 1.0;

/// Writes `source` into `report` and inserts the header and footer.
/// Returns the number of input lines consumed.
pub fn write_text_report(report: &mut ReportGenerator, source: &str) -> usize {
    let mut count = 0;
    for line in source.lines() {
        write_text_line(report, line);
        count += 1;
    }
    report.insert_header_and_footer();
    log::debug!("Wrote {} text lines onto {} pages", count, report.page_count());
    count
}

fn write_text_line(report: &mut ReportGenerator, line: &str) {
    if let Some(rest) = line.strip_prefix("## ") {
        report.write_line_named(rest.trim(), H2_STYLE, HEADING_SKIP_MM / 2.0, HEADING_SKIP_MM);
    } else if let Some(rest) = line.strip_prefix("# ") {
        report.write_line_named(rest.trim(), H1_STYLE, HEADING_SKIP_MM, HEADING_SKIP_MM);
    } else if line.trim() == "---" {
        report.add_hor_line(LineType::Medium, 0.0, 0.0);
    } else if line.trim() == "===" {
        report.start_next_page();
    } else if let Some(rest) = line.strip_prefix("@tabs") {
        report.clear_all_tabs();
        for tab in parse_tabs(rest).iter() {
            report.add_tab(tab.position, tab.justification);
        }
    } else if let Some(rest) = line.strip_prefix("@header") {
        let [l, c, r] = split_slots(rest);
        report.set_header(l, c, r);
    } else if let Some(rest) = line.strip_prefix("@footer") {
        let [l, c, r] = split_slots(rest);
        report.set_footer(l, c, r);
    } else {
        report.write_line(line, report.root_style(), 0.0, 0.0);
    }
}

/// Parses `20 60:right 90:center`; unparsable entries are skipped.
pub fn parse_tabs(stops: &str) -> TabSet {
    let mut tabs = TabSet::new();
    for entry in stops.split_whitespace() {
        let (position, justification) = match entry.split_once(':') {
            Some((pos, "right")) => (pos, TabJustification::Right),
            Some((pos, "center")) => (pos, TabJustification::Center),
            Some((pos, _)) => (pos, TabJustification::Left),
            None => (entry, TabJustification::Left),
        };
        match position.parse::<f64>() {
            Ok(p) => tabs.add_tab(p, justification),
            Err(_) => log::warn!("Ignoring tab stop '{}'", entry),
        }
    }
    tabs
}

fn split_slots(slots: &str) -> [&str; 3] {
    let mut parts = slots.splitn(3, '|').map(str::trim);
    [
        parts.next().unwrap_or(""),
        parts.next().unwrap_or(""),
        parts.next().unwrap_or(""),
    ]
}
