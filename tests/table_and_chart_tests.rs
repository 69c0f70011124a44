mod common;

use common::TestResult;
use common::fixtures::*;
use simple_report::{LayoutError, LineChart, PageItem, TabJustification, TabSet, TableWriter, internal_to_mm};

fn price_list() -> Result<TableWriter, LayoutError> {
    let mut tabs = TabSet::new();
    tabs.add_tab(50.0, TabJustification::Right);
    tabs.add_tab(90.0, TabJustification::Right);
    let mut table = TableWriter::new(tabs)?;
    table.set_header(&["Item", "Qty", "Price"]);
    table.set_continuation_caption("Prices (continued)");
    Ok(table)
}

#[test]
fn test_table_pages_with_repeated_header() -> TestResult {
    let mut report = a4_report();
    report.set_footer("", "Page $#$ of $##$", "");
    let mut table = price_list()?;
    for i in 0..150 {
        table.append_row(&[format!("item {}", i), (i % 7).to_string(), format!("{}.00", i)]);
    }
    table.write(&mut report);
    report.insert_header_and_footer();
    assert!(report.page_count() >= 2);

    for (index, page) in report.pages().iter().enumerate() {
        let texts: Vec<_> = page.items().iter().filter_map(PageItem::as_text).map(|t| t.text.as_str()).collect();
        let header_at = if index == 0 { 0 } else { 1 };
        assert_eq!(&texts[header_at..header_at + 3], &["Item", "Qty", "Price"]);
        if index > 0 {
            assert_eq!(texts[0], "Prices (continued)");
        }
    }
    // no content drawn into the footer band
    for page in report.pages() {
        for item in page.items().iter().filter_map(PageItem::as_text) {
            assert!(internal_to_mm(item.origin.y + item.extent.height) <= 297.0 - 20.0);
        }
    }
    Ok(())
}

#[test]
fn test_table_after_text_shares_the_page() -> TestResult {
    let mut report = a4_report();
    report.write_line_named("Inventory", "H1", 2.0, 0.0);
    let cursor = report.cursor_y_mm();
    let mut table = price_list()?;
    table.append_row(&["bolts", "12", "0.40"]);
    table.write(&mut report);
    assert_eq!(report.page_count(), 1);
    assert!(report.cursor_y_mm() > cursor);
    assert!(report.tabs().is_empty());
    Ok(())
}

#[test]
fn test_chart_draws_on_current_page() -> TestResult {
    let mut report = a4_report();
    report.start_next_page();
    let mut chart = LineChart::new(30.0, 60.0, 120.0, 80.0)?;
    chart.add_trace(vec![(0.0, 1.0), (1.0, 4.0), (2.0, 9.0)]);
    chart.add_trace(vec![(0.0, 0.0), (2.0, 2.0)]);
    chart.add_label_x(1.0, "Feb");
    chart.add_label_y(9.0, "9");
    chart.render(&mut report)?;

    let page = report.page(0).unwrap();
    let lines = page.items().iter().filter(|i| matches!(i, PageItem::Line(_))).count();
    // 2 axes + 3 + 2 trace segments + 2 ticks
    assert_eq!(lines, 9);
    let labels: Vec<_> = page.items().iter().filter_map(PageItem::as_text).map(|t| t.text.as_str()).collect();
    assert_eq!(labels, vec!["Feb", "9"]);
    assert_eq!(report.cursor_y_mm(), report.content_top_mm());
    Ok(())
}

#[test]
fn test_chart_explicit_bounds_reject_empty_ranges() -> TestResult {
    let mut report = a4_report();
    report.start_next_page();
    let mut chart = LineChart::new(30.0, 60.0, 120.0, 80.0)?;
    chart.add_trace(vec![(0.0, 0.0), (5.0, 5.0)]);
    assert!(chart.render_with_bounds(&mut report, 0.0, 10.0, 0.0, 10.0).is_ok());
    assert!(matches!(
        chart.render_with_bounds(&mut report, 0.0, 10.0, 3.0, 3.0),
        Err(LayoutError::DegenerateChartRange { axis: 'y', .. })
    ));
    Ok(())
}
