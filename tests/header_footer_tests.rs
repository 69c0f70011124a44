mod common;

use common::fixtures::*;
use simple_report::{PageItem, ReportBuilder, ReportConfig, internal_to_mm};

fn layer_texts(report: &simple_report::ReportGenerator, page: usize) -> Vec<String> {
    report
        .page(page)
        .unwrap()
        .header_footer_items()
        .iter()
        .filter_map(PageItem::as_text)
        .map(|t| t.text.clone())
        .collect()
}

#[test]
fn test_page_of_total_footer() {
    let mut report = a4_report();
    report.set_footer("", "Page $#$ of $##$", "");
    for _ in 0..3 {
        report.start_next_page();
    }
    report.insert_header_and_footer();
    assert_eq!(layer_texts(&report, 1), vec!["Page 2 of 3"]);
    assert_eq!(layer_texts(&report, 2), vec!["Page 3 of 3"]);
}

#[test]
fn test_totals_follow_later_pages() {
    let mut report = a4_report();
    report.set_footer("", "", "$#$/$##$");
    report.start_next_page();
    report.insert_header_and_footer();
    assert_eq!(layer_texts(&report, 0), vec!["1/1"]);

    report.start_next_page();
    report.insert_header_and_footer();
    assert_eq!(layer_texts(&report, 0), vec!["1/2"]);
    assert_eq!(report.page(0).unwrap().header_footer_items().len(), 1);
}

#[test]
fn test_date_and_time_tokens() {
    let mut report = a4_report();
    report.set_header("$D$", "", "$T$");
    report.start_next_page();
    report.insert_header_and_footer();
    assert_eq!(layer_texts(&report, 0), vec!["2024-03-05", "14:30"]);
}

#[test]
fn test_configured_date_format() {
    let config = ReportConfig::from_json(r#"{ "dateFormat": "%d.%m.%Y", "timeFormat": "%H.%M" }"#).unwrap();
    let mut report = ReportBuilder::new().with_config(config).build().unwrap();
    report.set_timestamp(a4_report().timestamp());
    report.set_footer("$D$ $T$", "", "");
    report.start_next_page();
    report.insert_header_and_footer();
    assert_eq!(layer_texts(&report, 0), vec!["05.03.2024 14.30"]);
}

#[test]
fn test_per_page_override_falls_back_to_global() {
    let mut report = a4_report();
    report.set_header("Report", "", "");
    report.set_footer("", "$#$", "");
    report.set_header_for_page(0, "", "Cover", "");
    report.set_footer_for_page(1, "", "", "");
    for _ in 0..3 {
        report.start_next_page();
    }
    report.insert_header_and_footer();

    assert_eq!(layer_texts(&report, 0), vec!["Cover", "1"]);
    assert!(layer_texts(&report, 1).iter().all(|t| t != "2"));
    assert_eq!(layer_texts(&report, 1), vec!["Report"]);
    assert_eq!(layer_texts(&report, 2), vec!["Report", "3"]);

    report.clear_page_header_footer(0);
    report.insert_header_and_footer();
    assert_eq!(layer_texts(&report, 0), vec!["Report", "1"]);
}

#[test]
fn test_slots_are_anchored_to_margins() {
    let mut report = a4_report();
    report.set_header("L", "C", "R");
    report.set_footer("", "", "F");
    report.start_next_page();
    report.insert_header_and_footer();

    let page = report.page(0).unwrap();
    let texts: Vec<_> = page.header_footer_items().iter().filter_map(PageItem::as_text).collect();
    assert!(approx_eq(internal_to_mm(texts[0].origin.x), 20.0));
    assert!(approx_eq(internal_to_mm(texts[0].origin.y), 20.0));
    assert!(approx_eq(internal_to_mm(texts[1].origin.x + texts[1].extent.width / 2.0), 105.0));
    assert!(approx_eq(internal_to_mm(texts[2].origin.x + texts[2].extent.width), 190.0));
    let footer = texts[3];
    assert!(approx_eq(internal_to_mm(footer.origin.y + footer.extent.height), 277.0));
    assert!(footer.font.italic);
    // the layer never collides with the content area
    assert!(internal_to_mm(texts[0].origin.y + texts[0].extent.height) <= report.content_top_mm());
    assert!(internal_to_mm(footer.origin.y) >= report.max_y_mm());
}
