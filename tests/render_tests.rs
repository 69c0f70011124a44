mod common;

use common::fixtures::*;
use common::{RecordingSink, SinkEvent, TestResult};
use simple_report::text_report::write_text_report;
use simple_report::{PageRange, RenderError, TextDumpSink, render_pages};

fn three_page_report() -> simple_report::ReportGenerator {
    let mut report = a4_report();
    report.set_footer("", "Page $#$ of $##$", "");
    for title in ["one", "two", "three"] {
        report.start_next_page();
        report.write_line(title, report.root_style(), 0.0, 0.0);
    }
    report.insert_header_and_footer();
    report
}

#[test]
fn test_replays_content_then_layer() -> TestResult {
    let report = three_page_report();
    let mut sink = RecordingSink::default();
    let rendered = render_pages(report.pages(), PageRange::all(), &mut sink)?;
    assert_eq!(rendered, 3);
    assert_eq!(sink.count(&SinkEvent::NewPage), 2);
    assert_eq!(sink.count(&SinkEvent::Finish), 1);
    assert_eq!(sink.events[0], SinkEvent::Begin(0));
    assert_eq!(
        sink.texts(),
        vec!["one", "Page 1 of 3", "two", "Page 2 of 3", "three", "Page 3 of 3"]
    );
    Ok(())
}

#[test]
fn test_page_range_selection() -> TestResult {
    let report = three_page_report();
    let mut sink = RecordingSink::default();
    assert_eq!(render_pages(report.pages(), PageRange::new(2, 0), &mut sink)?, 2);
    assert_eq!(sink.events[0], SinkEvent::Begin(1));
    assert_eq!(sink.texts(), vec!["two", "Page 2 of 3", "three", "Page 3 of 3"]);

    let mut sink = RecordingSink::default();
    assert_eq!(render_pages(report.pages(), PageRange::new(3, 99), &mut sink)?, 1);

    let mut sink = RecordingSink::default();
    let err = render_pages(report.pages(), PageRange::new(4, 5), &mut sink).unwrap_err();
    assert!(matches!(err, RenderError::EmptyRange { page_count: 3, .. }));
    Ok(())
}

#[test]
fn test_empty_report_renders_nothing() -> TestResult {
    let report = a4_report();
    let mut sink = RecordingSink::default();
    assert_eq!(render_pages(report.pages(), PageRange::new(2, 1), &mut sink)?, 0);
    assert_eq!(sink.events, vec![SinkEvent::Finish]);
    Ok(())
}

#[test]
fn test_text_dump_of_marked_up_report() -> TestResult {
    let mut report = a4_report();
    let source = "@header Inventory||$D$\n# Stock\n@tabs 60:right\nBolts\t120\n---\n===\nDone";
    write_text_report(&mut report, source);

    let mut sink = TextDumpSink::new(Vec::new());
    render_pages(report.pages(), PageRange::all(), &mut sink)?;
    let dump = String::from_utf8(sink.into_inner())?;

    assert!(dump.starts_with("page 1 (210.00 x 297.00 mm)"));
    assert!(dump.contains("\"Stock\""));
    assert!(dump.contains("Arial-Bold"));
    assert!(dump.contains("\"2024-03-05\""));
    assert!(dump.contains("---\npage 2"));
    assert_eq!(dump.matches("\"Inventory\"").count(), 2);
    Ok(())
}
