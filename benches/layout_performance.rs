//! Layout engine micro-benchmarks
//!
//! Measures pagination cost for flowed lines, tables and the header/footer
//! pass as the amount of content grows.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use simple_report::{ReportGenerator, TabJustification, TabSet, TableWriter};
use std::hint::black_box;

fn new_report() -> ReportGenerator {
    let mut report = ReportGenerator::new(210.0, 297.0, 20.0).expect("A4 is a valid page");
    report.set_header("Benchmark", "", "$D$ $T$");
    report.set_footer("", "Page $#$ of $##$", "");
    report
}

fn benchmark_write_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_line");

    for line_count in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("lines", line_count), &line_count, |b, &count| {
            b.iter(|| {
                let mut report = new_report();
                report.add_tab(40.0, TabJustification::Left);
                report.add_tab(120.0, TabJustification::Right);
                let root = report.root_style();
                for i in 0..count {
                    report.write_line(&format!("entry {}\tdescription\t{}.00", i, i), root, 0.0, 0.0);
                }
                black_box(report.page_count())
            });
        });
    }

    group.finish();
}

fn benchmark_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_write");

    for row_count in [10, 100, 1_000] {
        let mut tabs = TabSet::new();
        tabs.add_tab(50.0, TabJustification::Left);
        tabs.add_tab(100.0, TabJustification::Center);
        tabs.add_tab(160.0, TabJustification::Right);
        let mut table = TableWriter::new(tabs).expect("table has tabs");
        table.set_header(&["Id", "Name", "Group", "Amount"]);
        table.set_continuation_caption("continued");
        for i in 0..row_count {
            table.append_row(&[i.to_string(), format!("name {}", i), "A".to_string(), format!("{}.50", i)]);
        }

        group.bench_with_input(BenchmarkId::new("rows", row_count), &table, |b, table| {
            b.iter(|| {
                let mut report = new_report();
                table.write(&mut report);
                black_box(report.page_count())
            });
        });
    }

    group.finish();
}

fn benchmark_header_footer(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_header_and_footer");

    for page_count in [10, 100, 1_000] {
        let mut report = new_report();
        for _ in 0..page_count {
            report.start_next_page();
        }
        group.bench_with_input(BenchmarkId::new("pages", page_count), &page_count, |b, _| {
            b.iter(|| {
                report.insert_header_and_footer();
                black_box(report.page_count())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_write_lines, benchmark_tables, benchmark_header_footer);
criterion_main!(benches);
