use simple_report::text_report::write_text_report;
use simple_report::{PageRange, ReportBuilder, ReportError, TextDumpSink, render_pages};
use std::env;
use std::fs;
use std::io::{BufWriter, Write};

/// A simple CLI that lays out a marked-up text file and dumps the resulting
/// display lists.
fn main() -> Result<(), ReportError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!("Lays out a plain text report and prints every page item.");
        eprintln!();
        eprintln!("Usage: {} <path/to/report.txt> [path/to/config.json] [path/to/output.txt]", args[0]);
        eprintln!();
        eprintln!("Input lines starting with '# ' or '## ' become headings, '---' draws a rule,");
        eprintln!("'===' starts a new page and '@tabs 20 60:right' sets the tab stops.");
        std::process::exit(1);
    }

    let input_path = &args[1];
    eprintln!("Loading report text from {}", input_path);
    let source = fs::read_to_string(input_path)?;

    let mut builder = ReportBuilder::new();
    if let Some(config_path) = args.get(2) {
        eprintln!("Loading configuration from {}", config_path);
        builder = builder.with_config_json(&fs::read_to_string(config_path)?)?;
    }
    let mut report = builder.build()?;
    report.set_footer("$D$", "", "Page $#$ of $##$");

    let lines = write_text_report(&mut report, &source);
    eprintln!("Laid out {} lines onto {} pages", lines, report.page_count());

    let pages = match args.get(3) {
        Some(output_path) => {
            let file = BufWriter::new(fs::File::create(output_path)?);
            let mut sink = TextDumpSink::new(file);
            let pages = render_pages(report.pages(), PageRange::all(), &mut sink)?;
            sink.into_inner().flush()?;
            eprintln!("Successfully wrote {}", output_path);
            pages
        }
        None => {
            let mut sink = TextDumpSink::new(std::io::stdout().lock());
            render_pages(report.pages(), PageRange::all(), &mut sink)?
        }
    };
    log::info!("Rendered {} pages", pages);
    Ok(())
}
