//! Rich parser error reports for file mode.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use kea::parser::ParseError;

/// Returns the report range for an error, clamped to the source.
///
/// Spans of `EOF` tokens can sit one past the last byte; widen a
/// zero-width end-of-source span to the final byte so the report has
/// something to point at.
fn report_range(source: &str, error: &ParseError) -> Range<usize> {
    let span = error.span();
    let start = span.start.min(source.len());
    let end = span.end.clamp(start, source.len());

    if start == end && start == source.len() && !source.is_empty() {
        source.len() - 1..source.len()
    } else {
        start..end
    }
}

/// Prints an ariadne report for a parser error against its source.
///
/// Falls back to a plain one-line message if the report cannot be
/// rendered.
pub(crate) fn report_parse_error(filename: &str, source: &str, error: &ParseError) {
    let range = report_range(source, error);

    let report = Report::build(ReportKind::Error, (filename, range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(error.short_message())
        .with_label(
            Label::new((filename, range))
                .with_message(error.message())
                .with_color(Color::Red),
        )
        .finish();

    if let Err(report_err) = report.eprint((filename, Source::from(source))) {
        eprintln!("Error: {}", error);
        eprintln!("(Failed to display detailed error report: {})", report_err);
    }
}
