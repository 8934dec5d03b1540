//! Rendering of scan results for humans.

use std::io;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use objtext_lexer_core::{Decline, SourceBuffer};

use crate::driver::ValueReport;

#[cfg(test)]
mod tests;

/// One line per value: `line:col  outcome`, with the token text for
/// accepted bare strings. Lines and columns are one-based.
pub fn format_report(source: &SourceBuffer, report: &ValueReport) -> String {
    let position = format!("{}:{}", report.line + 1, report.column + 1);
    match report.span {
        Some(span) => format!("{position:>8}  {} {:?}", report.outcome, source.slice(span)),
        None => format!("{position:>8}  {}", report.outcome),
    }
}

/// Write an ariadne warning for a malformed value. Other reports write
/// nothing.
pub fn render_malformed<W: io::Write>(
    path: &str,
    source: &SourceBuffer,
    report: &ValueReport,
    color: bool,
    out: W,
) -> io::Result<()> {
    let Some(Decline::Malformed(what)) = report.outcome.decline() else {
        return Ok(());
    };
    let start = report.offset as usize;
    let line_end = source
        .line_span(report.line)
        .map_or(source.len(), |span| span.end) as usize;
    let end = line_end.max(start + 1).min(source.as_str().len().max(start));

    Report::build(ReportKind::Warning, path, start)
        .with_config(Config::default().with_color(color))
        .with_message("value cannot be read as a bare string")
        .with_label(
            Label::new((path, start..end))
                .with_message(what.to_string())
                .with_color(Color::Yellow),
        )
        .finish()
        .write((path, Source::from(source.as_str().to_owned())), out)
}
