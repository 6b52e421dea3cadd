//! Error rendering using ariadne
//!
//! Errors do not carry their source text, so every function here takes the
//! text the failing expression was compiled from.

use crate::{Diagnostic, Error, Severity};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<expr>";

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use scalc::{Engine, render_error};
///
/// let source = "1 [ 2";
/// if let Err(e) = Engine::default().compile(source) {
///     render_error(source, &e);
/// }
/// ```
pub fn render_error(source: &str, error: &Error) {
    render_error_to_writer(source, error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(source: &str, error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(source, error, writer, true)
}

/// Render an error to a String (useful for logs, web UIs, etc.)
pub fn render_error_to_string(source: &str, error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(source: &str, error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    source: &str,
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    render_diagnostics(source, &error.diagnostics(), writer, use_color)
}

fn render_diagnostics(
    source: &str,
    diagnostics: &[Diagnostic],
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    for diag in diagnostics {
        let mut colors = ColorGenerator::new();
        colors.next(); // Skip the first color.

        let kind = match diag.severity {
            Severity::Error => ReportKind::Error,
            Severity::Warning => ReportKind::Warning,
            Severity::Info => ReportKind::Advice,
        };

        let mut report = Report::build(kind, (SOURCE_ID, diag.span.0.clone()))
            .with_message(&diag.message)
            .with_config(ariadne::Config::default().with_color(use_color));

        if let Some(code) = &diag.code {
            report = report.with_code(code);
        }

        let color = colors.next();
        report = report.with_label(
            Label::new((SOURCE_ID, diag.span.0.clone()))
                .with_message(&diag.message)
                .with_color(color),
        );

        for related in &diag.related {
            let color = colors.next();
            report = report.with_label(
                Label::new((SOURCE_ID, related.span.0.clone()))
                    .with_message(&related.message)
                    .with_color(color),
            );
        }

        if let Some(help) = &diag.help {
            report = report.with_help(help);
        }

        report.finish().write((SOURCE_ID, Source::from(source)), &mut *writer)?;
    }

    Ok(())
}
