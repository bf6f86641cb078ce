//! Diagnostic rendering for parse errors
//!
//! Turns [`ParseError`]s into `codespan-reporting` diagnostics with the
//! offending source line underlined.

use crate::parser::ParseError;
use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::{self, Config};
use termcolor::{ColorChoice, NoColor, StandardStream, WriteColor};

/// Build the codespan diagnostic for a single parse error.
pub fn to_diagnostic(error: &ParseError, file_id: usize) -> Diagnostic<usize> {
    let span = error.span();
    let mut diagnostic = Diagnostic::error()
        .with_message(error.to_string())
        .with_code(error.code())
        .with_labels(vec![
            Label::primary(file_id, span.start..span.end).with_message(label_message(error))
        ]);

    if let Some(hint) = error.hint() {
        diagnostic = diagnostic.with_notes(vec![format!("help: {}", hint)]);
    }

    diagnostic
}

fn label_message(error: &ParseError) -> String {
    match error {
        ParseError::UnexpectedToken { expected, .. } => format!("expected {}", expected),
        ParseError::UnexpectedEof { expected, .. } => format!("expected {} before here", expected),
        ParseError::NoPrefixRule { .. } => "cannot start an expression".to_string(),
        ParseError::IllegalCharacter { .. } => "not part of the language".to_string(),
        ParseError::InvalidInteger { .. } => "out of range".to_string(),
        ParseError::NestingTooDeep { .. } => "nesting limit reached here".to_string(),
    }
}

/// Write every error to `writer`.
pub fn emit_to<W: WriteColor>(
    writer: &mut W,
    errors: &[ParseError],
    name: &str,
    source: &str,
) -> Result<(), codespan_reporting::files::Error> {
    let mut files = SimpleFiles::new();
    let file_id = files.add(name.to_string(), source.to_string());
    let config = Config::default();

    for error in errors {
        term::emit(writer, &config, &files, &to_diagnostic(error, file_id))?;
    }
    Ok(())
}

/// Emit the errors to stderr.
pub fn emit(
    errors: &[ParseError],
    name: &str,
    source: &str,
    color: ColorChoice,
) -> Result<(), codespan_reporting::files::Error> {
    let mut writer = StandardStream::stderr(color);
    emit_to(&mut writer, errors, name, source)
}

/// Render the errors without colour.
pub fn render(errors: &[ParseError], name: &str, source: &str) -> String {
    let mut writer = NoColor::new(Vec::new());
    if let Err(err) = emit_to(&mut writer, errors, name, source) {
        // A span outside the source; fall back to the plain messages.
        tracing::debug!(error = %err, "diagnostic rendering failed");
        return errors
            .iter()
            .map(|e| format!("error[{}]: {}\n", e.code(), e))
            .collect();
    }
    String::from_utf8_lossy(&writer.into_inner()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Span, TokenKind};
    use codespan_reporting::diagnostic::Severity;

    fn unexpected_equal() -> ParseError {
        ParseError::UnexpectedToken {
            expected: TokenKind::Identifier,
            found: TokenKind::Equal,
            literal: "=".to_string(),
            span: Span::new(4, 5, 1, 5),
        }
    }

    #[test]
    fn test_diagnostic_carries_code_and_label() {
        let diag = to_diagnostic(&unexpected_equal(), 0);

        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.code.as_deref(), Some("P0001"));
        assert_eq!(diag.labels.len(), 1);
        assert_eq!(diag.labels[0].range, 4..5);
        assert!(diag.notes[0].starts_with("help: "));
    }

    #[test]
    fn test_render_points_at_source() {
        let rendered = render(&[unexpected_equal()], "input.monkey", "let = 5;");

        assert!(rendered.contains("error[P0001]"));
        assert!(rendered.contains("input.monkey:1:5"));
        assert!(rendered.contains("let = 5;"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[], "input.monkey", "let x = 1;"), "");
    }
}
