//! `monkey parse`: parse a file and print the program or its diagnostics.

use monkey_parser::{diagnostic, Lexer, Parser, ParserOptions};
use std::path::Path;
use termcolor::ColorChoice;

/// Returns `Ok(false)` when the file had parse errors.
pub fn execute(
    file: &Path,
    json: bool,
    max_depth: usize,
    color: ColorChoice,
) -> anyhow::Result<bool> {
    let source = super::read_source(file)?;
    let mut parser = Parser::with_options(Lexer::new(&source), ParserOptions { max_depth });
    let program = parser.parse_program();

    if parser.has_errors() {
        let errors = parser.into_errors();
        tracing::debug!(file = %file.display(), count = errors.len(), "parse failed");
        diagnostic::emit(&errors, &file.display().to_string(), &source, color)?;
        return Ok(false);
    }

    tracing::debug!(file = %file.display(), statements = program.len(), "parsed");
    if json {
        println!("{}", serde_json::to_string_pretty(&program)?);
    } else {
        for statement in &program {
            println!("{}", statement);
        }
    }
    Ok(true)
}
