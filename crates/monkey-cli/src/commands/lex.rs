//! `monkey lex`: print the token stream of a file.

use monkey_parser::{Lexer, Token};
use std::path::Path;

pub fn execute(file: &Path, json: bool) -> anyhow::Result<()> {
    let source = super::read_source(file)?;
    let tokens = Lexer::new(&source).tokenize();
    tracing::debug!(file = %file.display(), count = tokens.len(), "lexed");

    if json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else {
        for token in &tokens {
            println!("{}", format_token(token));
        }
    }
    Ok(())
}

/// `line:column NAME "literal"`
pub fn format_token(token: &Token) -> String {
    format!("{} {}", token.span, token)
}
