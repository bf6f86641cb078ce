//! Subcommand implementations.

pub mod lex;
pub mod parse;
pub mod repl;

use anyhow::Context;
use std::path::Path;

/// Read a source file, naming it in the error.
pub fn read_source(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}
