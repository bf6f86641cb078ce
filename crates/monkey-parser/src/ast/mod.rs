//! Abstract Syntax Tree (AST) definitions for Monkey.
//!
//! The tree is a strict ownership tree: a [`Program`] owns its statements,
//! every statement owns its sub-expressions, and nothing is shared. Every
//! node keeps the token it started at so diagnostics and tests can recover
//! the source spelling.
//!
//! `Display` renders any node in a fully parenthesised canonical form, which
//! makes operator binding visible: `-a * b` prints as `((-a) * b)`.

pub mod expression;
pub mod statement;

pub use expression::*;
pub use statement::*;

use serde::Serialize;
use std::fmt;

/// Behaviour shared by every syntax node.
pub trait Node: fmt::Display {
    /// The literal spelling of the token this node was built from.
    fn token_literal(&self) -> &str;
}

/// The parse root: top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map_or("", |statement| statement.token_literal())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

/// Write `items` separated by `", "`.
pub(crate) fn write_comma_separated<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
