//! Statement AST nodes

use super::{Expression, Identifier, Node};
use crate::token::{Span, Token};
use serde::Serialize;
use std::fmt;

/// Top-level or block-level statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    /// Binding: `let x = 5;`
    Let(LetStatement),

    /// `return x;` or a bare `return;`
    Return(ReturnStatement),

    /// An expression used as a statement: `x + 1;`
    Expression(ExpressionStatement),
}

impl Statement {
    /// The token the statement started at.
    pub fn token(&self) -> &Token {
        match self {
            Statement::Let(s) => &s.token,
            Statement::Return(s) => &s.token,
            Statement::Expression(s) => &s.token,
        }
    }

    pub fn span(&self) -> &Span {
        &self.token().span
    }
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        self.token().literal()
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(s) => write!(f, "{}", s),
            Statement::Return(s) => write!(f, "{}", s),
            Statement::Expression(s) => write!(f, "{}", s),
        }
    }
}

// ============================================================================
// Let
// ============================================================================

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LetStatement {
    /// The `let` token
    pub token: Token,
    pub name: Identifier,
    pub value: Expression,
}

impl Node for LetStatement {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for LetStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = {};", self.token_literal(), self.name, self.value)
    }
}

// ============================================================================
// Return
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnStatement {
    /// The `return` token
    pub token: Token,
    pub value: Option<Expression>,
}

impl Node for ReturnStatement {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {};", self.token_literal(), value),
            None => write!(f, "{};", self.token_literal()),
        }
    }
}

// ============================================================================
// Expression statement
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpressionStatement {
    /// First token of the expression
    pub token: Token,
    pub expression: Expression,
}

impl Node for ExpressionStatement {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

// ============================================================================
// Block
// ============================================================================

/// `{ ... }` body of an `if` branch or a function literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockStatement {
    /// The `{` token
    pub token: Token,
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Node for BlockStatement {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}
