//! Parse error types

use crate::token::{Span, TokenKind};
use thiserror::Error;

/// A parse diagnostic.
///
/// Every variant carries the span it refers to; the rendered message starts
/// with `line:column`. None of these abort a parse: the parser records them
/// and moves on to the next statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// `expect_peek` saw the wrong token
    #[error("{span}: expected {expected}, found `{literal}`")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        literal: String,
        span: Span,
    },

    /// `expect_peek` ran into the end of input
    #[error("{span}: unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: TokenKind, span: Span },

    /// A token that cannot start an expression
    #[error("{span}: no prefix parse rule for {kind}")]
    NoPrefixRule {
        kind: TokenKind,
        literal: String,
        span: Span,
    },

    /// The lexer produced an illegal token where an expression was expected
    #[error("{span}: illegal character `{literal}`")]
    IllegalCharacter { literal: String, span: Span },

    /// Integer literal outside the i64 range
    #[error("{span}: could not parse `{literal}` as integer")]
    InvalidInteger { literal: String, span: Span },

    /// Expression nesting deeper than `ParserOptions::max_depth`
    #[error("{span}: expression nesting exceeds the limit of {limit}")]
    NestingTooDeep { limit: usize, span: Span },
}

impl ParseError {
    pub fn span(&self) -> &Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::UnexpectedEof { span, .. }
            | ParseError::NoPrefixRule { span, .. }
            | ParseError::IllegalCharacter { span, .. }
            | ParseError::InvalidInteger { span, .. }
            | ParseError::NestingTooDeep { span, .. } => span,
        }
    }

    /// Short stable code used by rendered diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::UnexpectedToken { .. } => "P0001",
            ParseError::UnexpectedEof { .. } => "P0002",
            ParseError::NoPrefixRule { .. } => "P0003",
            ParseError::IllegalCharacter { .. } => "P0004",
            ParseError::InvalidInteger { .. } => "P0005",
            ParseError::NestingTooDeep { .. } => "P0006",
        }
    }

    /// Get a hint for fixing this error
    pub fn hint(&self) -> Option<String> {
        match self {
            ParseError::UnexpectedToken { expected, .. } => match expected {
                TokenKind::Identifier => {
                    Some("bindings and parameters must be plain names".to_string())
                }
                TokenKind::RightParen => Some("add a closing `)`".to_string()),
                TokenKind::RightBrace => Some("add a closing `}`".to_string()),
                _ => None,
            },
            ParseError::UnexpectedEof { expected, .. } => {
                Some(format!("the input ended before {} was found", expected))
            }
            ParseError::InvalidInteger { .. } => {
                Some(format!("integers must be between 0 and {}", i64::MAX))
            }
            ParseError::NestingTooDeep { .. } => {
                Some("split the expression into smaller `let` bindings".to_string())
            }
            ParseError::NoPrefixRule { .. } | ParseError::IllegalCharacter { .. } => None,
        }
    }
}
