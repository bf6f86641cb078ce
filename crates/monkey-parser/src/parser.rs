//! Parser for the Monkey language
//!
//! A recursive descent parser with a Pratt-style expression core. It pulls
//! tokens from the [`Lexer`] one at a time and keeps exactly two of them in
//! view: `current` and `peek`. [`Parser::advance`] is the only way tokens move
//! forward; the parser never rewinds.

pub mod error;
pub mod expr;
pub mod precedence;
pub mod recovery;
pub mod stmt;

use crate::ast::{Program, Statement};
use crate::lexer::Lexer;
use crate::token::{Span, Token, TokenKind};

pub use error::ParseError;
pub use precedence::Precedence;

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum nesting depth before parsing gives up on the statement with
    /// [`ParseError::NestingTooDeep`]. Every expression level and every
    /// block counts as one level.
    pub max_depth: usize,
}

/// Default nesting limit. Small enough that the deepest accepted input
/// still fits a 2 MB thread stack in debug builds.
pub const DEFAULT_MAX_DEPTH: usize = 128;

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parser state for the Monkey programming language.
pub struct Parser {
    lexer: Lexer,

    /// Token under the cursor
    current: Token,

    /// One token of lookahead
    peek: Token,

    /// Accumulated parse errors (parsing continues after each one)
    errors: Vec<ParseError>,

    options: ParserOptions,

    /// Current nesting depth (expressions and blocks)
    depth: usize,

    /// `{` minus `}` seen up to and including `current`
    brace_depth: usize,
}

impl Parser {
    /// Create a parser over `lexer`.
    ///
    /// Advances twice so that `current` holds the first token and `peek` the
    /// second before any parsing method runs.
    pub fn new(lexer: Lexer) -> Self {
        Self::with_options(lexer, ParserOptions::default())
    }

    pub fn with_options(lexer: Lexer, options: ParserOptions) -> Self {
        let placeholder = Token::fixed(TokenKind::Eof, Span::default());
        let mut parser = Self {
            lexer,
            current: placeholder.clone(),
            peek: placeholder,
            errors: Vec::new(),
            options,
            depth: 0,
            brace_depth: 0,
        };
        parser.advance();
        parser.advance();
        parser
    }

    /// Create a parser straight from source text.
    pub fn from_source(source: &str) -> Self {
        Self::new(Lexer::new(source))
    }

    /// Parse statements until the end marker.
    ///
    /// Empty statements are dropped. Statements that fail to parse are
    /// recorded in [`Parser::errors`] and skipped. After every attempt the
    /// parser advances once, so malformed input can never stall the loop.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(Some(statement)) => program.push(statement),
                Ok(None) => {}
                Err(err) => {
                    self.record_error(err);
                    recovery::sync_to_statement_boundary(self, 0);
                }
            }
            self.advance();
        }

        program
    }

    /// Parse the whole input, returning the program only if it parsed cleanly.
    pub fn parse(mut self) -> Result<Program, Vec<ParseError>> {
        let program = self.parse_program();
        if self.errors.is_empty() {
            Ok(program)
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Token Management
    // ========================================================================

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    /// Peek at the next token (lookahead).
    #[inline]
    pub fn peek(&self) -> &Token {
        &self.peek
    }

    /// Shift `peek` into `current` and pull a fresh `peek` from the lexer.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
        match self.current.kind {
            TokenKind::LeftBrace => self.brace_depth += 1,
            TokenKind::RightBrace => self.brace_depth = self.brace_depth.saturating_sub(1),
            _ => {}
        }
        tracing::trace!(
            current = self.current.kind.name(),
            peek = self.peek.kind.name(),
            "advance"
        );
    }

    /// Number of blocks open at `current`. A `{` counts as open on itself, a
    /// `}` as already closed.
    #[inline]
    pub(crate) fn brace_depth(&self) -> usize {
        self.brace_depth
    }

    #[inline]
    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    #[inline]
    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advance only if the peek token has the expected kind.
    ///
    /// On mismatch nothing moves and the error describes what was expected
    /// and what was found; the caller abandons its statement.
    pub fn expect_peek(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.peek_is(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.peek_error(kind))
        }
    }

    pub fn current_precedence(&self) -> Precedence {
        precedence::get_precedence(self.current.kind)
    }

    pub fn peek_precedence(&self) -> Precedence {
        precedence::get_precedence(self.peek.kind)
    }

    // ========================================================================
    // Error Handling
    // ========================================================================

    /// Diagnostics collected so far.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Record a diagnostic for an abandoned statement.
    pub(crate) fn record_error(&mut self, err: ParseError) {
        tracing::debug!(error = %err, "abandoning statement");
        self.errors.push(err);
    }

    fn peek_error(&self, expected: TokenKind) -> ParseError {
        if self.peek.is_eof() {
            ParseError::UnexpectedEof {
                expected,
                span: self.peek.span,
            }
        } else {
            ParseError::UnexpectedToken {
                expected,
                found: self.peek.kind,
                literal: self.peek.literal().to_string(),
                span: self.peek.span,
            }
        }
    }

    /// Enter one level of expression or block nesting.
    pub(crate) fn enter_nested(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.options.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.options.max_depth,
                span: self.current.span,
            });
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn exit_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn parse_statement(&mut self) -> Result<Option<Statement>, ParseError> {
        stmt::parse_statement(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_new_primes_two_tokens() {
        let parser = Parser::from_source("let x = 42;");

        assert!(parser.current_is(TokenKind::Let));
        assert!(parser.peek_is(TokenKind::Identifier));
        assert_eq!(parser.peek().literal(), "x");
    }

    #[test]
    fn test_parser_advance() {
        let mut parser = Parser::from_source("let x");

        parser.advance();
        assert!(parser.current_is(TokenKind::Identifier));
        assert!(parser.peek_is(TokenKind::Eof));

        parser.advance();
        parser.advance();
        assert!(parser.current_is(TokenKind::Eof));
        assert!(parser.peek_is(TokenKind::Eof));
    }

    #[test]
    fn test_parser_at_eof() {
        let mut parser = Parser::from_source("");

        assert!(parser.current_is(TokenKind::Eof));
        assert!(parser.parse_program().is_empty());
        assert!(!parser.has_errors());
    }

    #[test]
    fn test_expect_peek_success_advances() {
        let mut parser = Parser::from_source("let x");

        assert!(parser.expect_peek(TokenKind::Identifier).is_ok());
        assert!(parser.current_is(TokenKind::Identifier));
    }

    #[test]
    fn test_expect_peek_failure_does_not_advance() {
        let mut parser = Parser::from_source("let = 5;");

        let err = parser.expect_peek(TokenKind::Identifier).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedToken {
                expected: TokenKind::Identifier,
                found: TokenKind::Equal,
                ..
            }
        ));
        assert!(parser.current_is(TokenKind::Let));
        assert!(parser.peek_is(TokenKind::Equal));
    }

    #[test]
    fn test_expect_peek_at_eof() {
        let mut parser = Parser::from_source("let");

        let err = parser.expect_peek(TokenKind::Identifier).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEof { .. }));
    }

    #[test]
    fn test_nesting_guard() {
        let mut parser = Parser::with_options(Lexer::new("x"), ParserOptions { max_depth: 1 });

        assert!(parser.enter_nested().is_ok());
        assert!(matches!(
            parser.enter_nested(),
            Err(ParseError::NestingTooDeep { limit: 1, .. })
        ));
        parser.exit_nested();
        assert!(parser.enter_nested().is_ok());
    }

    #[test]
    fn test_brace_depth_follows_current() {
        let mut parser = Parser::from_source("{ { } x }");

        assert_eq!(parser.brace_depth(), 1);
        parser.advance();
        assert_eq!(parser.brace_depth(), 2);
        parser.advance();
        assert_eq!(parser.brace_depth(), 1);
        parser.advance();
        assert!(parser.current_is(TokenKind::Identifier));
        assert_eq!(parser.brace_depth(), 1);
        parser.advance();
        assert_eq!(parser.brace_depth(), 0);
    }

    #[test]
    fn test_stray_close_brace_does_not_underflow() {
        let mut parser = Parser::from_source("} } {");

        assert_eq!(parser.brace_depth(), 0);
        parser.advance();
        assert_eq!(parser.brace_depth(), 0);
        parser.advance();
        assert_eq!(parser.brace_depth(), 1);
    }
}
