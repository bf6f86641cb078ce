//! Monkey Language Parser
//!
//! Lexer and parser for the Monkey programming language. Source text goes
//! through the [`Lexer`] one token at a time; the [`Parser`] pulls those
//! tokens with two tokens of lookahead and builds a [`Program`].
//!
//! ```
//! let program = monkey_parser::parse("let add = fn(a, b) { a + b; };").unwrap();
//! assert_eq!(program.to_string(), "let add = fn(a, b) (a + b);");
//! ```

pub mod ast;
pub mod diagnostic;
pub mod keywords;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{Node, Program};
pub use keywords::lookup_ident;
pub use lexer::Lexer;
pub use parser::{ParseError, Parser, ParserOptions, DEFAULT_MAX_DEPTH};
pub use token::{Span, Token, TokenKind};

/// Parse `source` into a program, or return every diagnostic found.
pub fn parse(source: &str) -> Result<Program, Vec<ParseError>> {
    Parser::from_source(source).parse()
}
