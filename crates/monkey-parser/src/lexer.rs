//! Lexer for the Monkey programming language.
//!
//! A hand-written scanner over an owned copy of the source. It keeps one
//! character of lookahead (`peek_char`) for the two-character operators and
//! hands out one token per [`Lexer::next_token`] call, so the parser pulls
//! tokens on demand instead of receiving a pre-built vector.

use crate::keywords::lookup_ident;
use crate::token::{Span, Token, TokenKind};
use std::borrow::Cow;

/// Main lexer structure.
///
/// `position` is the byte offset of `ch`, `read_position` the byte offset of
/// the character after it. `ch` is `None` once `position` reaches the end of
/// the input.
pub struct Lexer {
    input: String,
    position: usize,
    read_position: usize,
    ch: Option<char>,
    line: u32,
    column: u32,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        let mut lexer = Self {
            input: source.to_owned(),
            position: 0,
            read_position: 0,
            ch: None,
            line: 1,
            column: 0,
        };
        lexer.read_char();
        lexer
    }

    /// The source this lexer scans.
    pub fn source(&self) -> &str {
        &self.input
    }

    /// Scan the next token.
    ///
    /// Once the input is exhausted every call returns an end marker with an
    /// empty literal; the cursor never moves past the end of the buffer.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let (line, column) = (self.line, self.column);

        let Some(ch) = self.ch else {
            let end = self.input.len();
            return Token::fixed(TokenKind::Eof, Span::new(end, end, line, column));
        };

        let token = match ch {
            '=' => self.one_or_two(TokenKind::Equal, TokenKind::EqualEqual),
            '!' => self.one_or_two(TokenKind::Bang, TokenKind::BangEqual),
            ';' => self.single(TokenKind::Semicolon),
            ',' => self.single(TokenKind::Comma),
            '(' => self.single(TokenKind::LeftParen),
            ')' => self.single(TokenKind::RightParen),
            '{' => self.single(TokenKind::LeftBrace),
            '}' => self.single(TokenKind::RightBrace),
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Star),
            '/' => self.single(TokenKind::Slash),
            '<' => self.single(TokenKind::Less),
            '>' => self.single(TokenKind::Greater),
            c if is_letter(c) => {
                let text = self.read_while(is_letter);
                let kind = lookup_ident(text);
                let literal = match kind.spelling() {
                    Some(fixed) => Cow::Borrowed(fixed),
                    None => Cow::Owned(text.to_owned()),
                };
                (kind, literal)
            }
            c if c.is_ascii_digit() => {
                let text = self.read_while(|c| c.is_ascii_digit());
                (TokenKind::IntLiteral, Cow::Owned(text.to_owned()))
            }
            other => {
                self.read_char();
                (TokenKind::Illegal, Cow::Owned(other.to_string()))
            }
        };

        let (kind, literal) = token;
        let token = Token::new(kind, literal, Span::new(start, self.position, line, column));
        tracing::trace!(kind = ?token.kind, literal = %token.literal, span = %token.span, "token");
        token
    }

    /// Drain the lexer into a vector that ends with the end marker.
    pub fn tokenize(self) -> Vec<Token> {
        self.tokens().collect()
    }

    /// Lazy token stream that stops after yielding the end marker.
    pub fn tokens(self) -> Tokens {
        Tokens {
            lexer: self,
            done: false,
        }
    }

    fn read_char(&mut self) {
        match self.ch {
            Some('\n') => {
                self.line += 1;
                self.column = 1;
            }
            _ => self.column += 1,
        }

        self.position = self.read_position;
        self.ch = self
            .input
            .get(self.read_position..)
            .and_then(|rest| rest.chars().next());
        self.read_position = self.position + self.ch.map_or(1, char::len_utf8);
    }

    fn peek_char(&self) -> Option<char> {
        self.input
            .get(self.read_position..)
            .and_then(|rest| rest.chars().next())
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(' ' | '\t' | '\n' | '\r')) {
            self.read_char();
        }
    }

    fn single(&mut self, kind: TokenKind) -> (TokenKind, Cow<'static, str>) {
        self.read_char();
        (kind, Cow::Borrowed(kind.spelling().unwrap_or("")))
    }

    /// `=`/`==` and `!`/`!=`: commit to the two-character form only when the
    /// next character is `=`.
    fn one_or_two(&mut self, one: TokenKind, two: TokenKind) -> (TokenKind, Cow<'static, str>) {
        if self.peek_char() == Some('=') {
            self.read_char();
            self.single(two)
        } else {
            self.single(one)
        }
    }

    fn read_while(&mut self, accept: impl Fn(char) -> bool) -> &str {
        let start = self.position;
        while self.ch.is_some_and(&accept) {
            self.read_char();
        }
        &self.input[start..self.position]
    }
}

/// Identifier runs are letters and underscores only; digits end them.
fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Iterator returned by [`Lexer::tokens`].
pub struct Tokens {
    lexer: Lexer,
    done: bool,
}

impl Iterator for Tokens {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        let token = self.lexer.next_token();
        self.done = token.is_eof();
        Some(token)
    }
}
