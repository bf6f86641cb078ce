//! Statement parsing
//!
//! Every statement parser starts with `current` on the statement's first
//! token and returns with `current` on its last token (the `;` when one is
//! present). The caller performs the advance past it.

use super::expr::{identifier, parse_expression};
use super::{recovery, ParseError, Parser, Precedence};
use crate::ast::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement, Statement};
use crate::token::TokenKind;

/// Parse a statement.
///
/// Returns `Ok(None)` for an empty statement (a lone `;`), which the caller
/// skips without a diagnostic.
pub fn parse_statement(parser: &mut Parser) -> Result<Option<Statement>, ParseError> {
    let statement = match parser.current().kind {
        TokenKind::Let => Statement::Let(parse_let_statement(parser)?),
        TokenKind::Return => Statement::Return(parse_return_statement(parser)?),
        TokenKind::Semicolon => return Ok(None),
        _ => Statement::Expression(parse_expression_statement(parser)?),
    };
    Ok(Some(statement))
}

/// `let <identifier> = <expression> [;]`
pub fn parse_let_statement(parser: &mut Parser) -> Result<LetStatement, ParseError> {
    let token = parser.current().clone();

    parser.expect_peek(TokenKind::Identifier)?;
    let name = identifier(parser.current());

    parser.expect_peek(TokenKind::Equal)?;
    parser.advance();

    let value = parse_expression(parser, Precedence::Lowest)?;
    skip_optional_semicolon(parser);

    Ok(LetStatement { token, name, value })
}

/// `return [<expression>] [;]`
pub fn parse_return_statement(parser: &mut Parser) -> Result<ReturnStatement, ParseError> {
    let token = parser.current().clone();

    if matches!(
        parser.peek().kind,
        TokenKind::Semicolon | TokenKind::RightBrace | TokenKind::Eof
    ) {
        skip_optional_semicolon(parser);
        return Ok(ReturnStatement { token, value: None });
    }

    parser.advance();
    let value = parse_expression(parser, Precedence::Lowest)?;
    skip_optional_semicolon(parser);

    Ok(ReturnStatement {
        token,
        value: Some(value),
    })
}

pub fn parse_expression_statement(parser: &mut Parser) -> Result<ExpressionStatement, ParseError> {
    let token = parser.current().clone();
    let expression = parse_expression(parser, Precedence::Lowest)?;
    skip_optional_semicolon(parser);

    Ok(ExpressionStatement { token, expression })
}

/// `{ <statement>* }`, entered with `current` on the `{`.
///
/// Returns with `current` on the closing `}`. A block counts as one level
/// of nesting. A statement that fails inside the block is recorded and
/// skipped up to the next statement of the same block, so the block itself
/// still parses. Running into the end marker first is an error.
pub fn parse_block_statement(parser: &mut Parser) -> Result<BlockStatement, ParseError> {
    parser.enter_nested()?;
    let result = parse_block_body(parser);
    parser.exit_nested();
    result
}

fn parse_block_body(parser: &mut Parser) -> Result<BlockStatement, ParseError> {
    let token = parser.current().clone();
    let level = parser.brace_depth();
    let mut statements = Vec::new();

    parser.advance();
    while !parser.current_is(TokenKind::RightBrace) {
        if parser.current_is(TokenKind::Eof) {
            return Err(ParseError::UnexpectedEof {
                expected: TokenKind::RightBrace,
                span: parser.current().span,
            });
        }
        match parse_statement(parser) {
            Ok(Some(statement)) => statements.push(statement),
            Ok(None) => {}
            Err(err) => {
                parser.record_error(err);
                if recovery::sync_to_statement_boundary(parser, level) {
                    break;
                }
            }
        }
        parser.advance();
    }

    Ok(BlockStatement { token, statements })
}

fn skip_optional_semicolon(parser: &mut Parser) {
    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }
}
