//! Expression parsing
//!
//! Pratt parsing: each token kind may have a prefix rule (it can start an
//! expression) and an infix rule (it can continue one), and the binding
//! strength of infix tokens comes from [`super::precedence`].
//! `parse_expression(min)` parses a prefix term, then keeps folding in infix
//! operators while the peek token binds tighter than `min`.

use super::stmt::parse_block_statement;
use super::{ParseError, Parser, Precedence};
use crate::ast::{
    BooleanLiteral, CallExpression, Expression, FunctionLiteral, Identifier, IfExpression,
    InfixExpression, InfixOperator, IntegerLiteral, PrefixExpression, PrefixOperator,
};
use crate::token::{Token, TokenKind};

/// Rule for a token that starts an expression; entered with `current` on it.
pub type PrefixParseFn = fn(&mut Parser) -> Result<Expression, ParseError>;

/// Rule for a token that continues an expression; entered with `current` on
/// the operator and the already parsed left operand.
pub type InfixParseFn = fn(&mut Parser, Expression) -> Result<Expression, ParseError>;

/// Prefix rule registered for `kind`, if any.
pub fn prefix_rule(kind: TokenKind) -> Option<PrefixParseFn> {
    let rule: PrefixParseFn = match kind {
        TokenKind::Identifier => parse_identifier,
        TokenKind::IntLiteral => parse_integer_literal,
        TokenKind::True | TokenKind::False => parse_boolean,
        TokenKind::Bang => |p| parse_prefix_expression(p, PrefixOperator::Bang),
        TokenKind::Minus => |p| parse_prefix_expression(p, PrefixOperator::Minus),
        TokenKind::LeftParen => parse_grouped_expression,
        TokenKind::If => parse_if_expression,
        TokenKind::Function => parse_function_literal,
        _ => return None,
    };
    Some(rule)
}

/// Infix rule registered for `kind`, if any.
pub fn infix_rule(kind: TokenKind) -> Option<InfixParseFn> {
    let rule: InfixParseFn = match kind {
        TokenKind::Plus => |p, left| parse_infix_expression(p, left, InfixOperator::Plus),
        TokenKind::Minus => |p, left| parse_infix_expression(p, left, InfixOperator::Minus),
        TokenKind::Star => |p, left| parse_infix_expression(p, left, InfixOperator::Multiply),
        TokenKind::Slash => |p, left| parse_infix_expression(p, left, InfixOperator::Divide),
        TokenKind::Less => |p, left| parse_infix_expression(p, left, InfixOperator::Less),
        TokenKind::Greater => |p, left| parse_infix_expression(p, left, InfixOperator::Greater),
        TokenKind::EqualEqual => |p, left| parse_infix_expression(p, left, InfixOperator::Equal),
        TokenKind::BangEqual => |p, left| parse_infix_expression(p, left, InfixOperator::NotEqual),
        TokenKind::LeftParen => parse_call_expression,
        _ => return None,
    };
    Some(rule)
}

/// Parse an expression whose operators all bind tighter than `precedence`.
///
/// Returns with `current` on the expression's last token.
pub fn parse_expression(
    parser: &mut Parser,
    precedence: Precedence,
) -> Result<Expression, ParseError> {
    parser.enter_nested()?;
    let result = parse_expression_inner(parser, precedence);
    parser.exit_nested();
    result
}

fn parse_expression_inner(
    parser: &mut Parser,
    precedence: Precedence,
) -> Result<Expression, ParseError> {
    let Some(prefix) = prefix_rule(parser.current().kind) else {
        return Err(no_prefix_error(parser.current()));
    };
    let mut left = prefix(parser)?;

    while !parser.peek_is(TokenKind::Semicolon) && precedence < parser.peek_precedence() {
        let Some(infix) = infix_rule(parser.peek().kind) else {
            return Ok(left);
        };
        parser.advance();
        left = infix(parser, left)?;
    }

    Ok(left)
}

fn no_prefix_error(token: &Token) -> ParseError {
    match token.kind {
        TokenKind::Illegal => ParseError::IllegalCharacter {
            literal: token.literal().to_string(),
            span: token.span,
        },
        kind => ParseError::NoPrefixRule {
            kind,
            literal: token.literal().to_string(),
            span: token.span,
        },
    }
}

/// Identifier node for the token under the cursor.
pub(crate) fn identifier(token: &Token) -> Identifier {
    Identifier {
        token: token.clone(),
        value: token.literal().to_string(),
    }
}

// ============================================================================
// Prefix rules
// ============================================================================

fn parse_identifier(parser: &mut Parser) -> Result<Expression, ParseError> {
    Ok(Expression::Identifier(identifier(parser.current())))
}

fn parse_integer_literal(parser: &mut Parser) -> Result<Expression, ParseError> {
    let token = parser.current().clone();
    let value = token
        .literal()
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidInteger {
            literal: token.literal().to_string(),
            span: token.span,
        })?;

    Ok(Expression::Integer(IntegerLiteral { token, value }))
}

fn parse_boolean(parser: &mut Parser) -> Result<Expression, ParseError> {
    Ok(Expression::Boolean(BooleanLiteral {
        token: parser.current().clone(),
        value: parser.current_is(TokenKind::True),
    }))
}

fn parse_prefix_expression(
    parser: &mut Parser,
    operator: PrefixOperator,
) -> Result<Expression, ParseError> {
    let token = parser.current().clone();

    parser.advance();
    let right = parse_expression(parser, Precedence::Prefix)?;

    Ok(Expression::Prefix(PrefixExpression {
        token,
        operator,
        right: Box::new(right),
    }))
}

fn parse_grouped_expression(parser: &mut Parser) -> Result<Expression, ParseError> {
    parser.advance();
    let expression = parse_expression(parser, Precedence::Lowest)?;
    parser.expect_peek(TokenKind::RightParen)?;
    Ok(expression)
}

/// `if (<condition>) { ... } [else { ... }]`
fn parse_if_expression(parser: &mut Parser) -> Result<Expression, ParseError> {
    let token = parser.current().clone();

    parser.expect_peek(TokenKind::LeftParen)?;
    parser.advance();
    let condition = parse_expression(parser, Precedence::Lowest)?;
    parser.expect_peek(TokenKind::RightParen)?;

    parser.expect_peek(TokenKind::LeftBrace)?;
    let consequence = parse_block_statement(parser)?;

    let alternative = if parser.peek_is(TokenKind::Else) {
        parser.advance();
        parser.expect_peek(TokenKind::LeftBrace)?;
        Some(parse_block_statement(parser)?)
    } else {
        None
    };

    Ok(Expression::If(IfExpression {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

/// `fn(<parameters>) { ... }`
fn parse_function_literal(parser: &mut Parser) -> Result<Expression, ParseError> {
    let token = parser.current().clone();

    parser.expect_peek(TokenKind::LeftParen)?;
    let parameters = parse_function_parameters(parser)?;

    parser.expect_peek(TokenKind::LeftBrace)?;
    let body = parse_block_statement(parser)?;

    Ok(Expression::Function(FunctionLiteral {
        token,
        parameters,
        body,
    }))
}

/// Entered on `(`, returns on `)`.
fn parse_function_parameters(parser: &mut Parser) -> Result<Vec<Identifier>, ParseError> {
    let mut parameters = Vec::new();

    if parser.peek_is(TokenKind::RightParen) {
        parser.advance();
        return Ok(parameters);
    }

    parser.expect_peek(TokenKind::Identifier)?;
    parameters.push(identifier(parser.current()));

    while parser.peek_is(TokenKind::Comma) {
        parser.advance();
        parser.expect_peek(TokenKind::Identifier)?;
        parameters.push(identifier(parser.current()));
    }

    parser.expect_peek(TokenKind::RightParen)?;
    Ok(parameters)
}

// ============================================================================
// Infix rules
// ============================================================================

fn parse_infix_expression(
    parser: &mut Parser,
    left: Expression,
    operator: InfixOperator,
) -> Result<Expression, ParseError> {
    let token = parser.current().clone();

    let precedence = parser.current_precedence();
    parser.advance();
    let right = parse_expression(parser, precedence)?;

    Ok(Expression::Infix(InfixExpression {
        token,
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

fn parse_call_expression(
    parser: &mut Parser,
    function: Expression,
) -> Result<Expression, ParseError> {
    let token = parser.current().clone();
    let arguments = parse_expression_list(parser, TokenKind::RightParen)?;

    Ok(Expression::Call(CallExpression {
        token,
        function: Box::new(function),
        arguments,
    }))
}

/// Comma separated expressions up to `end`; entered on the opening token,
/// returns on `end`.
fn parse_expression_list(
    parser: &mut Parser,
    end: TokenKind,
) -> Result<Vec<Expression>, ParseError> {
    let mut list = Vec::new();

    if parser.peek_is(end) {
        parser.advance();
        return Ok(list);
    }

    parser.advance();
    list.push(parse_expression(parser, Precedence::Lowest)?);

    while parser.peek_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        list.push(parse_expression(parser, Precedence::Lowest)?);
    }

    parser.expect_peek(end)?;
    Ok(list)
}
