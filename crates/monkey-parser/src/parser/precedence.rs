//! Operator precedence table for expression parsing.

use crate::token::TokenKind;

/// Operator precedence level (higher = tighter binding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest = 0,
    Equality = 1,       // ==, !=
    Relational = 2,     // <, >
    Additive = 3,       // +, -
    Multiplicative = 4, // *, /
    Prefix = 5,         // -x, !x
    Call = 6,           // f(x)
}

/// Get the binding precedence of a token in infix position.
///
/// Tokens that never continue an expression report `Lowest`, which stops the
/// precedence-climbing loop.
pub fn get_precedence(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::EqualEqual | TokenKind::BangEqual => Precedence::Equality,
        TokenKind::Less | TokenKind::Greater => Precedence::Relational,
        TokenKind::Plus | TokenKind::Minus => Precedence::Additive,
        TokenKind::Star | TokenKind::Slash => Precedence::Multiplicative,
        TokenKind::LeftParen => Precedence::Call,
        _ => Precedence::Lowest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Precedence::Lowest < Precedence::Equality);
        assert!(Precedence::Equality < Precedence::Relational);
        assert!(Precedence::Relational < Precedence::Additive);
        assert!(Precedence::Additive < Precedence::Multiplicative);
        assert!(Precedence::Multiplicative < Precedence::Prefix);
        assert!(Precedence::Prefix < Precedence::Call);
    }

    #[test]
    fn test_non_operators_are_lowest() {
        assert_eq!(get_precedence(TokenKind::Semicolon), Precedence::Lowest);
        assert_eq!(get_precedence(TokenKind::Equal), Precedence::Lowest);
        assert_eq!(get_precedence(TokenKind::Bang), Precedence::Lowest);
    }
}
