//! Error recovery for the parser.
//!
//! After a statement fails, the parser skips the rest of it so the tokens of
//! a broken statement are not re-read as statements of their own. Skipping
//! tracks braces, so a statement is never resumed inside a nested block and
//! a block's own `}` is never skipped.

use super::Parser;
use crate::token::TokenKind;

/// Skip to the last token of the broken statement.
///
/// `level` is the brace depth of the statement list being recovered: `0`
/// at the top level, the depth of the opening `{` inside a block. Stops on
/// the statement's `;`, or just before a token that starts a new statement
/// (`let`, `return`), the block's closing `}` or the end marker. The
/// caller's mandatory `advance()` then moves past the stopping point.
///
/// Returns `true` when the cursor is already on the closing `}` of the
/// block at `level`. The caller must not advance in that case.
pub fn sync_to_statement_boundary(parser: &mut Parser, level: usize) -> bool {
    loop {
        let depth = parser.brace_depth();
        match parser.current().kind {
            TokenKind::Eof => return false,
            TokenKind::RightBrace if depth < level => return true,
            TokenKind::Semicolon if depth == level => return false,
            _ => {}
        }

        if depth == level {
            let boundary = match parser.peek().kind {
                TokenKind::Let | TokenKind::Return | TokenKind::Eof => true,
                TokenKind::RightBrace => level > 0,
                _ => false,
            };
            if boundary {
                return false;
            }
        }
        parser.advance();
    }
}
