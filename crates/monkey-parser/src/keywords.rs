//! Reserved-word table.

use crate::token::TokenKind;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

static KEYWORDS: Lazy<FxHashMap<&'static str, TokenKind>> = Lazy::new(|| {
    [
        TokenKind::Function,
        TokenKind::Let,
        TokenKind::True,
        TokenKind::False,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::Return,
    ]
    .into_iter()
    .filter_map(|kind| kind.spelling().map(|text| (text, kind)))
    .collect()
});

/// Classify a scanned identifier run.
///
/// Only an exact match is a keyword: `letter` is an identifier even though it
/// starts with `let`.
pub fn lookup_ident(ident: &str) -> TokenKind {
    KEYWORDS
        .get(ident)
        .copied()
        .unwrap_or(TokenKind::Identifier)
}
