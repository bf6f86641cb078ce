//! Property-based tests for the Monkey lexer and parser.
//!
//! 1. Lexing and parsing never panic on arbitrary input
//! 2. The token stream ends with exactly one end marker
//! 3. Token spans tile the input: in order, in bounds, and separated only by
//!    whitespace
//! 4. Line and column agree with the byte offset
//! 5. Lexing is deterministic

use monkey_parser::{parse, Lexer, TokenKind};
use proptest::prelude::*;

/// Inputs drawn mostly from the Monkey alphabet, with whitespace and a few
/// illegal characters mixed in.
fn monkey_like() -> impl Strategy<Value = String> {
    "[a-z_0-9=!+*/<>(){},; \t\r\n@é-]{0,200}"
}

fn proptest_config() -> ProptestConfig {
    let default = ProptestConfig::default();
    ProptestConfig {
        cases: default.cases.max(256),
        ..default
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn lexer_never_panics(input in "\\PC{0,300}") {
        let _tokens = Lexer::new(&input).tokenize();
    }

    #[test]
    fn parser_never_panics(input in monkey_like()) {
        let _result = parse(&input);
    }

    #[test]
    fn eof_is_last_and_unique(input in monkey_like()) {
        let tokens = Lexer::new(&input).tokenize();
        let eof_count = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();

        prop_assert_eq!(eof_count, 1);
        prop_assert!(tokens.last().is_some_and(|t| t.is_eof()));
    }

    #[test]
    fn spans_tile_the_input(input in monkey_like()) {
        let tokens = Lexer::new(&input).tokenize();
        let mut cursor = 0;

        for token in &tokens {
            prop_assert!(token.span.start >= cursor, "{:?} overlaps previous token", token);
            prop_assert!(token.span.end <= input.len());
            prop_assert!(
                input[cursor..token.span.start].chars().all(is_whitespace),
                "non-whitespace skipped before {:?}",
                token
            );
            if !token.is_eof() {
                prop_assert!(!token.span.is_empty(), "empty span for {:?}", token);
                prop_assert_eq!(token.span.slice(&input), token.literal());
            }
            cursor = token.span.end;
        }
        prop_assert_eq!(cursor, input.len());
    }

    #[test]
    fn line_and_column_match_offset(input in monkey_like()) {
        for token in Lexer::new(&input).tokenize() {
            let before = &input[..token.span.start];
            let line = 1 + before.matches('\n').count() as u32;
            let line_start = before.rfind('\n').map_or(0, |i| i + 1);
            let column = 1 + before[line_start..].chars().count() as u32;

            prop_assert_eq!((token.span.line, token.span.column), (line, column), "{:?}", token);
        }
    }

    #[test]
    fn lexing_is_deterministic(input in "\\PC{0,300}") {
        let first = Lexer::new(&input).tokenize();
        let second = Lexer::new(&input).tokenize();
        prop_assert_eq!(first, second);
    }
}
