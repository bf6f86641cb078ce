//! Token tests for the Monkey lexer.

use monkey_parser::{Lexer, Span, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::new(source).tokenize().iter().map(|t| t.kind).collect()
}

fn assert_tokens(source: &str, expected: &[(TokenKind, &str)]) {
    let tokens = Lexer::new(source).tokenize();
    let actual: Vec<(TokenKind, &str)> = tokens.iter().map(|t| (t.kind, t.literal())).collect();

    let mut expected_with_eof = expected.to_vec();
    expected_with_eof.push((TokenKind::Eof, ""));

    assert_eq!(actual, expected_with_eof, "Token mismatch for {:?}", source);
}

#[test]
fn test_delimiters_and_operators() {
    assert_tokens(
        "=+(){},;",
        &[
            (TokenKind::Equal, "="),
            (TokenKind::Plus, "+"),
            (TokenKind::LeftParen, "("),
            (TokenKind::RightParen, ")"),
            (TokenKind::LeftBrace, "{"),
            (TokenKind::RightBrace, "}"),
            (TokenKind::Comma, ","),
            (TokenKind::Semicolon, ";"),
        ],
    );

    let names: Vec<&str> = kinds("=+(){},;").into_iter().map(TokenKind::name).collect();
    assert_eq!(
        names,
        ["ASSIGN", "PLUS", "LPAREN", "RPAREN", "LBRACE", "RBRACE", "COMMA", "SEMICOLON", "EOF"]
    );
}

#[test]
#[rustfmt::skip]
fn test_full_program() {
    let source = "let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 5;

if (5 < 10) {
    return true;
} else {
    return false;
}

10 == 10;
10 != 9;
";

    use TokenKind::*;
    assert_tokens(
        source,
        &[
            (Let, "let"), (Identifier, "five"), (Equal, "="), (IntLiteral, "5"), (Semicolon, ";"),
            (Let, "let"), (Identifier, "ten"), (Equal, "="), (IntLiteral, "10"), (Semicolon, ";"),
            (Let, "let"), (Identifier, "add"), (Equal, "="), (Function, "fn"), (LeftParen, "("),
            (Identifier, "x"), (Comma, ","), (Identifier, "y"), (RightParen, ")"), (LeftBrace, "{"),
            (Identifier, "x"), (Plus, "+"), (Identifier, "y"), (Semicolon, ";"),
            (RightBrace, "}"), (Semicolon, ";"),
            (Let, "let"), (Identifier, "result"), (Equal, "="), (Identifier, "add"), (LeftParen, "("),
            (Identifier, "five"), (Comma, ","), (Identifier, "ten"), (RightParen, ")"), (Semicolon, ";"),
            (Bang, "!"), (Minus, "-"), (Slash, "/"), (Star, "*"), (IntLiteral, "5"), (Semicolon, ";"),
            (IntLiteral, "5"), (Less, "<"), (IntLiteral, "10"), (Greater, ">"), (IntLiteral, "5"), (Semicolon, ";"),
            (If, "if"), (LeftParen, "("), (IntLiteral, "5"), (Less, "<"), (IntLiteral, "10"), (RightParen, ")"),
            (LeftBrace, "{"), (Return, "return"), (True, "true"), (Semicolon, ";"),
            (RightBrace, "}"), (Else, "else"), (LeftBrace, "{"),
            (Return, "return"), (False, "false"), (Semicolon, ";"), (RightBrace, "}"),
            (IntLiteral, "10"), (EqualEqual, "=="), (IntLiteral, "10"), (Semicolon, ";"),
            (IntLiteral, "10"), (BangEqual, "!="), (IntLiteral, "9"), (Semicolon, ";"),
        ],
    );
}

#[test]
fn test_two_character_operators() {
    assert_eq!(
        kinds("== != = !"),
        vec![
            TokenKind::EqualEqual,
            TokenKind::BangEqual,
            TokenKind::Equal,
            TokenKind::Bang,
            TokenKind::Eof,
        ]
    );
    // No whitespace between the characters decides the split greedily.
    assert_eq!(
        kinds("!==="),
        vec![TokenKind::BangEqual, TokenKind::EqualEqual, TokenKind::Eof]
    );
}

#[test]
fn test_keyword_prefix_is_identifier() {
    assert_tokens(
        "let letter fnord iffy",
        &[
            (TokenKind::Let, "let"),
            (TokenKind::Identifier, "letter"),
            (TokenKind::Identifier, "fnord"),
            (TokenKind::Identifier, "iffy"),
        ],
    );
}

#[test]
fn test_identifiers_with_underscores() {
    assert_tokens(
        "_ foo_bar __x",
        &[
            (TokenKind::Identifier, "_"),
            (TokenKind::Identifier, "foo_bar"),
            (TokenKind::Identifier, "__x"),
        ],
    );
}

#[test]
fn test_digits_end_identifiers() {
    assert_tokens(
        "x1 12ab",
        &[
            (TokenKind::Identifier, "x"),
            (TokenKind::IntLiteral, "1"),
            (TokenKind::IntLiteral, "12"),
            (TokenKind::Identifier, "ab"),
        ],
    );
}

#[test]
fn test_illegal_characters() {
    assert_tokens(
        "a @ b # 1",
        &[
            (TokenKind::Identifier, "a"),
            (TokenKind::Illegal, "@"),
            (TokenKind::Identifier, "b"),
            (TokenKind::Illegal, "#"),
            (TokenKind::IntLiteral, "1"),
        ],
    );
}

#[test]
fn test_non_ascii_is_one_illegal_token() {
    let tokens = Lexer::new("x λ y").tokenize();

    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].literal(), "λ");
    assert_eq!(tokens[1].span, Span::new(2, 4, 1, 3));
    assert_eq!(tokens[2].literal(), "y");
}

#[test]
fn test_whitespace_only() {
    assert_eq!(kinds(" \t\r\n  "), vec![TokenKind::Eof]);
}

#[test]
fn test_eof_repeats() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..5 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Eof);
        assert_eq!(token.literal(), "");
        assert_eq!(token.span, Span::new(1, 1, 1, 2));
    }
}

#[test]
fn test_spans_slice_back_to_source() {
    let source = "let answer = 42;\nanswer != 7";

    for token in Lexer::new(source).tokenize() {
        if !token.is_eof() {
            assert_eq!(token.span.slice(source), token.literal());
        }
    }
}
