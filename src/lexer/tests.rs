//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Em-dash and the other delimiters
//! - String and number literals
//! - Line tracking and comments
//! - Error cases

use super::{
    lexer::tokenize,
    tokens::{Literal, TokenKind},
};

#[test]
fn test_tokenize_keywords() {
    let source = "to let be if else while for print know say or and is am are not".to_string();
    let tokens = tokenize(source, Some("test.coem".to_string())).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::To,
            TokenKind::Let,
            TokenKind::Be,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::For,
            TokenKind::Print,
            TokenKind::Know,
            TokenKind::Say,
            TokenKind::Or,
            TokenKind::And,
            TokenKind::Is,
            TokenKind::Am,
            TokenKind::Are,
            TokenKind::Not,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_literal_keywords_carry_values() {
    let source = "true false nothing".to_string();
    let tokens = tokenize(source, Some("test.coem".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::True);
    assert_eq!(tokens[0].literal, Some(Literal::Bool(true)));
    assert_eq!(tokens[1].kind, TokenKind::False);
    assert_eq!(tokens[1].literal, Some(Literal::Bool(false)));
    assert_eq!(tokens[2].kind, TokenKind::Nothing);
    assert_eq!(tokens[2].literal, Some(Literal::Nothing));
}

#[test]
fn test_tokenize_identifiers() {
    let source = "greeting tomorrow _x beTrue".to_string();
    let tokens = tokenize(source, Some("test.coem".to_string())).unwrap();

    // keywords only match whole words
    for (token, value) in tokens.iter().zip(["greeting", "tomorrow", "_x", "beTrue"]) {
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.value, value);
        assert_eq!(token.literal, None);
    }
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_delimiters() {
    let source = "— , : . ; &".to_string();
    let tokens = tokenize(source, Some("test.coem".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::EmDash);
    assert_eq!(tokens[0].value, "—");
    assert_eq!(tokens[1].kind, TokenKind::Comma);
    assert_eq!(tokens[2].kind, TokenKind::Colon);
    assert_eq!(tokens[3].kind, TokenKind::Dot);
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::Ampersand);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_em_dash_without_spaces() {
    let source = "greet—name—;".to_string();
    let tokens = tokenize(source, Some("test.coem".to_string())).unwrap();

    assert_eq!(tokens[0].value, "greet");
    assert_eq!(tokens[1].kind, TokenKind::EmDash);
    assert_eq!(tokens[2].value, "name");
    assert_eq!(tokens[3].kind, TokenKind::EmDash);
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);

    // spans are byte offsets, the em-dash is three bytes
    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 8);
    assert_eq!(tokens[2].span.start.0, 8);
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" "two words" """#.to_string();
    let tokens = tokenize(source, Some("test.coem".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "\"hello\"");
    assert_eq!(tokens[0].literal, Some(Literal::String("hello".to_string())));
    assert_eq!(tokens[1].literal, Some(Literal::String("two words".to_string())));
    assert_eq!(tokens[2].literal, Some(Literal::String(String::new())));
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_escapes() {
    let source = r#""a\nb" "tab\there" "back\\slash" "say \"hi\"""#.to_string();
    let tokens = tokenize(source, Some("test.coem".to_string())).unwrap();

    assert_eq!(tokens[0].literal, Some(Literal::String("a\nb".to_string())));
    assert_eq!(tokens[1].literal, Some(Literal::String("tab\there".to_string())));
    assert_eq!(tokens[2].literal, Some(Literal::String("back\\slash".to_string())));
    assert_eq!(tokens[3].literal, Some(Literal::String("say \"hi\"".to_string())));
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.5".to_string();
    let tokens = tokenize(source, Some("test.coem".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].literal, Some(Literal::Number(42.0)));
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].literal, Some(Literal::Number(3.5)));
}

#[test]
fn test_tokenize_number_before_block_end() {
    // `1.` is a number followed by the block terminator
    let source = "1.".to_string();
    let tokens = tokenize(source, Some("test.coem".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "1");
    assert_eq!(tokens[1].kind, TokenKind::Dot);
}

#[test]
fn test_tokenize_tracks_lines() {
    let source = "let x;\n\nsay \"a\nb\";\n// note\nx;".to_string();
    let tokens = tokenize(source, Some("test.coem".to_string())).unwrap();

    assert_eq!(tokens[0].line, 1); // let
    assert_eq!(tokens[3].line, 3); // say
    assert_eq!(tokens[4].line, 3); // the string starts on line 3
    assert_eq!(tokens[5].line, 4); // ; after the multi-line string
    assert_eq!(tokens[6].kind, TokenKind::Identifier);
    assert_eq!(tokens[6].line, 6);
    assert_eq!(tokens[8].kind, TokenKind::EOF);
    assert_eq!(tokens[8].line, 6);
}

#[test]
fn test_tokenize_comments() {
    let source = "let x; // be true;\nsay x;".to_string();
    let tokens = tokenize(source, Some("test.coem".to_string())).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::Say,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_empty_program() {
    let tokens = tokenize(String::new(), None).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(*tokens[0].span.start.1, "shell");
}

#[test]
fn test_tokenize_unrecognized_token() {
    let source = "let x be @;".to_string();
    let error = tokenize(source, Some("test.coem".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 9);
}

#[test]
fn test_tokenize_ascii_hyphen_is_not_a_delimiter() {
    let source = "f - x -".to_string();
    let error = tokenize(source, Some("test.coem".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_tokenize_unterminated_string() {
    let source = "say \"never closed;".to_string();
    let error = tokenize(source, Some("test.coem".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(error.get_position().0, 4);
}
