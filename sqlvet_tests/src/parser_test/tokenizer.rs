use super::*;
use sqlvet_core::parser::parser::{Token, tokenize};

#[test]
fn tokenize_splits_symbols_and_words() {
    let tokens = tokenize("a>=1<>b").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Word("a".to_string()),
            Token::Symbol(">="),
            Token::Number("1".to_string()),
            Token::Symbol("<>"),
            Token::Word("b".to_string()),
        ]
    );
}

#[test]
fn tokenize_quoted_identifier_and_param() {
    let tokens = tokenize("`my col` = ?").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::QuotedIdent("my col".to_string()),
            Token::Symbol("="),
            Token::Param,
        ]
    );
}

#[test]
fn tokenize_allows_escaped_quotes_inside_strings() {
    let tokens = tokenize(r#"'it''s' "say \"hi\"""#).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Str("it's".to_string()),
            Token::Str(r#"say "hi""#.to_string()),
        ]
    );
}

#[test]
fn tokenize_unclosed_quote_errors() {
    let err = tokenize("'abc").unwrap_err();
    assert!(err.to_lowercase().contains("unclosed quote"));
}

#[test]
fn tokenize_number_glued_to_word_errors() {
    let err = tokenize("select 12abc").unwrap_err();
    assert!(err.to_lowercase().contains("characters found immediately after number"));
}

#[test]
fn tokenize_exponent_and_decimal() {
    let tokens = tokenize("1.5e-3 2.25").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Number("1.5e-3".to_string()),
            Token::Number("2.25".to_string()),
        ]
    );
}

#[test]
fn parse_empty_statement_errors() {
    let err = parse("  ;").unwrap_err();
    assert!(err.to_lowercase().contains("empty"));
}

#[test]
fn parse_unknown_command_errors() {
    let err = parse("truncate t").unwrap_err();
    assert!(err.contains("Unknown command 'truncate'"));
}

#[test]
fn parse_unexpected_character_errors() {
    let err = parse("select # from t").unwrap_err();
    assert!(err.contains("Unexpected character '#'"));
}
