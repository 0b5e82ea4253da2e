#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use widl_ir::TokenKind;

use super::*;

#[test]
fn tokenize_tracks_lines() {
    let tokens = tokenize("a\n/* x\n */ b\r\nc").expect("tokenizes");
    let lines: Vec<(&str, u32)> = tokens
        .iter()
        .filter(|t| !t.kind.is_trivia())
        .map(|t| (t.text.as_str(), t.line))
        .collect();
    assert_eq!(lines, vec![("a", 1), ("b", 3), ("c", 4)]);
}

#[test]
fn tokenize_spans_are_contiguous() {
    let source = "interface Foo : Bar {};";
    let tokens = tokenize(source).expect("tokenizes");
    let mut expected_start = 0;
    for token in &tokens {
        assert_eq!(token.span.start, expected_start);
        assert_eq!(&source[token.span.start as usize..token.span.end as usize], token.text);
        expected_start = token.span.end;
    }
    assert_eq!(expected_start as usize, source.len());
}

#[test]
fn tokenize_kinds() {
    let tokens = tokenize("const long x = 0x10;").expect("tokenizes");
    let kinds: Vec<TokenKind> = tokens
        .iter()
        .filter(|t| !t.kind.is_trivia())
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Other,
            TokenKind::Integer,
            TokenKind::Other,
        ]
    );
}

#[test]
fn tokenize_empty() {
    assert!(tokenize("").expect("tokenizes").is_empty());
}

#[test]
fn count_newlines_ignores_carriage_returns() {
    assert_eq!(count_newlines("a\r\nb\rc\n"), 2);
}

proptest! {
    #[test]
    fn tokenize_is_total_and_lossless(source in "\\PC{0,64}") {
        let tokens = tokenize(&source).expect("every character has a rule");
        prop_assert_eq!(tokens.source_text(), source);
    }

    #[test]
    fn tokenize_idl_like_text_is_lossless(
        source in "[a-z0-9 \\t\\n{}();,.<>?=\\[\\]\"/*-]{0,80}"
    ) {
        let tokens = tokenize(&source).expect("every character has a rule");
        prop_assert_eq!(tokens.source_text(), source);
        prop_assert!(tokens.iter().all(|t| !t.text.is_empty()));
    }
}
