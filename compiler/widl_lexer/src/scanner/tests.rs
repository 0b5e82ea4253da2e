#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;

/// Helper: scan a source string and collect every raw token.
fn scan(source: &str) -> Vec<RawToken> {
    let mut scanner = RawScanner::new(source);
    let mut tokens = Vec::new();
    while let Some(tok) = scanner.next_token().expect("source scans") {
        tokens.push(tok);
    }
    tokens
}

/// Helper: scan and return `(kind, text)` pairs.
fn scan_text(source: &str) -> Vec<(TokenKind, &str)> {
    scan(source)
        .into_iter()
        .map(|t| (t.kind, &source[t.start..t.start + t.len]))
        .collect()
}

use widl_ir::TokenKind::{Float, Identifier, Integer, Other, String as Str, Whitespace};

// ─── Numbers ───────────────────────────────────────────────────

#[test]
fn float_forms() {
    for src in ["1.5", "1.", ".5", "-1.5", "1e10", "1E+3", "-2e-7", ".5e3", "3.e2"] {
        assert_eq!(scan_text(src), vec![(Float, src)], "{src:?}");
    }
}

#[test]
fn float_beats_integer() {
    assert_eq!(scan_text("12.25"), vec![(Float, "12.25")]);
}

#[test]
fn incomplete_exponent_falls_back_to_integer() {
    assert_eq!(scan_text("1e"), vec![(Integer, "1"), (Identifier, "e")]);
    assert_eq!(
        scan_text("1e+"),
        vec![(Integer, "1"), (Identifier, "e"), (Other, "+")]
    );
}

#[test]
fn integer_forms() {
    for src in ["0", "42", "-7", "0x1F", "0XaB", "017", "-0"] {
        assert_eq!(scan_text(src), vec![(Integer, src)], "{src:?}");
    }
}

#[test]
fn hex_prefix_without_digits() {
    assert_eq!(scan_text("0x"), vec![(Integer, "0"), (Identifier, "x")]);
}

#[test]
fn non_octal_digit_after_leading_zero() {
    assert_eq!(scan_text("09"), vec![(Integer, "0"), (Integer, "9")]);
}

#[test]
fn lone_minus_is_other() {
    assert_eq!(
        scan_text("-Infinity"),
        vec![(Other, "-"), (Identifier, "Infinity")]
    );
}

#[test]
fn lone_dot_is_other() {
    assert_eq!(
        scan_text("..."),
        vec![(Other, "."), (Other, "."), (Other, ".")]
    );
}

// ─── Identifiers and strings ───────────────────────────────────

#[test]
fn identifiers() {
    assert_eq!(
        scan_text("interface _Foo bar9"),
        vec![
            (Identifier, "interface"),
            (Whitespace, " "),
            (Identifier, "_Foo"),
            (Whitespace, " "),
            (Identifier, "bar9"),
        ]
    );
}

#[test]
fn strings_have_no_escapes() {
    assert_eq!(scan_text(r#""a\""#), vec![(Str, r#""a\""#)]);
    assert_eq!(scan_text(r#""""#), vec![(Str, r#""""#)]);
}

#[test]
fn unterminated_string_is_other() {
    assert_eq!(
        scan_text("\"ab"),
        vec![(Other, "\""), (Identifier, "ab")]
    );
}

// ─── Whitespace and comments ───────────────────────────────────

#[test]
fn comments_merge_with_blanks() {
    let src = "  // line\n  /* block */\t";
    assert_eq!(scan_text(src), vec![(Whitespace, src)]);
}

#[test]
fn comment_without_leading_blank() {
    assert_eq!(
        scan_text("a/*x*/b"),
        vec![(Identifier, "a"), (Whitespace, "/*x*/"), (Identifier, "b")]
    );
}

#[test]
fn line_comment_stops_before_line_break() {
    assert_eq!(
        scan_text("// c\nx"),
        vec![(Whitespace, "// c\n"), (Identifier, "x")]
    );
}

#[test]
fn unterminated_block_comment() {
    assert_eq!(
        scan_text("/* open"),
        vec![
            (Other, "/"),
            (Other, "*"),
            (Whitespace, " "),
            (Identifier, "open"),
        ]
    );
}

// ─── Other ─────────────────────────────────────────────────────

#[test]
fn punctuation_is_single_characters() {
    assert_eq!(
        scan_text("{};"),
        vec![(Other, "{"), (Other, "}"), (Other, ";")]
    );
}

#[test]
fn multibyte_character_is_one_token() {
    let tokens = scan("é");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, Other);
    assert_eq!(tokens[0].len, 2);
}

#[test]
fn empty_source_has_no_tokens() {
    assert!(scan("").is_empty());
}

#[test]
fn total_len_equals_source_len() {
    let sources = [
        "",
        "interface A { attribute long x; };",
        "const float f = -1.5e3;",
        "  \t\n  \r\n  ",
        "[Exposed=(Window,Worker)] // tail",
        "/* a */ /* b */ x",
    ];
    for source in sources {
        let total: usize = scan(source).iter().map(|t| t.len).sum();
        assert_eq!(total, source.len(), "total token length mismatch for {source:?}");
    }
}
