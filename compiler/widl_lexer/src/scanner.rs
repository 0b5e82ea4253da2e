//! Ordered token rules.
//!
//! Each rule looks at the unconsumed input and reports how long a prefix it
//! accepts. Rules are tried in a fixed priority order and the first one that
//! accepts a non-empty prefix produces the token:
//!
//! 1. float: must precede integer so `1.5` is not split into `1` and `.5`
//! 2. integer
//! 3. identifier
//! 4. string
//! 5. whitespace: blanks plus adjacent `//` and `/* */` comments, as one token
//! 6. other: any single remaining character

use widl_ir::TokenKind;

use crate::cursor::{
    is_blank, is_digit, is_hex_digit, is_ident_continue, is_ident_start, is_octal_digit, Cursor,
};
use crate::{count_newlines, to_u32, LexError};

/// A token located by start offset and byte length.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RawToken {
    pub kind: TokenKind,
    pub start: usize,
    pub len: usize,
}

type Rule = fn(Cursor<'_>, &str) -> Option<usize>;

/// Rules in priority order.
const RULES: [(TokenKind, Rule); 6] = [
    (TokenKind::Float, float),
    (TokenKind::Integer, integer),
    (TokenKind::Identifier, identifier),
    (TokenKind::String, string),
    (TokenKind::Whitespace, whitespace),
    (TokenKind::Other, other),
];

/// Produces one token at a time from the front of the remaining input.
pub struct RawScanner<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> RawScanner<'a> {
    pub fn new(source: &'a str) -> Self {
        RawScanner { source, pos: 0 }
    }

    /// Next token, `Ok(None)` at the end of input.
    ///
    /// The `other` rule takes any single character the earlier rules
    /// reject, so the `LexError` branch is never taken for `&str` input.
    pub fn next_token(&mut self) -> Result<Option<RawToken>, LexError> {
        if self.pos >= self.source.len() {
            return Ok(None);
        }
        let cursor = Cursor::new(self.source.as_bytes(), self.pos);
        let rest = &self.source[self.pos..];

        for (kind, rule) in RULES {
            if let Some(len) = rule(cursor, rest).filter(|&len| len > 0) {
                let token = RawToken {
                    kind,
                    start: self.pos,
                    len,
                };
                self.pos += len;
                return Ok(Some(token));
            }
        }

        Err(LexError {
            offset: to_u32(self.pos),
            line: 1 + count_newlines(&self.source[..self.pos]),
        })
    }
}

/// `-?(([0-9]+\.[0-9]*|[0-9]*\.[0-9]+)([Ee][-+]?[0-9]+)?|[0-9]+[Ee][-+]?[0-9]+)`
fn float(mut c: Cursor<'_>, _rest: &str) -> Option<usize> {
    let start = c.pos();
    c.eat_if(b'-');
    let int_digits = c.eat_while(is_digit);

    if c.current() == b'.' {
        let mut frac = c;
        frac.advance();
        let frac_digits = frac.eat_while(is_digit);
        if int_digits == 0 && frac_digits == 0 {
            return None;
        }
        frac.eat_exponent();
        return Some(frac.pos() - start);
    }

    if int_digits > 0 && c.eat_exponent() {
        return Some(c.pos() - start);
    }
    None
}

/// `-?(0([Xx][0-9A-Fa-f]+|[0-7]*)|[1-9][0-9]*)`
fn integer(mut c: Cursor<'_>, _rest: &str) -> Option<usize> {
    let start = c.pos();
    c.eat_if(b'-');
    match c.current() {
        b'0' => {
            c.advance();
            if matches!(c.current(), b'x' | b'X') && is_hex_digit(c.peek(1)) {
                c.advance();
                c.eat_while(is_hex_digit);
            } else {
                c.eat_while(is_octal_digit);
            }
        }
        b'1'..=b'9' => {
            c.advance();
            c.eat_while(is_digit);
        }
        _ => return None,
    }
    Some(c.pos() - start)
}

/// `[A-Z_a-z][0-9A-Z_a-z]*`
fn identifier(mut c: Cursor<'_>, _rest: &str) -> Option<usize> {
    if !is_ident_start(c.current()) {
        return None;
    }
    c.advance();
    Some(1 + c.eat_while(is_ident_continue))
}

/// `"[^"]*"`
fn string(c: Cursor<'_>, _rest: &str) -> Option<usize> {
    if c.current() != b'"' {
        return None;
    }
    let body = c.rest().get(1..)?;
    memchr::memchr(b'"', body).map(|close| close + 2)
}

/// Blanks, line comments and block comments in any mix.
///
/// An unterminated `/*` ends the token; the `/` is then picked up by the
/// `other` rule.
fn whitespace(mut c: Cursor<'_>, _rest: &str) -> Option<usize> {
    let start = c.pos();
    loop {
        let before = c.pos();
        c.eat_while(is_blank);
        match (c.current(), c.peek(1)) {
            (b'/', b'/') => c.eat_line_comment(),
            (b'/', b'*') => {
                if !c.eat_block_comment() {
                    break;
                }
            }
            _ => {}
        }
        if c.pos() == before {
            break;
        }
    }
    Some(c.pos() - start)
}

/// `[^\t\n\r 0-9A-Z_a-z]`, one whole character.
fn other(_c: Cursor<'_>, rest: &str) -> Option<usize> {
    let ch = rest.chars().next()?;
    let excluded = u8::try_from(ch).is_ok_and(|b| is_blank(b) || is_ident_continue(b));
    (!excluded).then(|| ch.len_utf8())
}

#[cfg(test)]
mod tests;
