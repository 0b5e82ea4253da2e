//! Tokenizer for Web IDL.
//!
//! Turns source text into a [`TokenList`] whose concatenated text is exactly
//! the input. Whitespace and comments are kept as `Whitespace` tokens so the
//! parser can skip them and the trivia layer can replay them.
//!
//! # Architecture
//!
//! - [`cursor`]: byte cursor, `Copy` so rules can probe ahead cheaply
//! - [`scanner`]: the ordered token rules (float, integer, identifier,
//!   string, whitespace, other); first rule to match a non-empty prefix wins
//! - [`trivia`]: splitting whitespace tokens into whitespace/comment pieces
//!   and grouping them per significant token

mod cursor;
mod lex_error;
mod scanner;
mod trivia;

pub use lex_error::LexError;
pub use scanner::RawScanner;
pub use trivia::{collect_trivia, split_trivia};

use widl_ir::{Span, Token, TokenList};

/// Tokenize `source` completely.
///
/// Fails only if no rule matches at some position; there is no partial
/// result in that case.
pub fn tokenize(source: &str) -> Result<TokenList, LexError> {
    let mut scanner = RawScanner::new(source);
    let mut tokens = TokenList::with_capacity(source.len() / 4 + 1);
    let mut line: u32 = 1;

    while let Some(raw) = scanner.next_token()? {
        let text = &source[raw.start..raw.start + raw.len];
        let span = Span::new(to_u32(raw.start), to_u32(raw.start + raw.len));
        tokens.push(Token::new(raw.kind, text, span, line));
        line = line.saturating_add(count_newlines(text));
    }

    Ok(tokens)
}

#[inline]
pub(crate) fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

pub(crate) fn count_newlines(text: &str) -> u32 {
    to_u32(memchr::memchr_iter(b'\n', text.as_bytes()).count())
}

#[cfg(test)]
mod tests;
