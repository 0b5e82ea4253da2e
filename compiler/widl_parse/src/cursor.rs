//! Token cursor for navigating the token stream.
//!
//! The cursor always rests on a significant token (or the end of input):
//! whitespace tokens are stepped over on construction and after every
//! advance, so grammar code never sees them.

use widl_ir::{Token, TokenKind};

use crate::error::SNIPPET_TOKENS;
use crate::ParseError;

pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        let mut cursor = Cursor { tokens, pos: 0 };
        cursor.skip_trivia();
        cursor
    }

    /// Raw index of the current token.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Jump back to a position previously returned by [`position`](Self::position).
    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(pos <= self.tokens.len());
        self.pos = pos;
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Current token if it is an identifier.
    pub fn current_identifier(&self) -> Option<&'a str> {
        self.current()
            .filter(|t| t.kind == TokenKind::Identifier)
            .map(|t| t.text.as_str())
    }

    #[inline]
    pub fn check(&self, kind: TokenKind, text: &str) -> bool {
        self.current().is_some_and(|t| t.is(kind, text))
    }

    /// Current token is the identifier `keyword`.
    #[inline]
    pub fn check_keyword(&self, keyword: &str) -> bool {
        self.check(TokenKind::Identifier, keyword)
    }

    /// Current token is the punctuation character `punct`.
    #[inline]
    pub fn check_punct(&self, punct: &str) -> bool {
        self.check(TokenKind::Other, punct)
    }

    /// Current token plus the `count - 1` raw tokens after it are all
    /// `punct`, with nothing in between.
    pub fn check_adjacent_punct(&self, punct: &str, count: usize) -> bool {
        self.tokens
            .get(self.pos..self.pos + count)
            .is_some_and(|run| run.iter().all(|t| t.is(TokenKind::Other, punct)))
    }

    /// Consume the current token and step over any whitespace after it.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.current()?;
        self.pos += 1;
        self.skip_trivia();
        Some(token)
    }

    /// Consume exactly one raw token without stepping over whitespace.
    pub fn advance_raw(&mut self) -> Option<&'a Token> {
        let token = self.current()?;
        self.pos += 1;
        Some(token)
    }

    pub fn eat_keyword(&mut self, keyword: &str) -> bool {
        if self.check_keyword(keyword) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn eat_punct(&mut self, punct: &str) -> bool {
        if self.check_punct(punct) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of `kind`, whatever its text.
    pub fn eat_kind(&mut self, kind: TokenKind) -> Option<&'a Token> {
        if self.current()?.kind == kind {
            self.advance()
        } else {
            None
        }
    }

    pub fn eat_identifier(&mut self) -> Option<&'a str> {
        self.eat_kind(TokenKind::Identifier).map(|t| t.text.as_str())
    }

    pub fn skip_trivia(&mut self) {
        while self
            .tokens
            .get(self.pos)
            .is_some_and(|t| t.kind.is_trivia())
        {
            self.pos += 1;
        }
    }

    /// Line to report for an error at the current position.
    ///
    /// At the end of input this is the line the last token ends on.
    pub fn line(&self) -> u32 {
        match (self.current(), self.tokens.last()) {
            (Some(token), _) => token.line,
            (None, Some(last)) => last.end_line(),
            (None, None) => 1,
        }
    }

    /// Build an error at the current position.
    pub fn error(&self, message: impl Into<String>) -> ParseError {
        let end = (self.pos + SNIPPET_TOKENS).min(self.tokens.len());
        let snippet = self.tokens.get(self.pos..end).unwrap_or(&[]).to_vec();
        ParseError::new(message, self.line(), snippet)
    }
}
