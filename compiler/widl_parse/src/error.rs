//! Parse error type.
//!
//! Parsing stops at the first error; there is no recovery and no partial
//! result. The error carries enough context for a caller to point an author
//! at the offending text: the 1-based line and the next few raw tokens.

use std::fmt;

use thiserror::Error;
use widl_ir::Token;
use widl_lexer::LexError;

/// Number of raw tokens captured for the error snippet.
pub const SNIPPET_TOKENS: usize = 5;

/// A fatal parse failure.
#[derive(Clone, Eq, PartialEq, Error)]
#[error("{message}, line {line} (tokens: {input:?})")]
pub struct ParseError {
    /// Human-readable description, e.g. `Unterminated attribute`.
    pub message: String,
    /// 1-based line of the failure point.
    pub line: u32,
    /// Concatenated text of `tokens`.
    pub input: String,
    /// Up to [`SNIPPET_TOKENS`] raw tokens starting at the failure point.
    pub tokens: Vec<Token>,
}

impl ParseError {
    pub fn new(message: impl Into<String>, line: u32, tokens: Vec<Token>) -> Self {
        let input = tokens.iter().map(|t| t.text.as_str()).collect();
        ParseError {
            message: message.into(),
            line,
            input,
            tokens,
        }
    }
}

impl fmt::Debug for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseError")
            .field("message", &self.message)
            .field("line", &self.line)
            .field("input", &self.input)
            .finish_non_exhaustive()
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::new(err.to_string(), err.line, Vec::new())
    }
}
