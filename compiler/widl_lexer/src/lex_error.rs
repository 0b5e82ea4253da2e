//! Tokenizer failure.

use thiserror::Error;

/// No token rule matched a non-empty prefix of the remaining input.
///
/// Not produced by the current rules: `other` accepts any single character.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("Token stream not progressing at line {line} (byte offset {offset})")]
pub struct LexError {
    /// Byte offset of the first unmatched character.
    pub offset: u32,
    /// 1-based line of that character.
    pub line: u32,
}
