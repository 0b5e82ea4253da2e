//! Token types produced by the tokenizer.
//!
//! The token set is coarse: keywords are ordinary identifiers
//! and every punctuation character is a one-character `Other` token. The
//! parser decides what an identifier means from context.

use std::fmt;

use crate::Span;

/// Token kinds, in the priority order the tokenizer tries them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// `1.5`, `.5e3`, `-2E10`
    Float,
    /// `42`, `-7`, `0x1F`, `017`
    Integer,
    /// `interface`, `DOMString`, `_escaped`
    Identifier,
    /// `"quoted"` (no escapes)
    String,
    /// Blanks plus any line or block comments adjacent to them.
    Whitespace,
    /// Any other single character: `{`, `;`, `?`, `.`, ...
    Other,
}

impl TokenKind {
    /// Human-readable name used in diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Float => "float",
            TokenKind::Integer => "integer",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Other => "other",
        }
    }

    /// Whitespace tokens are trivia; everything else is significant.
    #[inline]
    pub fn is_trivia(self) -> bool {
        self == TokenKind::Whitespace
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A token with its verbatim source text.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
    /// 1-based line the token starts on.
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span, line: u32) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
            line,
        }
    }

    /// Line the token ends on (differs from `line` for multi-line whitespace).
    pub fn end_line(&self) -> u32 {
        let newlines = self.text.bytes().filter(|&b| b == b'\n').count();
        self.line
            .saturating_add(u32::try_from(newlines).unwrap_or(u32::MAX))
    }

    #[inline]
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.text, self.span)
    }
}

/// Ordered, immutable output of the tokenizer.
#[derive(Clone, Default, Eq, PartialEq, Hash)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Number of non-whitespace tokens.
    pub fn significant_len(&self) -> usize {
        self.tokens.iter().filter(|t| !t.kind.is_trivia()).count()
    }

    /// Concatenated text of every token; equals the tokenized source.
    pub fn source_text(&self) -> String {
        let mut out = String::with_capacity(self.tokens.iter().map(|t| t.text.len()).sum());
        for token in &self.tokens {
            out.push_str(&token.text);
        }
        out
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
