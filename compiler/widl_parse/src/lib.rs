//! Recursive-descent parser for Web IDL.
//!
//! Produces a [`Document`] from source text or from a [`TokenList`]. The
//! parser is hand-written: one method per grammar production, grouped by
//! construct under [`grammar`]. Parsing stops at the first error.
//!
//! # Speculation
//!
//! Most productions decide from the current token. The few that need to read
//! ahead take a [`ParserSnapshot`] and restore it on a non-match; see the
//! `snapshot` module. A production that does not apply returns `Ok(None)`,
//! and `Err` is reserved for input that cannot be valid.
//!
//! # Trivia
//!
//! The grammar never looks at whitespace or comments. With
//! [`ParseOptions::capture_trivia`] set, the trivia is collected from the
//! token list after a successful parse and stored on the [`Document`].

mod cursor;
mod error;
mod grammar;
mod snapshot;

use tracing::debug;
use widl_ir::{Document, TokenList};

use crate::cursor::Cursor;
pub use crate::error::{ParseError, SNIPPET_TOKENS};
pub use crate::snapshot::ParserSnapshot;

/// Result of a production that may fail fatally.
pub(crate) type PResult<T> = Result<T, ParseError>;

/// Parser configuration.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ParseOptions {
    /// Keep whitespace and comments so the writer can reproduce the source.
    pub capture_trivia: bool,
}

impl ParseOptions {
    #[must_use]
    pub fn with_trivia(mut self) -> Self {
        self.capture_trivia = true;
        self
    }
}

/// Parser state for one token list.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens.as_slice()),
        }
    }

    #[inline]
    pub(crate) fn snapshot(&self) -> ParserSnapshot {
        ParserSnapshot::new(self.cursor.position())
    }

    #[inline]
    pub(crate) fn restore(&mut self, snapshot: ParserSnapshot) {
        self.cursor.set_position(snapshot.cursor_pos);
    }

    /// Error at the current position.
    pub(crate) fn error(&self, message: impl Into<String>) -> ParseError {
        self.cursor.error(message)
    }

    /// Consume `punct` or fail with `message`.
    pub(crate) fn expect_punct(&mut self, punct: &str, message: &str) -> PResult<()> {
        if self.cursor.eat_punct(punct) {
            Ok(())
        } else {
            Err(self.error(message))
        }
    }

    /// Consume an identifier or fail with `message`.
    pub(crate) fn expect_identifier(&mut self, message: &str) -> PResult<String> {
        match self.cursor.eat_identifier() {
            Some(name) => Ok(name.to_owned()),
            None => Err(self.error(message)),
        }
    }
}

/// Parse a complete source text.
///
/// # Errors
///
/// Returns the first tokenizer or grammar error.
pub fn parse(source: &str, options: ParseOptions) -> Result<Document, ParseError> {
    let tokens = widl_lexer::tokenize(source)?;
    parse_tokens(&tokens, options)
}

/// Parse an already tokenized source.
///
/// # Errors
///
/// Returns the first grammar error.
pub fn parse_tokens(tokens: &TokenList, options: ParseOptions) -> Result<Document, ParseError> {
    let definitions = Parser::new(tokens).parse_definitions()?;
    let trivia = if options.capture_trivia {
        widl_lexer::collect_trivia(tokens)
    } else {
        Vec::new()
    };
    debug!(
        definitions = definitions.len(),
        tokens = tokens.len(),
        capture_trivia = options.capture_trivia,
        "parsed document"
    );
    Ok(Document {
        definitions,
        trivia,
    })
}
