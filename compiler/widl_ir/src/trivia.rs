//! Trivia: whitespace and comments between significant tokens.
//!
//! Trivia is only collected when the caller asks for a lossless parse. Each
//! `Trivia` value is the complete run of whitespace and comments that
//! precedes one significant token, split into ordered pieces.

/// Classification of a single trivia piece.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TriviaKind {
    /// Run of spaces, tabs, carriage returns and line feeds.
    Whitespace,
    /// `// ...` up to (not including) the line break.
    LineComment,
    /// `/* ... */`, possibly spanning lines.
    BlockComment,
}

/// One piece of trivia, text kept verbatim including comment delimiters.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TriviaPiece {
    pub kind: TriviaKind,
    pub text: String,
}

impl TriviaPiece {
    pub fn new(kind: TriviaKind, text: impl Into<String>) -> Self {
        TriviaPiece {
            kind,
            text: text.into(),
        }
    }

    #[inline]
    pub fn is_comment(&self) -> bool {
        matches!(self.kind, TriviaKind::LineComment | TriviaKind::BlockComment)
    }
}

/// Leading trivia of one token.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct Trivia {
    pub pieces: Vec<TriviaPiece>,
}

impl Trivia {
    pub fn new() -> Self {
        Trivia { pieces: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, piece: TriviaPiece) {
        self.pieces.push(piece);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Comments only, in source order.
    pub fn comments(&self) -> impl Iterator<Item = &TriviaPiece> {
        self.pieces.iter().filter(|p| p.is_comment())
    }

    /// Verbatim text of every piece.
    pub fn text(&self) -> String {
        self.pieces.iter().map(|p| p.text.as_str()).collect()
    }
}

impl Extend<TriviaPiece> for Trivia {
    fn extend<T: IntoIterator<Item = TriviaPiece>>(&mut self, iter: T) {
        self.pieces.extend(iter);
    }
}

impl FromIterator<TriviaPiece> for Trivia {
    fn from_iter<T: IntoIterator<Item = TriviaPiece>>(iter: T) -> Self {
        Trivia {
            pieces: iter.into_iter().collect(),
        }
    }
}
