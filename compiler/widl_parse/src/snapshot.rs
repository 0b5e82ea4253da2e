//! Parser snapshots for speculative parsing.
//!
//! A handful of productions can only be told apart by reading ahead:
//! attribute modifiers (`static`, `stringifier`, `inherit`, `readonly`)
//! before `attribute`, `optional` before an argument type, `readonly` before
//! `maplike`/`setlike`, and the target name of an `implements` statement.
//! Those productions take a snapshot, consume tentatively, and restore the
//! snapshot when the deciding token is missing.
//!
//! Tokens are never removed from the stream, so restoring is a single index
//! reset and trivia between the tentatively consumed tokens is untouched.

/// Saved cursor position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParserSnapshot {
    pub(crate) cursor_pos: usize,
}

impl ParserSnapshot {
    #[inline]
    pub(crate) fn new(cursor_pos: usize) -> Self {
        Self { cursor_pos }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_small() {
        assert!(std::mem::size_of::<ParserSnapshot>() <= 8);
    }

    #[test]
    fn snapshot_copy() {
        let a = ParserSnapshot::new(12);
        let b = a;
        assert_eq!(a, b);
        assert_eq!(b.cursor_pos, 12);
    }
}
