//! Grouping whitespace tokens into per-token trivia.

use widl_ir::{TokenList, Trivia, TriviaKind, TriviaPiece};

use crate::cursor::{is_blank, Cursor};

/// Split the text of one whitespace token into ordered pieces.
///
/// Anything that is neither a blank run nor a comment cannot occur in a
/// whitespace token; it is kept as a whitespace piece so no text is lost.
pub fn split_trivia(text: &str) -> Trivia {
    let bytes = text.as_bytes();
    let mut cursor = Cursor::new(bytes, 0);
    let mut trivia = Trivia::new();

    while !cursor.is_eof() {
        let start = cursor.pos();
        let kind = match (cursor.current(), cursor.peek(1)) {
            (b'/', b'/') => {
                cursor.eat_line_comment();
                TriviaKind::LineComment
            }
            (b'/', b'*') if cursor.eat_block_comment() => TriviaKind::BlockComment,
            _ => {
                if cursor.eat_while(is_blank) == 0 {
                    cursor.eat_while(|b| !is_blank(b) && b != b'/');
                    if cursor.pos() == start {
                        cursor.advance();
                    }
                }
                TriviaKind::Whitespace
            }
        };
        trivia.push(TriviaPiece::new(kind, &text[start..cursor.pos()]));
    }

    trivia
}

/// Leading trivia for every significant token, plus one trailing entry.
///
/// `result[i]` is everything between significant token `i - 1` and
/// significant token `i`. The last entry holds whatever follows the final
/// significant token, so the result always has `significant_len() + 1`
/// entries.
pub fn collect_trivia(tokens: &TokenList) -> Vec<Trivia> {
    let mut out = Vec::with_capacity(tokens.significant_len() + 1);
    let mut pending = Trivia::new();

    for token in tokens {
        if token.kind.is_trivia() {
            pending.extend(split_trivia(&token.text).pieces);
        } else {
            out.push(std::mem::take(&mut pending));
        }
    }
    out.push(pending);
    out
}
