//! Write Context
//!
//! Tracks state while writing: the next captured trivia entry, the
//! separator requested before the next token, and the indentation level.
//!
//! # Token model
//!
//! Formatters emit the document one significant token at a time, in source
//! order, through [`WriteContext::token`]. Before each token the context
//! writes either the captured trivia for that position (lossless mode) or
//! the separator the formatter requested (canonical mode). Formatters never
//! write whitespace directly.

use std::borrow::Cow;

use widl_ir::Trivia;

use crate::emitter::StringEmitter;
use crate::WriteOptions;

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Canonical separator placed before the next token.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Separator {
    #[default]
    None,
    Space,
    /// Newline, then indentation at the current level.
    Line,
    /// Empty line, then indentation at the current level.
    Blank,
}

pub struct WriteContext<'a> {
    emitter: StringEmitter,
    trivia: &'a [Trivia],
    next_trivia: usize,
    pending: Separator,
    indent: usize,
    tokens: usize,
    format_type_name: Option<&'a dyn Fn(&str) -> String>,
}

impl<'a> WriteContext<'a> {
    pub fn new(trivia: &'a [Trivia], options: &WriteOptions<'a>) -> Self {
        WriteContext {
            emitter: StringEmitter::new(),
            trivia,
            next_trivia: 0,
            pending: Separator::None,
            indent: 0,
            tokens: 0,
            format_type_name: options.format_type_name,
        }
    }

    /// Emit one significant token, preceded by its trivia or separator.
    pub fn token(&mut self, text: &str) {
        match self.trivia.get(self.next_trivia) {
            Some(trivia) => {
                for piece in &trivia.pieces {
                    self.emitter.emit(&piece.text);
                }
            }
            None => self.emit_separator(),
        }
        self.next_trivia += 1;
        self.pending = Separator::None;
        self.emitter.emit(text);
        self.tokens += 1;
    }

    /// Emit `name` as a type name, applying the caller's formatter.
    ///
    /// Multi-word primitives are one token per word so the trivia between
    /// the words is replayed. A renamed type is emitted as one token and the
    /// trivia of its remaining words is skipped.
    pub fn type_name(&mut self, name: &str) {
        let formatted = self.format_type_name(name);
        if formatted != name {
            self.token(&formatted);
            self.next_trivia += name.split(' ').count() - 1;
            return;
        }
        for (i, word) in name.split(' ').enumerate() {
            if i > 0 {
                self.space();
            }
            self.token(word);
        }
    }

    fn format_type_name<'n>(&self, name: &'n str) -> Cow<'n, str> {
        match self.format_type_name {
            Some(format) => Cow::Owned(format(name)),
            None => Cow::Borrowed(name),
        }
    }

    #[inline]
    pub fn space(&mut self) {
        self.pending = Separator::Space;
    }

    #[inline]
    pub fn line(&mut self) {
        self.pending = Separator::Line;
    }

    #[inline]
    pub fn blank_line(&mut self) {
        self.pending = Separator::Blank;
    }

    #[inline]
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    #[inline]
    pub fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    fn emit_separator(&mut self) {
        if self.tokens == 0 {
            return;
        }
        match self.pending {
            Separator::None => {}
            Separator::Space => self.emitter.emit_space(),
            Separator::Line => {
                self.emitter.emit_newline();
                self.emitter.emit_indent(self.indent);
            }
            Separator::Blank => {
                self.emitter.emit_newline();
                self.emitter.emit_newline();
                self.emitter.emit_indent(self.indent);
            }
        }
    }

    /// Write the trailing trivia (or a final newline) and return the emitter.
    pub fn finish(mut self) -> StringEmitter {
        if self.trivia.is_empty() {
            if self.tokens > 0 {
                self.emitter.emit_newline();
            }
        } else {
            for trivia in self.trivia.iter().skip(self.next_trivia) {
                for piece in &trivia.pieces {
                    self.emitter.emit(&piece.text);
                }
            }
        }
        self.emitter
    }
}
