//! Output buffer for the writer.

use crate::context::INDENT_WIDTH;

/// In-memory output. Whitespace goes through the dedicated methods so
/// separators and indentation are written in one place.
#[derive(Debug, Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token text or captured trivia, verbatim.
    pub fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    /// `level` indentation steps of [`INDENT_WIDTH`] spaces.
    pub fn emit_indent(&mut self, level: usize) {
        let width = level * INDENT_WIDTH;
        self.buffer.push_str(&" ".repeat(width));
    }

    pub fn emit_space(&mut self) {
        self.buffer.push(' ');
    }

    pub fn output(self) -> String {
        self.buffer
    }
}
