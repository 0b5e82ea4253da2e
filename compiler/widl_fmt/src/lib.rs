//! Writer for Web IDL syntax trees.
//!
//! Turns a [`Document`] back into source text. Two modes share one code
//! path:
//!
//! - **Lossless**: a document parsed with trivia capture is written back
//!   byte for byte, comments and whitespace included.
//! - **Canonical**: a document without trivia is laid out with one
//!   definition per paragraph, one member per line and four-space
//!   indentation.
//!
//! # Architecture
//!
//! - [`emitter`]: the output buffer (`StringEmitter`)
//! - [`context`]: trivia replay, separators and indentation
//! - `declarations`: the document and each definition kind
//! - `members`: each member kind
//! - `types`: type expressions and literals
//! - `attrs`: extended attributes and arguments
//!
//! The writer trusts its input: a tree that could not have come from the
//! parser produces text that may not parse back.

mod attrs;
pub mod context;
mod declarations;
pub mod emitter;
mod members;
mod types;

use std::fmt;

use tracing::debug;
use widl_ir::{Definition, Document};

pub use context::{Separator, WriteContext, INDENT_WIDTH};
pub use declarations::DocumentWriter;
pub use emitter::StringEmitter;

/// Writer configuration.
#[derive(Clone, Copy, Default)]
pub struct WriteOptions<'a> {
    /// Applied to every named base type before it is emitted.
    pub format_type_name: Option<&'a dyn Fn(&str) -> String>,
}

impl<'a> WriteOptions<'a> {
    #[must_use]
    pub fn with_type_name_formatter(mut self, format: &'a dyn Fn(&str) -> String) -> Self {
        self.format_type_name = Some(format);
        self
    }
}

impl fmt::Debug for WriteOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriteOptions")
            .field("format_type_name", &self.format_type_name.is_some())
            .finish()
    }
}

/// Write a document, replaying its trivia if it has any.
pub fn write(document: &Document, options: &WriteOptions<'_>) -> String {
    let mut writer = DocumentWriter::new(&document.trivia, options);
    writer.write_definitions(&document.definitions);
    let output = writer.finish();
    debug!(
        definitions = document.definitions.len(),
        trivia = document.has_trivia(),
        bytes = output.len(),
        "wrote document"
    );
    output
}

/// Write definitions in canonical layout.
pub fn write_definitions(definitions: &[Definition], options: &WriteOptions<'_>) -> String {
    let mut writer = DocumentWriter::new(&[], options);
    writer.write_definitions(definitions);
    writer.finish()
}
