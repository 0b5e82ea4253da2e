//! Command handlers for the `widl` CLI.
//!
//! Each handler takes source text and returns the text to print, so the
//! binary only deals with files and exit codes. `read_file` lives here.

mod debug;
mod fmt;

use std::io;

use thiserror::Error;

pub use debug::{lex_source, parse_source};
pub use fmt::{format_source, roundtrip_source, FormatResult};

/// Failure of a CLI command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("cannot read '{path}': {source}")]
    Read { path: String, source: io::Error },
    #[error("cannot write '{path}': {source}")]
    Write { path: String, source: io::Error },
    #[error("{path}: {source}")]
    Parse {
        path: String,
        source: widl_parse::ParseError,
    },
    #[error("{path}: written text differs from the source at byte {offset}")]
    Mismatch { path: String, offset: usize },
    #[error("{path}: {source}")]
    Lex {
        path: String,
        source: widl_lexer::LexError,
    },
}

/// Read a source file.
pub fn read_file(path: &str) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.to_owned(),
        source,
    })
}

/// Overwrite a source file.
pub fn write_file(path: &str, contents: &str) -> Result<(), CommandError> {
    std::fs::write(path, contents).map_err(|source| CommandError::Write {
        path: path.to_owned(),
        source,
    })
}
