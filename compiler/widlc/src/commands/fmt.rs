//! `fmt` and `roundtrip`.

use tracing::debug;
use widl_fmt::WriteOptions;
use widl_parse::ParseOptions;

use super::CommandError;

/// Outcome of formatting one source.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FormatResult {
    /// Already in canonical layout.
    Unchanged,
    /// Canonical text differs from the input.
    Formatted(String),
}

/// Rewrite `source` in canonical layout. Comments are not kept.
pub fn format_source(path: &str, source: &str) -> Result<FormatResult, CommandError> {
    let document = parse(path, source, ParseOptions::default())?;
    let formatted = widl_fmt::write(&document, &WriteOptions::default());
    if formatted == source {
        Ok(FormatResult::Unchanged)
    } else {
        Ok(FormatResult::Formatted(formatted))
    }
}

/// Parse with trivia and write back. Fails with `Mismatch` at the first
/// differing byte if the output is not identical to the input.
pub fn roundtrip_source(path: &str, source: &str) -> Result<(), CommandError> {
    let document = parse(path, source, ParseOptions::default().with_trivia())?;
    let written = widl_fmt::write(&document, &WriteOptions::default());
    match first_difference(source, &written) {
        None => Ok(()),
        Some(offset) => {
            debug!(path, offset, "round trip mismatch");
            Err(CommandError::Mismatch {
                path: path.to_owned(),
                offset,
            })
        }
    }
}

fn parse(
    path: &str,
    source: &str,
    options: ParseOptions,
) -> Result<widl_ir::Document, CommandError> {
    widl_parse::parse(source, options).map_err(|source| CommandError::Parse {
        path: path.to_owned(),
        source,
    })
}

fn first_difference(a: &str, b: &str) -> Option<usize> {
    let common = a
        .bytes()
        .zip(b.bytes())
        .position(|(x, y)| x != y)
        .unwrap_or(a.len().min(b.len()));
    (common < a.len().max(b.len())).then_some(common)
}
