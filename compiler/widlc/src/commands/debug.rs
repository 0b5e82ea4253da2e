//! `lex` and `parse`: inspect the token stream and the definitions.

use std::fmt::Write as _;

use widl_ir::{Definition, TokenKind};
use widl_parse::ParseOptions;

use super::CommandError;

/// One line per token: kind, line, span and text.
pub fn lex_source(path: &str, source: &str) -> Result<String, CommandError> {
    let tokens = widl_lexer::tokenize(source).map_err(|source| CommandError::Lex {
        path: path.to_owned(),
        source,
    })?;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Tokens for '{path}' ({} tokens, {} significant):",
        tokens.len(),
        tokens.significant_len()
    );
    for token in &tokens {
        let text = match token.kind {
            TokenKind::Whitespace => format!("{:?}", token.text),
            _ => token.text.clone(),
        };
        let _ = writeln!(
            out,
            "  {:<10} line {:<4} {}  {text}",
            token.kind.display_name(),
            token.line,
            token.span
        );
    }
    Ok(out)
}

/// Definition summary: kind, name, member count.
pub fn parse_source(path: &str, source: &str) -> Result<String, CommandError> {
    let document =
        widl_parse::parse(source, ParseOptions::default()).map_err(|source| {
            CommandError::Parse {
                path: path.to_owned(),
                source,
            }
        })?;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Parse result for '{path}': {} definitions",
        document.definitions.len()
    );
    for definition in &document.definitions {
        let _ = write!(out, "  {} {}", definition.kind_name(), definition.name());
        if let Definition::Implements(implements) = definition {
            let _ = write!(out, " -> {}", implements.implements);
        }
        if let Some(parent) = definition.inheritance() {
            let _ = write!(out, " : {parent}");
        }
        let members = definition.members();
        if !members.is_empty() {
            let _ = write!(out, " ({} members)", members.len());
        }
        out.push('\n');
        for member in members {
            let _ = writeln!(
                out,
                "    {} {}",
                member.kind_name(),
                member.name().unwrap_or("<unnamed>")
            );
        }
    }
    Ok(out)
}
