//! Web IDL front door.
//!
//! Re-exports the pieces most callers need: [`parse`] text into a
//! [`Document`], inspect or edit the tree, then [`write`] it back. Parsing
//! with [`ParseOptions::with_trivia`] makes the write lossless.
//!
//! ```text
//! let doc = widlc::parse(source, ParseOptions::default().with_trivia())?;
//! assert_eq!(widlc::write(&doc, &WriteOptions::default()), source);
//! ```

pub mod commands;

use std::sync::Once;

pub use widl_fmt::{write, write_definitions, WriteOptions};
pub use widl_ir::{
    Argument, Definition, Document, ExtendedAttribute, IdlType, Literal, Member, Token,
    TokenKind, TokenList, Trivia,
};
pub use widl_lexer::{tokenize, LexError};
pub use widl_parse::{parse, ParseError, ParseOptions};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber when `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call does anything.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
