//! Web IDL IR - Tokens, Trivia and Syntax Tree Types
//!
//! This crate contains the data structures shared by the lexer, parser and
//! writer:
//! - Spans for source locations
//! - Tokens and `TokenList` for tokenizer output
//! - Trivia (whitespace and comments) captured for lossless round trips
//! - The syntax tree (`Document`, `Definition`, `Member`, `IdlType`, ...)
//!
//! # Design Philosophy
//!
//! - **Closed variant sets**: definitions and members are enums, so every
//!   consumer (most importantly the writer) gets exhaustiveness checking.
//! - **Source fidelity**: anything the writer needs to reproduce the exact
//!   token sequence (number spelling, modifier order, trailing commas) is
//!   stored on the node.
//! - **No behavior**: parsing and printing live in `widl_parse` and `widl_fmt`.

pub mod ast;
mod span;
mod token;
mod trivia;

pub use ast::{
    Argument, Attribute, Callback, Const, Definition, Dictionary, Document, Enum, Exception,
    ExtAttrRhs, ExtendedAttribute, Field, IdlType, Implements, Interface, Iterable, IterableKind,
    IteratorMember, IteratorObject, Literal, Member, Number, Operation, Serializer,
    SerializerKind, Special, TypeBase, Typedef,
};
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
pub use trivia::{Trivia, TriviaKind, TriviaPiece};
