//! Syntax tree for Web IDL fragments.
//!
//! # Modules
//!
//! - [`types`]: type expressions (`IdlType`)
//! - [`literal`]: const and default values
//! - [`attrs`]: extended attributes and arguments
//! - [`items`]: top-level definitions
//! - [`members`]: interface, dictionary and exception members

mod attrs;
mod items;
mod literal;
mod members;
mod types;

pub use attrs::{Argument, ExtAttrRhs, ExtendedAttribute};
pub use items::{
    Callback, Definition, Dictionary, Enum, Exception, Implements, Interface, Typedef,
};
pub use literal::{Literal, Number};
pub use members::{
    Attribute, Const, Field, Iterable, IterableKind, IteratorMember, IteratorObject, Member,
    Operation, Serializer, SerializerKind, Special,
};
pub use types::{IdlType, TypeBase};

use crate::Trivia;

/// Result of one parse: the definitions in source order plus any captured trivia.
///
/// When trivia was captured, `trivia[i]` precedes the i-th significant token
/// and the final entry follows the last one, so there is always one more
/// entry than there are significant tokens. Without capture `trivia` is empty.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct Document {
    pub definitions: Vec<Definition>,
    pub trivia: Vec<Trivia>,
}

impl Document {
    pub fn new(definitions: Vec<Definition>) -> Self {
        Document {
            definitions,
            trivia: Vec::new(),
        }
    }

    #[inline]
    pub fn has_trivia(&self) -> bool {
        !self.trivia.is_empty()
    }

    /// Drop captured trivia, leaving only the structure.
    #[must_use]
    pub fn without_trivia(mut self) -> Self {
        self.trivia.clear();
        self
    }

    /// Look up the first definition with the given name.
    pub fn find(&self, name: &str) -> Option<&Definition> {
        self.definitions.iter().find(|d| d.name() == name)
    }
}

#[cfg(test)]
mod tests;
