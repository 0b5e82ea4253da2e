use tracing::trace;
use widl_ir::Attribute;

use crate::{PResult, Parser};

impl Parser<'_> {
    /// `[static | stringifier] [inherit] [readonly] attribute Type name;`
    ///
    /// The modifiers are shared with operations and iterable declarations,
    /// so they are only kept when `attribute` follows them.
    pub(crate) fn parse_attribute(&mut self) -> PResult<Option<Attribute>> {
        let start = self.snapshot();
        let is_static = self.cursor.eat_keyword("static");
        let stringifier = !is_static && self.cursor.eat_keyword("stringifier");
        let inherit = self.cursor.eat_keyword("inherit");
        if inherit && (is_static || stringifier) {
            return Err(self.error("Cannot have a static or stringifier inherit"));
        }
        let readonly = self.cursor.eat_keyword("readonly");

        if !self.cursor.eat_keyword("attribute") {
            if self.cursor.position() != start.cursor_pos {
                trace!("attribute: no `attribute` keyword, rolling back modifiers");
            }
            self.restore(start);
            return Ok(None);
        }

        let Some(idl_type) = self.parse_type()? else {
            return Err(self.error("No type in attribute"));
        };
        if idl_type.is_sequence() {
            return Err(self.error("Attributes cannot accept sequence types"));
        }
        let name = self.expect_identifier("No name in attribute")?;
        self.expect_punct(";", "Unterminated attribute")?;
        Ok(Some(Attribute {
            extended_attributes: Vec::new(),
            is_static,
            stringifier,
            inherit,
            readonly,
            idl_type,
            name,
        }))
    }
}
