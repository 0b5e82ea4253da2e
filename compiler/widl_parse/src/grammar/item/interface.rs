use widl_ir::Interface;

use crate::{PResult, Parser};

impl Parser<'_> {
    /// `interface Name [: Parent] { members };`
    pub(crate) fn parse_interface(&mut self, partial: bool) -> PResult<Option<Interface>> {
        if !self.cursor.eat_keyword("interface") {
            return Ok(None);
        }
        let name = self.expect_identifier("No name for interface")?;
        let inheritance = if partial {
            None
        } else {
            self.parse_inheritance()?
        };
        self.expect_punct("{", "Bodyless interface")?;
        let members = self.parse_body("interface", Self::parse_interface_member)?;
        Ok(Some(Interface {
            extended_attributes: Vec::new(),
            name,
            partial,
            inheritance,
            members,
        }))
    }
}
