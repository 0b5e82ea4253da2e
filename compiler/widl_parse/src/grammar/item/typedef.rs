use widl_ir::Typedef;

use crate::{PResult, Parser};

impl Parser<'_> {
    /// `typedef [ExtendedAttributes] Type Name;`
    pub(crate) fn parse_typedef(&mut self) -> PResult<Option<Typedef>> {
        if !self.cursor.eat_keyword("typedef") {
            return Ok(None);
        }
        let type_extended_attributes = self.parse_extended_attributes()?;
        let Some(idl_type) = self.parse_type()? else {
            return Err(self.error("No type in typedef"));
        };
        let name = self.expect_identifier("No name in typedef")?;
        self.expect_punct(";", "Unterminated typedef")?;
        Ok(Some(Typedef {
            extended_attributes: Vec::new(),
            type_extended_attributes,
            idl_type,
            name,
        }))
    }
}
