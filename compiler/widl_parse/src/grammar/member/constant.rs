use widl_ir::{Const, IdlType};

use crate::{PResult, Parser};

impl Parser<'_> {
    /// `const Type[?] name = value;` where `Type` is a primitive or an
    /// identifier.
    pub(crate) fn parse_const(&mut self) -> PResult<Option<Const>> {
        if !self.cursor.eat_keyword("const") {
            return Ok(None);
        }
        let type_name = match self.parse_primitive_type()? {
            Some(name) => name,
            None => self.expect_identifier("No type for const")?,
        };
        let mut idl_type = IdlType::named(type_name);
        if self.cursor.eat_punct("?") {
            idl_type = idl_type.nullable();
        }
        let name = self.expect_identifier("No name for const")?;
        self.expect_punct("=", "No value assignment for const")?;
        let Some(value) = self.parse_const_value()? else {
            return Err(self.error("No value for const"));
        };
        self.expect_punct(";", "Unterminated const")?;
        Ok(Some(Const {
            extended_attributes: Vec::new(),
            idl_type,
            name,
            value,
        }))
    }
}
