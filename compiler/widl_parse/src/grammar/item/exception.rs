use widl_ir::{Exception, Field, Member};

use crate::{PResult, Parser};

impl Parser<'_> {
    /// `exception Name [: Parent] { consts and fields };`
    pub(crate) fn parse_exception(&mut self) -> PResult<Option<Exception>> {
        if !self.cursor.eat_keyword("exception") {
            return Ok(None);
        }
        let name = self.expect_identifier("No name for exception")?;
        let inheritance = self.parse_inheritance()?;
        self.expect_punct("{", "Bodyless exception")?;
        let members = self.parse_body("exception", Self::parse_exception_member)?;
        Ok(Some(Exception {
            extended_attributes: Vec::new(),
            name,
            inheritance,
            members,
        }))
    }

    fn parse_exception_member(&mut self) -> PResult<Member> {
        if let Some(constant) = self.parse_const()? {
            return Ok(Member::Const(constant));
        }
        let Some(idl_type) = self.parse_type()? else {
            return Err(self.error("No type for exception member"));
        };
        let name = self.expect_identifier("No name for exception member")?;
        self.expect_punct(";", "Missing semicolon after exception field")?;
        Ok(Member::Field(Field {
            extended_attributes: Vec::new(),
            required: false,
            idl_type,
            name,
            default: None,
        }))
    }
}
