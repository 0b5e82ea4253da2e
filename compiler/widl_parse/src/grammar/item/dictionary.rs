use widl_ir::{Dictionary, Field, Member};

use crate::{PResult, Parser};

impl Parser<'_> {
    /// `dictionary Name [: Parent] { fields };`
    pub(crate) fn parse_dictionary(&mut self, partial: bool) -> PResult<Option<Dictionary>> {
        if !self.cursor.eat_keyword("dictionary") {
            return Ok(None);
        }
        let name = self.expect_identifier("No name for dictionary")?;
        let inheritance = if partial {
            None
        } else {
            self.parse_inheritance()?
        };
        self.expect_punct("{", "Bodyless dictionary")?;
        let members = self.parse_body("dictionary", Self::parse_dictionary_field)?;
        Ok(Some(Dictionary {
            extended_attributes: Vec::new(),
            name,
            partial,
            inheritance,
            members,
        }))
    }

    /// `[required] Type name [= Default];`
    fn parse_dictionary_field(&mut self) -> PResult<Member> {
        let required = self.cursor.eat_keyword("required");
        let Some(idl_type) = self.parse_type()? else {
            return Err(self.error("No type for dictionary member"));
        };
        let name = self.expect_identifier("No name for dictionary member")?;
        let default = if self.cursor.eat_punct("=") {
            if required {
                return Err(self.error("Required member must not have a default"));
            }
            Some(self.parse_default_value()?)
        } else {
            None
        };
        self.expect_punct(";", "Unterminated dictionary member")?;
        Ok(Member::Field(Field {
            extended_attributes: Vec::new(),
            required,
            idl_type,
            name,
            default,
        }))
    }
}
