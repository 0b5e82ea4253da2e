use widl_ir::{Callback, Definition};

use crate::{PResult, Parser};

impl Parser<'_> {
    /// `callback interface ...` or `callback Name = ReturnType (args);`
    pub(crate) fn parse_callback(&mut self) -> PResult<Option<Definition>> {
        if !self.cursor.eat_keyword("callback") {
            return Ok(None);
        }
        if let Some(interface) = self.parse_interface(false)? {
            return Ok(Some(Definition::CallbackInterface(interface)));
        }

        let name = self.expect_identifier("No name for callback")?;
        self.expect_punct("=", "No assignment in callback")?;
        let return_type = self.parse_return_type()?;
        self.expect_punct("(", "No arguments in callback")?;
        let arguments = self.parse_parenthesized_arguments("Unterminated callback")?;
        self.expect_punct(";", "Unterminated callback")?;
        Ok(Some(Definition::Callback(Callback {
            extended_attributes: Vec::new(),
            name,
            return_type,
            arguments,
        })))
    }
}
