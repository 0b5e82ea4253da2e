//! Argument parsing.
//!
//! ```text
//! Argument     = ExtendedAttributes [ "optional" ] Type [ "..." ] Identifier [ "=" Default ]
//! ArgumentList = Argument ( "," Argument )*
//! ```
//!
//! `...` is only recognised on non-optional arguments and must be three
//! adjacent `.` characters. A default is only read after `optional`.

use tracing::trace;
use widl_ir::Argument;

use crate::{PResult, Parser};

impl Parser<'_> {
    /// One argument, or `Ok(None)` with nothing consumed.
    pub(crate) fn parse_argument(&mut self) -> PResult<Option<Argument>> {
        let start = self.snapshot();
        let extended_attributes = self.parse_extended_attributes()?;

        let before_optional = self.snapshot();
        let mut optional = self.cursor.eat_keyword("optional");
        let mut idl_type = self.parse_type()?;
        if idl_type.is_none() && optional {
            trace!("argument: `optional` not followed by a type, rolling back");
            self.restore(before_optional);
            optional = false;
            idl_type = self.parse_type()?;
        }
        let Some(idl_type) = idl_type else {
            self.restore(start);
            return Ok(None);
        };

        let mut variadic = false;
        if !optional && self.cursor.check_adjacent_punct(".", 3) {
            self.cursor.advance_raw();
            self.cursor.advance_raw();
            self.cursor.advance();
            variadic = true;
        }

        let Some(name) = self.cursor.eat_identifier() else {
            trace!("argument: no name, rolling back");
            self.restore(start);
            return Ok(None);
        };

        let default = if optional && self.cursor.eat_punct("=") {
            Some(self.parse_default_value()?)
        } else {
            None
        };

        Ok(Some(Argument {
            extended_attributes,
            optional,
            variadic,
            idl_type,
            name: name.to_owned(),
            default,
        }))
    }

    /// A non-empty argument list, `Ok(None)` when no first argument parses.
    pub(crate) fn parse_argument_list(&mut self) -> PResult<Option<Vec<Argument>>> {
        let Some(first) = self.parse_argument()? else {
            return Ok(None);
        };
        let mut arguments = vec![first];
        while self.cursor.eat_punct(",") {
            match self.parse_argument()? {
                Some(argument) => arguments.push(argument),
                None => return Err(self.error("Trailing comma in arguments list")),
            }
        }
        Ok(Some(arguments))
    }

    /// `ArgumentList? ")"` after an opening parenthesis.
    pub(crate) fn parse_parenthesized_arguments(
        &mut self,
        unterminated: &str,
    ) -> PResult<Vec<Argument>> {
        let arguments = self.parse_argument_list()?.unwrap_or_default();
        self.expect_punct(")", unterminated)?;
        Ok(arguments)
    }
}

#[cfg(test)]
mod tests;
