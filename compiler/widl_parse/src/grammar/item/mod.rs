//! Top-level definitions.
//!
//! ```text
//! Definitions = ( ExtendedAttributes Definition )*
//! Definition  = Callback | Interface | Partial | Dictionary | Exception
//!             | Enum | Typedef | Implements
//! ```
//!
//! Forms are tried in that order; the first whose leading token matches
//! commits. When none matches the loop ends and any remaining token is an
//! error.

mod callback;
mod dictionary;
mod enum_def;
mod exception;
mod implements;
mod interface;
mod typedef;

use tracing::trace;
use widl_ir::{Definition, Member};

use crate::{PResult, Parser};

impl Parser<'_> {
    /// Parse every definition up to the end of input.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed definition, on extended attributes that
    /// precede no definition, and on tokens that start no definition.
    pub fn parse_definitions(&mut self) -> PResult<Vec<Definition>> {
        let mut definitions = Vec::new();
        loop {
            let extended_attributes = self.parse_extended_attributes()?;
            match self.parse_definition()? {
                Some(mut definition) => {
                    trace!(
                        kind = definition.kind_name(),
                        name = definition.name(),
                        "definition"
                    );
                    *definition.extended_attributes_mut() = extended_attributes;
                    definitions.push(definition);
                }
                None if !extended_attributes.is_empty() => {
                    return Err(self.error("Stray extended attributes"));
                }
                None => break,
            }
        }
        if !self.cursor.is_at_end() {
            return Err(self.error("Unrecognised tokens"));
        }
        Ok(definitions)
    }

    fn parse_definition(&mut self) -> PResult<Option<Definition>> {
        if let Some(definition) = self.parse_callback()? {
            return Ok(Some(definition));
        }
        if let Some(interface) = self.parse_interface(false)? {
            return Ok(Some(Definition::Interface(interface)));
        }
        if let Some(definition) = self.parse_partial()? {
            return Ok(Some(definition));
        }
        if let Some(dictionary) = self.parse_dictionary(false)? {
            return Ok(Some(Definition::Dictionary(dictionary)));
        }
        if let Some(exception) = self.parse_exception()? {
            return Ok(Some(Definition::Exception(exception)));
        }
        if let Some(enumeration) = self.parse_enum()? {
            return Ok(Some(Definition::Enum(enumeration)));
        }
        if let Some(typedef) = self.parse_typedef()? {
            return Ok(Some(Definition::Typedef(typedef)));
        }
        Ok(self.parse_implements()?.map(Definition::Implements))
    }

    /// `partial` followed by a dictionary or an interface, neither of which
    /// may name a parent.
    fn parse_partial(&mut self) -> PResult<Option<Definition>> {
        if !self.cursor.eat_keyword("partial") {
            return Ok(None);
        }
        if let Some(dictionary) = self.parse_dictionary(true)? {
            return Ok(Some(Definition::Dictionary(dictionary)));
        }
        if let Some(interface) = self.parse_interface(true)? {
            return Ok(Some(Definition::Interface(interface)));
        }
        Err(self.error("Partial doesn't apply to anything"))
    }

    /// `: Name`, if present.
    fn parse_inheritance(&mut self) -> PResult<Option<String>> {
        if !self.cursor.eat_punct(":") {
            return Ok(None);
        }
        self.expect_identifier("No type in inheritance").map(Some)
    }

    /// Members up to and including `}` `;`, the `{` already consumed.
    ///
    /// `parse_member` reads one member after its extended attributes.
    fn parse_body(
        &mut self,
        kind: &str,
        mut parse_member: impl FnMut(&mut Self) -> PResult<Member>,
    ) -> PResult<Vec<Member>> {
        let mut members = Vec::new();
        loop {
            if self.cursor.eat_punct("}") {
                self.expect_punct(";", &format!("Missing semicolon after {kind}"))?;
                return Ok(members);
            }
            if self.cursor.is_at_end() {
                return Err(self.error(format!("Unterminated {kind}")));
            }
            let extended_attributes = self.parse_extended_attributes()?;
            let mut member = parse_member(self)?;
            trace!(kind = member.kind_name(), name = member.name(), "member");
            *member.extended_attributes_mut() = extended_attributes;
            members.push(member);
        }
    }
}
