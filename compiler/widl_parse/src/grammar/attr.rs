//! Extended attribute parsing.
//!
//! ```text
//! ExtendedAttributes = "[" Attr ( "," Attr )* "]"
//! Attr = Identifier [ "=" ( Identifier | "(" IdentifierList ")" ) ]
//!                   [ "(" ( ArgumentList | Type "," Type )? ")" ]
//! ```

use tracing::trace;
use widl_ir::{ExtAttrRhs, ExtendedAttribute, IdlType};

use crate::{PResult, Parser};

impl Parser<'_> {
    /// An optional bracketed attribute list; empty when there is no `[`.
    pub(crate) fn parse_extended_attributes(&mut self) -> PResult<Vec<ExtendedAttribute>> {
        if !self.cursor.eat_punct("[") {
            return Ok(Vec::new());
        }

        let Some(first) = self.parse_extended_attribute()? else {
            return Err(self.error("Extended attribute with no content"));
        };
        let mut attrs = vec![first];
        while self.cursor.eat_punct(",") {
            match self.parse_extended_attribute()? {
                Some(attr) => attrs.push(attr),
                None => return Err(self.error("Trailing comma in extended attribute")),
            }
        }
        self.expect_punct("]", "No end of extended attribute")?;
        Ok(attrs)
    }

    fn parse_extended_attribute(&mut self) -> PResult<Option<ExtendedAttribute>> {
        let Some(name) = self.cursor.eat_identifier() else {
            return Ok(None);
        };
        let mut attr = ExtendedAttribute::new(name);

        if self.cursor.eat_punct("=") {
            attr.rhs = Some(self.parse_extended_attribute_rhs()?);
        }

        if self.cursor.eat_punct("(") {
            if let Some(arguments) = self.parse_argument_list()? {
                attr.arguments = Some(arguments);
            } else if let Some(pair) = self.parse_type_pair()? {
                attr.type_pair = Some(pair);
            } else {
                attr.arguments = Some(Vec::new());
            }
            self.expect_punct(
                ")",
                "Unexpected token in extended attribute argument list or type pair",
            )?;
        }

        Ok(Some(attr))
    }

    fn parse_extended_attribute_rhs(&mut self) -> PResult<ExtAttrRhs> {
        if let Some(name) = self.cursor.eat_identifier() {
            return Ok(ExtAttrRhs::Identifier(name.to_owned()));
        }
        if self.cursor.eat_punct("(") {
            let names = self.parse_identifier_list()?;
            self.expect_punct(")", "Unterminated identifier list")?;
            return Ok(ExtAttrRhs::IdentifierList(names));
        }
        Err(self.error("No right hand side to extended attribute assignment"))
    }

    /// `Type "," Type`, fully rolled back unless both types are present.
    fn parse_type_pair(&mut self) -> PResult<Option<(IdlType, IdlType)>> {
        let start = self.snapshot();
        if let Some(first) = self.parse_type()? {
            if self.cursor.eat_punct(",") {
                if let Some(second) = self.parse_type()? {
                    return Ok(Some((first, second)));
                }
            }
        }
        trace!("type pair: no match, rolling back");
        self.restore(start);
        Ok(None)
    }

    /// Zero or more comma-separated identifiers.
    pub(crate) fn parse_identifier_list(&mut self) -> PResult<Vec<String>> {
        let mut names = Vec::new();
        let Some(first) = self.cursor.eat_identifier() else {
            return Ok(names);
        };
        names.push(first.to_owned());
        while self.cursor.eat_punct(",") {
            let name = self.expect_identifier("Trailing comma in identifier list")?;
            names.push(name);
        }
        Ok(names)
    }
}
