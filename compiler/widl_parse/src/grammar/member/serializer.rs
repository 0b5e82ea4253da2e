use widl_ir::{Serializer, SerializerKind};

use crate::{PResult, Parser};

impl Parser<'_> {
    /// ```text
    /// Serializer = "serializer" ( ";"
    ///            | "=" ( "{" MapPattern "}" | "[" ListPattern "]" | Identifier ) ";"
    ///            | ReturnType [ Identifier ] "(" ArgumentList? ")" ";" )
    /// MapPattern  = "getter" | "inherit" [ "," Identifiers ] | Identifiers?
    /// ListPattern = "getter" | Identifiers?
    /// ```
    pub(crate) fn parse_serializer(&mut self) -> PResult<Option<Serializer>> {
        if !self.cursor.eat_keyword("serializer") {
            return Ok(None);
        }
        let kind = if self.cursor.eat_punct(";") {
            SerializerKind::Bare
        } else if self.cursor.eat_punct("=") {
            let kind = self.parse_serializer_pattern()?;
            self.expect_punct(";", "No semicolon after serializer")?;
            kind
        } else {
            let return_type = self.parse_return_type()?;
            let (name, arguments) = self.parse_operation_rest()?;
            SerializerKind::Operation {
                return_type,
                name,
                arguments,
            }
        };
        Ok(Some(Serializer {
            extended_attributes: Vec::new(),
            kind,
        }))
    }

    fn parse_serializer_pattern(&mut self) -> PResult<SerializerKind> {
        if self.cursor.eat_punct("{") {
            let names = if self.cursor.eat_keyword("getter") {
                vec!["getter".to_owned()]
            } else if self.cursor.eat_keyword("inherit") {
                let mut names = vec!["inherit".to_owned()];
                if self.cursor.eat_punct(",") {
                    let rest = self.parse_identifier_list()?;
                    if rest.is_empty() {
                        return Err(self.error("Unterminated serializer pattern map"));
                    }
                    names.extend(rest);
                }
                names
            } else {
                self.parse_identifier_list()?
            };
            self.expect_punct("}", "Unterminated serializer pattern map")?;
            return Ok(SerializerKind::PatternMap(names));
        }
        if self.cursor.eat_punct("[") {
            let names = if self.cursor.eat_keyword("getter") {
                vec!["getter".to_owned()]
            } else {
                self.parse_identifier_list()?
            };
            self.expect_punct("]", "Unterminated serializer pattern list")?;
            return Ok(SerializerKind::PatternList(names));
        }
        let name = self.expect_identifier("Invalid serializer")?;
        Ok(SerializerKind::Named(name))
    }
}
