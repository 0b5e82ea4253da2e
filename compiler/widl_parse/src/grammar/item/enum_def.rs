use widl_ir::{Enum, TokenKind};

use crate::grammar::literal::unquote;
use crate::{PResult, Parser};

impl Parser<'_> {
    /// `enum Name { "a", "b" [,] };`
    pub(crate) fn parse_enum(&mut self) -> PResult<Option<Enum>> {
        if !self.cursor.eat_keyword("enum") {
            return Ok(None);
        }
        let name = self.expect_identifier("No name for enum")?;
        self.expect_punct("{", "No curly for enum")?;

        let mut values = Vec::new();
        let mut trailing_comma = false;
        loop {
            if self.cursor.eat_punct("}") {
                break;
            }
            if self.cursor.is_at_end() {
                return Err(self.error("Unterminated enum"));
            }
            let Some(value) = self.cursor.eat_kind(TokenKind::String) else {
                return Err(self.error("Unexpected value in enum"));
            };
            values.push(unquote(&value.text).to_owned());
            trailing_comma = self.cursor.eat_punct(",");
            if !trailing_comma {
                self.expect_punct("}", "No comma between enum values")?;
                break;
            }
        }

        self.expect_punct(";", "No semicolon after enum")?;
        Ok(Some(Enum {
            extended_attributes: Vec::new(),
            name,
            values,
            trailing_comma,
        }))
    }
}
