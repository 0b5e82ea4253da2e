//! Const values and default values.

use widl_ir::{Literal, TokenKind};

use crate::{PResult, Parser};

impl Parser<'_> {
    /// `true | false | null | Infinity | -Infinity | NaN | float | integer`
    pub(crate) fn parse_const_value(&mut self) -> PResult<Option<Literal>> {
        for (keyword, literal) in [
            ("true", Literal::Boolean(true)),
            ("false", Literal::Boolean(false)),
            ("null", Literal::Null),
            ("Infinity", Literal::Infinity { negative: false }),
            ("NaN", Literal::NaN),
        ] {
            if self.cursor.eat_keyword(keyword) {
                return Ok(Some(literal));
            }
        }

        if let Some(token) = self
            .cursor
            .eat_kind(TokenKind::Float)
            .or_else(|| self.cursor.eat_kind(TokenKind::Integer))
        {
            return Ok(Some(Literal::number(token.text.as_str())));
        }

        let start = self.snapshot();
        if self.cursor.eat_punct("-") {
            if self.cursor.eat_keyword("Infinity") {
                return Ok(Some(Literal::Infinity { negative: true }));
            }
            self.restore(start);
        }
        Ok(None)
    }

    /// The value after `=` in an optional argument or dictionary field.
    pub(crate) fn parse_default_value(&mut self) -> PResult<Literal> {
        if let Some(value) = self.parse_const_value()? {
            return Ok(value);
        }
        if self.cursor.eat_punct("[") {
            if !self.cursor.eat_punct("]") {
                return Err(self.error("Default sequence value must be empty"));
            }
            return Ok(Literal::EmptySequence);
        }
        match self.cursor.eat_kind(TokenKind::String) {
            Some(token) => Ok(Literal::String(unquote(&token.text).to_owned())),
            None => Err(self.error("No value for default")),
        }
    }
}

/// Strip the surrounding double quotes of a string token.
pub(crate) fn unquote(text: &str) -> &str {
    let text = text.strip_prefix('"').unwrap_or(text);
    text.strip_suffix('"').unwrap_or(text)
}
