use tracing::trace;
use widl_ir::{Iterable, IterableKind};

use crate::{PResult, Parser};

impl Parser<'_> {
    /// `iterable<T[, U]>;`, `legacyiterable<T>;`,
    /// `[readonly] maplike<K, V>;`, `[readonly] setlike<T>;`
    pub(crate) fn parse_iterable(&mut self) -> PResult<Option<Iterable>> {
        let start = self.snapshot();
        let readonly = self.cursor.eat_keyword("readonly");
        let kind = self
            .cursor
            .current_identifier()
            .and_then(IterableKind::from_keyword)
            .filter(|kind| !readonly || kind.allows_readonly());
        let Some(kind) = kind else {
            if readonly {
                trace!("iterable: `readonly` not followed by maplike/setlike, rolling back");
            }
            self.restore(start);
            return Ok(None);
        };
        self.cursor.advance();

        let keyword = kind.keyword();
        let error_message = format!("Error parsing {keyword} declaration");
        self.expect_punct("<", &error_message)?;
        let Some(first) = self.parse_type()? else {
            return Err(self.error(error_message.as_str()));
        };
        let mut type_arguments = vec![first];
        if kind.allows_second_type() && self.cursor.eat_punct(",") {
            match self.parse_type()? {
                Some(second) => type_arguments.push(second),
                None => return Err(self.error(error_message.as_str())),
            }
        }
        if kind.requires_second_type() && type_arguments.len() < 2 {
            return Err(self.error(format!(
                "Missing second type argument in {keyword} declaration"
            )));
        }
        self.expect_punct(">", &format!("Unterminated {keyword} declaration"))?;
        self.expect_punct(";", &format!("Missing semicolon after {keyword} declaration"))?;

        Ok(Some(Iterable {
            extended_attributes: Vec::new(),
            kind,
            readonly,
            type_arguments,
        }))
    }
}
