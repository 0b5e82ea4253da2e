use tracing::trace;
use widl_ir::Implements;

use crate::{PResult, Parser};

impl Parser<'_> {
    /// `Target implements Mixin;`
    ///
    /// The target identifier is read tentatively and given back unless
    /// `implements` follows it.
    pub(crate) fn parse_implements(&mut self) -> PResult<Option<Implements>> {
        let start = self.snapshot();
        let Some(target) = self.cursor.eat_identifier() else {
            return Ok(None);
        };
        if !self.cursor.eat_keyword("implements") {
            trace!(name = target, "implements: no keyword, rolling back");
            self.restore(start);
            return Ok(None);
        }
        let implements = self.expect_identifier("Incomplete implements statement")?;
        self.expect_punct(";", "No terminating ; for implements statement")?;
        Ok(Some(Implements {
            extended_attributes: Vec::new(),
            target: target.to_owned(),
            implements,
        }))
    }
}
