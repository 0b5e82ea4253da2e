//! Interface members.
//!
//! A member is tried as, in order: const, iterable declaration
//! (`iterable`/`legacyiterable`/`maplike`/`setlike`), serializer, attribute,
//! operation. Operation is the catch-all: anything else must start with a
//! return type.

mod attribute;
mod constant;
mod iterable;
mod operation;
mod serializer;

use widl_ir::Member;

use crate::{PResult, Parser};

impl Parser<'_> {
    pub(crate) fn parse_interface_member(&mut self) -> PResult<Member> {
        if let Some(constant) = self.parse_const()? {
            return Ok(Member::Const(constant));
        }
        if let Some(iterable) = self.parse_iterable()? {
            return Ok(Member::Iterable(iterable));
        }
        if let Some(serializer) = self.parse_serializer()? {
            return Ok(Member::Serializer(serializer));
        }
        if let Some(attribute) = self.parse_attribute()? {
            return Ok(Member::Attribute(attribute));
        }
        self.parse_operation()
    }
}

#[cfg(test)]
mod tests;
