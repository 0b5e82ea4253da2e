//! Grammar Modules
//!
//! Each module extends `Parser` with methods for one group of productions:
//!
//! - [`ty`]: type expressions (primitives, generics, unions, `?` and `[]`)
//! - [`attr`]: extended attribute lists
//! - [`args`]: arguments and argument lists
//! - [`literal`]: const and default values
//! - [`item`]: top-level definitions
//! - [`member`]: interface members
//!
//! # Conventions
//!
//! - `parse_x` returns `PResult<Option<X>>` when `x` is optional at the call
//!   site: `Ok(None)` means the production does not start here and nothing
//!   was consumed.
//! - Once a production has committed (its leading keyword matched), a
//!   missing token is an immediate `Err`.

mod args;
mod attr;
mod item;
mod literal;
mod member;
mod ty;
