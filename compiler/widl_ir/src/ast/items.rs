//! Top-level definitions.

use super::{Argument, ExtendedAttribute, IdlType, Member};

/// `interface`, `partial interface` or `callback interface` body.
///
/// Partial interfaces never carry `inheritance`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Interface {
    pub extended_attributes: Vec<ExtendedAttribute>,
    pub name: String,
    pub partial: bool,
    pub inheritance: Option<String>,
    pub members: Vec<Member>,
}

/// `dictionary` or `partial dictionary`. Members are always `Member::Field`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Dictionary {
    pub extended_attributes: Vec<ExtendedAttribute>,
    pub name: String,
    pub partial: bool,
    pub inheritance: Option<String>,
    pub members: Vec<Member>,
}

/// `exception`. Members are `Member::Const` or `Member::Field`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Exception {
    pub extended_attributes: Vec<ExtendedAttribute>,
    pub name: String,
    pub inheritance: Option<String>,
    pub members: Vec<Member>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Enum {
    pub extended_attributes: Vec<ExtendedAttribute>,
    pub name: String,
    /// Values without their quotes.
    pub values: Vec<String>,
    pub trailing_comma: bool,
}

/// `typedef [TypeAttrs] Type Name;`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Typedef {
    pub extended_attributes: Vec<ExtendedAttribute>,
    /// Attributes written between `typedef` and the type.
    pub type_extended_attributes: Vec<ExtendedAttribute>,
    pub idl_type: IdlType,
    pub name: String,
}

/// `Target implements Mixin;`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Implements {
    pub extended_attributes: Vec<ExtendedAttribute>,
    pub target: String,
    pub implements: String,
}

/// `callback Name = ReturnType (args);`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Callback {
    pub extended_attributes: Vec<ExtendedAttribute>,
    pub name: String,
    pub return_type: IdlType,
    pub arguments: Vec<Argument>,
}

/// A top-level definition.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Definition {
    Interface(Interface),
    CallbackInterface(Interface),
    Dictionary(Dictionary),
    Exception(Exception),
    Enum(Enum),
    Typedef(Typedef),
    Implements(Implements),
    Callback(Callback),
}

impl Definition {
    /// Kind tag as written in the grammar.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Definition::Interface(_) => "interface",
            Definition::CallbackInterface(_) => "callback interface",
            Definition::Dictionary(_) => "dictionary",
            Definition::Exception(_) => "exception",
            Definition::Enum(_) => "enum",
            Definition::Typedef(_) => "typedef",
            Definition::Implements(_) => "implements",
            Definition::Callback(_) => "callback",
        }
    }

    /// Defined name; the target for `implements` statements.
    pub fn name(&self) -> &str {
        match self {
            Definition::Interface(i) | Definition::CallbackInterface(i) => &i.name,
            Definition::Dictionary(d) => &d.name,
            Definition::Exception(e) => &e.name,
            Definition::Enum(e) => &e.name,
            Definition::Typedef(t) => &t.name,
            Definition::Implements(i) => &i.target,
            Definition::Callback(c) => &c.name,
        }
    }

    pub fn extended_attributes(&self) -> &[ExtendedAttribute] {
        match self {
            Definition::Interface(i) | Definition::CallbackInterface(i) => &i.extended_attributes,
            Definition::Dictionary(d) => &d.extended_attributes,
            Definition::Exception(e) => &e.extended_attributes,
            Definition::Enum(e) => &e.extended_attributes,
            Definition::Typedef(t) => &t.extended_attributes,
            Definition::Implements(i) => &i.extended_attributes,
            Definition::Callback(c) => &c.extended_attributes,
        }
    }

    /// Mutable access used by the parser to attach attributes read before
    /// the definition keyword.
    pub fn extended_attributes_mut(&mut self) -> &mut Vec<ExtendedAttribute> {
        match self {
            Definition::Interface(i) | Definition::CallbackInterface(i) => {
                &mut i.extended_attributes
            }
            Definition::Dictionary(d) => &mut d.extended_attributes,
            Definition::Exception(e) => &mut e.extended_attributes,
            Definition::Enum(e) => &mut e.extended_attributes,
            Definition::Typedef(t) => &mut t.extended_attributes,
            Definition::Implements(i) => &mut i.extended_attributes,
            Definition::Callback(c) => &mut c.extended_attributes,
        }
    }

    /// Inherited name, for the kinds that support inheritance.
    pub fn inheritance(&self) -> Option<&str> {
        match self {
            Definition::Interface(i) | Definition::CallbackInterface(i) => i.inheritance.as_deref(),
            Definition::Dictionary(d) => d.inheritance.as_deref(),
            Definition::Exception(e) => e.inheritance.as_deref(),
            _ => None,
        }
    }

    pub fn is_partial(&self) -> bool {
        match self {
            Definition::Interface(i) => i.partial,
            Definition::Dictionary(d) => d.partial,
            _ => false,
        }
    }

    /// Members of container kinds; empty for the others.
    pub fn members(&self) -> &[Member] {
        match self {
            Definition::Interface(i) | Definition::CallbackInterface(i) => &i.members,
            Definition::Dictionary(d) => &d.members,
            Definition::Exception(e) => &e.members,
            _ => &[],
        }
    }
}
