//! Extended attributes and arguments.

use super::{IdlType, Literal};

/// Right-hand side of `[Name=...]`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExtAttrRhs {
    /// `[PutForwards=name]`
    Identifier(String),
    /// `[Exposed=(Window,Worker)]`
    IdentifierList(Vec<String>),
}

/// One entry of a bracketed extended attribute list.
///
/// `arguments` is `Some` whenever a parenthesised argument list was written,
/// so `[Constructor]` and `[Constructor()]` stay distinct. `type_pair` is
/// set instead of `arguments` for `[MapClass(DOMString, long)]`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ExtendedAttribute {
    pub name: String,
    pub arguments: Option<Vec<Argument>>,
    pub rhs: Option<ExtAttrRhs>,
    pub type_pair: Option<(IdlType, IdlType)>,
}

impl ExtendedAttribute {
    pub fn new(name: impl Into<String>) -> Self {
        ExtendedAttribute {
            name: name.into(),
            arguments: None,
            rhs: None,
            type_pair: None,
        }
    }
}

/// Operation, callback or constructor argument.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Argument {
    pub extended_attributes: Vec<ExtendedAttribute>,
    pub optional: bool,
    pub variadic: bool,
    pub idl_type: IdlType,
    pub name: String,
    pub default: Option<Literal>,
}

impl Argument {
    pub fn new(idl_type: IdlType, name: impl Into<String>) -> Self {
        Argument {
            extended_attributes: Vec::new(),
            optional: false,
            variadic: false,
            idl_type,
            name: name.into(),
            default: None,
        }
    }
}
