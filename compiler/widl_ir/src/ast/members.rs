//! Members of interfaces, dictionaries and exceptions.

use super::{Argument, ExtendedAttribute, IdlType, Literal};

/// `[static | stringifier] [inherit] [readonly] attribute Type name;`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Attribute {
    pub extended_attributes: Vec<ExtendedAttribute>,
    pub is_static: bool,
    pub stringifier: bool,
    pub inherit: bool,
    pub readonly: bool,
    pub idl_type: IdlType,
    pub name: String,
}

/// Special operation keyword.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Special {
    Getter,
    Setter,
    Creator,
    Deleter,
    LegacyCaller,
}

impl Special {
    pub const ALL: [Special; 5] = [
        Special::Getter,
        Special::Setter,
        Special::Creator,
        Special::Deleter,
        Special::LegacyCaller,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Special::Getter => "getter",
            Special::Setter => "setter",
            Special::Creator => "creator",
            Special::Deleter => "deleter",
            Special::LegacyCaller => "legacycaller",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Special> {
        Special::ALL.into_iter().find(|s| s.keyword() == keyword)
    }
}

/// Regular, special, static or stringifier operation.
///
/// `specials` keeps the modifiers in the order they were written. A bare
/// `stringifier;` has `return_type == None` and no argument list.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Operation {
    pub extended_attributes: Vec<ExtendedAttribute>,
    pub specials: Vec<Special>,
    pub is_static: bool,
    pub stringifier: bool,
    pub return_type: Option<IdlType>,
    pub name: Option<String>,
    pub arguments: Vec<Argument>,
}

impl Operation {
    pub fn has_special(&self, special: Special) -> bool {
        self.specials.contains(&special)
    }

    pub fn is_getter(&self) -> bool {
        self.has_special(Special::Getter)
    }

    pub fn is_setter(&self) -> bool {
        self.has_special(Special::Setter)
    }

    pub fn is_creator(&self) -> bool {
        self.has_special(Special::Creator)
    }

    pub fn is_deleter(&self) -> bool {
        self.has_special(Special::Deleter)
    }

    pub fn is_legacy_caller(&self) -> bool {
        self.has_special(Special::LegacyCaller)
    }

    /// `stringifier;` with nothing else.
    pub fn is_bare_stringifier(&self) -> bool {
        self.stringifier && self.return_type.is_none()
    }
}

/// What follows `iterator` in an iterator member.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum IteratorObject {
    /// `iterator object;`
    Object,
    /// `iterator = Name;`
    Named(String),
}

/// `ReturnType iterator [object | = Name];`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IteratorMember {
    pub extended_attributes: Vec<ExtendedAttribute>,
    pub return_type: IdlType,
    pub object: Option<IteratorObject>,
}

/// `const Type name = value;`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Const {
    pub extended_attributes: Vec<ExtendedAttribute>,
    /// Primitive or identifier type, possibly nullable; never an array.
    pub idl_type: IdlType,
    pub name: String,
    pub value: Literal,
}

/// Dictionary member or exception field.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Field {
    pub extended_attributes: Vec<ExtendedAttribute>,
    pub required: bool,
    pub idl_type: IdlType,
    pub name: String,
    pub default: Option<Literal>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum IterableKind {
    Iterable,
    LegacyIterable,
    Maplike,
    Setlike,
}

impl IterableKind {
    pub fn keyword(self) -> &'static str {
        match self {
            IterableKind::Iterable => "iterable",
            IterableKind::LegacyIterable => "legacyiterable",
            IterableKind::Maplike => "maplike",
            IterableKind::Setlike => "setlike",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<IterableKind> {
        match keyword {
            "iterable" => Some(IterableKind::Iterable),
            "legacyiterable" => Some(IterableKind::LegacyIterable),
            "maplike" => Some(IterableKind::Maplike),
            "setlike" => Some(IterableKind::Setlike),
            _ => None,
        }
    }

    /// Only maplike and setlike accept a `readonly` prefix.
    pub fn allows_readonly(self) -> bool {
        matches!(self, IterableKind::Maplike | IterableKind::Setlike)
    }

    pub fn allows_second_type(self) -> bool {
        matches!(self, IterableKind::Iterable | IterableKind::Maplike)
    }

    pub fn requires_second_type(self) -> bool {
        self == IterableKind::Maplike
    }
}

/// `[readonly] iterable<T[, U]>;` and friends.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Iterable {
    pub extended_attributes: Vec<ExtendedAttribute>,
    pub kind: IterableKind,
    pub readonly: bool,
    /// One or two type arguments.
    pub type_arguments: Vec<IdlType>,
}

/// Body of a serializer member.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum SerializerKind {
    /// `serializer;`
    Bare,
    /// `serializer = { ... };`
    PatternMap(Vec<String>),
    /// `serializer = [ ... ];`
    PatternList(Vec<String>),
    /// `serializer = name;`
    Named(String),
    /// `serializer Type name(args);`
    Operation {
        return_type: IdlType,
        name: Option<String>,
        arguments: Vec<Argument>,
    },
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Serializer {
    pub extended_attributes: Vec<ExtendedAttribute>,
    pub kind: SerializerKind,
}

/// A member of an interface, dictionary or exception.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Member {
    Attribute(Attribute),
    Operation(Operation),
    Iterator(IteratorMember),
    Const(Const),
    Field(Field),
    Iterable(Iterable),
    Serializer(Serializer),
}

impl Member {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Member::Attribute(_) => "attribute",
            Member::Operation(_) => "operation",
            Member::Iterator(_) => "iterator",
            Member::Const(_) => "const",
            Member::Field(_) => "field",
            Member::Iterable(i) => i.kind.keyword(),
            Member::Serializer(_) => "serializer",
        }
    }

    /// Member name where the grammar gives it one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Member::Attribute(a) => Some(&a.name),
            Member::Operation(o) => o.name.as_deref(),
            Member::Const(c) => Some(&c.name),
            Member::Field(f) => Some(&f.name),
            Member::Serializer(Serializer {
                kind: SerializerKind::Operation { name, .. },
                ..
            }) => name.as_deref(),
            Member::Iterator(_) | Member::Iterable(_) | Member::Serializer(_) => None,
        }
    }

    pub fn extended_attributes(&self) -> &[ExtendedAttribute] {
        match self {
            Member::Attribute(m) => &m.extended_attributes,
            Member::Operation(m) => &m.extended_attributes,
            Member::Iterator(m) => &m.extended_attributes,
            Member::Const(m) => &m.extended_attributes,
            Member::Field(m) => &m.extended_attributes,
            Member::Iterable(m) => &m.extended_attributes,
            Member::Serializer(m) => &m.extended_attributes,
        }
    }

    pub fn extended_attributes_mut(&mut self) -> &mut Vec<ExtendedAttribute> {
        match self {
            Member::Attribute(m) => &mut m.extended_attributes,
            Member::Operation(m) => &mut m.extended_attributes,
            Member::Iterator(m) => &mut m.extended_attributes,
            Member::Const(m) => &mut m.extended_attributes,
            Member::Field(m) => &mut m.extended_attributes,
            Member::Iterable(m) => &mut m.extended_attributes,
            Member::Serializer(m) => &mut m.extended_attributes,
        }
    }
}
