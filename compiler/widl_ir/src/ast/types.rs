//! Type expressions.

/// What a type is built from, before nullability and array suffixes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeBase {
    /// A primitive or named type. Multi-word primitives use single spaces:
    /// `"unsigned long long"`, `"unrestricted double"`.
    Named(String),
    /// `name<inner>`, e.g. `sequence<long>` or `Promise<void>`.
    Generic { name: String, inner: Box<IdlType> },
    /// `(A or B or ...)`, at least two alternatives.
    Union(Vec<IdlType>),
}

/// A type expression with its suffixes.
///
/// `array_nullability` has one entry per `[]` dimension, outermost first,
/// recording whether a `?` preceded that bracket pair. `nullable` is the
/// trailing `?` after the last dimension (or after the base when there are
/// no dimensions).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IdlType {
    pub base: TypeBase,
    pub nullable: bool,
    pub array_nullability: Vec<bool>,
}

impl IdlType {
    pub fn named(name: impl Into<String>) -> Self {
        IdlType::from_base(TypeBase::Named(name.into()))
    }

    pub fn generic(name: impl Into<String>, inner: IdlType) -> Self {
        IdlType::from_base(TypeBase::Generic {
            name: name.into(),
            inner: Box::new(inner),
        })
    }

    pub fn union(members: Vec<IdlType>) -> Self {
        IdlType::from_base(TypeBase::Union(members))
    }

    fn from_base(base: TypeBase) -> Self {
        IdlType {
            base,
            nullable: false,
            array_nullability: Vec::new(),
        }
    }

    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Append one `[]` dimension, moving the current nullability onto it.
    #[must_use]
    pub fn array_of(mut self) -> Self {
        self.array_nullability.push(self.nullable);
        self.nullable = false;
        self
    }

    /// Number of `[]` dimensions.
    #[inline]
    pub fn array(&self) -> usize {
        self.array_nullability.len()
    }

    /// `sequence<T>`, with or without suffixes.
    pub fn is_sequence(&self) -> bool {
        self.generic_name() == Some("sequence")
    }

    pub fn is_union(&self) -> bool {
        matches!(self.base, TypeBase::Union(_))
    }

    /// Name of the generic wrapper, if any.
    pub fn generic_name(&self) -> Option<&str> {
        match &self.base {
            TypeBase::Generic { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Base name for named types.
    pub fn name(&self) -> Option<&str> {
        match &self.base {
            TypeBase::Named(name) => Some(name),
            _ => None,
        }
    }

    /// Union alternatives, empty for non-union types.
    pub fn union_members(&self) -> &[IdlType] {
        match &self.base {
            TypeBase::Union(members) => members,
            _ => &[],
        }
    }
}
