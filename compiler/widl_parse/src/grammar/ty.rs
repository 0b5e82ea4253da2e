//! Type parsing.
//!
//! ```text
//! Type        = SingleType | UnionType
//! SingleType  = (Primitive | Identifier [ "<" Type ">" ]) Suffix*
//! UnionType   = "(" Type ( "or" Type )* ")" Suffix*
//! Suffix      = "?" | "[" "]"
//! ```

use widl_ir::IdlType;

use crate::{PResult, Parser};

impl Parser<'_> {
    /// Parse a type, `Ok(None)` if no type starts here.
    pub(crate) fn parse_type(&mut self) -> PResult<Option<IdlType>> {
        if let Some(ty) = self.parse_single_type()? {
            return Ok(Some(ty));
        }
        self.parse_union_type()
    }

    /// A type in return position. `void` is read as an ordinary named type.
    pub(crate) fn parse_return_type(&mut self) -> PResult<IdlType> {
        match self.parse_type()? {
            Some(ty) => Ok(ty),
            None => Err(self.error("No return type")),
        }
    }

    /// Integer, float and the one-word primitives, as their canonical
    /// single-spaced names.
    pub(crate) fn parse_primitive_type(&mut self) -> PResult<Option<String>> {
        let unsigned = self.cursor.eat_keyword("unsigned");
        if self.cursor.eat_keyword("short") {
            return Ok(Some(prefixed(unsigned, "unsigned", "short")));
        }
        if self.cursor.eat_keyword("long") {
            let base = if self.cursor.eat_keyword("long") {
                "long long"
            } else {
                "long"
            };
            return Ok(Some(prefixed(unsigned, "unsigned", base)));
        }
        if unsigned {
            return Err(self.error("Failed to parse integer type"));
        }

        let unrestricted = self.cursor.eat_keyword("unrestricted");
        for name in ["float", "double"] {
            if self.cursor.eat_keyword(name) {
                return Ok(Some(prefixed(unrestricted, "unrestricted", name)));
            }
        }
        if unrestricted {
            return Err(self.error("Failed to parse float type"));
        }

        for name in ["boolean", "byte", "octet"] {
            if self.cursor.eat_keyword(name) {
                return Ok(Some(name.to_owned()));
            }
        }
        Ok(None)
    }

    fn parse_single_type(&mut self) -> PResult<Option<IdlType>> {
        let mut ty = if let Some(name) = self.parse_primitive_type()? {
            IdlType::named(name)
        } else if let Some(name) = self.cursor.eat_identifier() {
            if self.cursor.eat_punct("<") {
                let Some(inner) = self.parse_type()? else {
                    return Err(self.error(format!("Error parsing generic type {name}")));
                };
                if !self.cursor.eat_punct(">") {
                    return Err(self.error(format!("Unterminated generic type {name}")));
                }
                IdlType::generic(name, inner)
            } else {
                IdlType::named(name)
            }
        } else {
            return Ok(None);
        };

        self.parse_type_suffix(&mut ty)?;
        if ty.nullable && ty.array() == 0 && ty.name() == Some("any") {
            return Err(self.error("Type any cannot be made nullable"));
        }
        Ok(Some(ty))
    }

    fn parse_union_type(&mut self) -> PResult<Option<IdlType>> {
        if !self.cursor.eat_punct("(") {
            return Ok(None);
        }
        let Some(first) = self.parse_type()? else {
            return Err(self.error("Union type with no content"));
        };
        let mut members = vec![first];
        while self.cursor.eat_keyword("or") {
            match self.parse_type()? {
                Some(ty) => members.push(ty),
                None => return Err(self.error("No type after 'or' in union type")),
            }
        }
        if !self.cursor.eat_punct(")") {
            return Err(self.error("Unterminated union type"));
        }

        let mut ty = IdlType::union(members);
        self.parse_type_suffix(&mut ty)?;
        Ok(Some(ty))
    }

    /// `?` and `[]` in any order. Each `[]` records the nullability the type
    /// had up to that point and starts the next dimension non-nullable.
    fn parse_type_suffix(&mut self, ty: &mut IdlType) -> PResult<()> {
        loop {
            if self.cursor.eat_punct("?") {
                if ty.nullable {
                    return Err(self.error("Can't nullable more than once"));
                }
                ty.nullable = true;
            } else if self.cursor.eat_punct("[") {
                if !self.cursor.eat_punct("]") {
                    return Err(self.error("Unterminated array type"));
                }
                ty.array_nullability.push(ty.nullable);
                ty.nullable = false;
            } else {
                return Ok(());
            }
        }
    }
}

fn prefixed(flag: bool, prefix: &str, name: &str) -> String {
    if flag {
        format!("{prefix} {name}")
    } else {
        name.to_owned()
    }
}
