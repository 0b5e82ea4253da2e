//! Type and literal writing.

use widl_ir::{IdlType, Literal, TypeBase};

use crate::declarations::DocumentWriter;

impl DocumentWriter<'_> {
    /// Base type, then one `[]` per array dimension (each preceded by `?`
    /// when that dimension is nullable), then the outer `?`.
    pub(crate) fn write_type(&mut self, ty: &IdlType) {
        match &ty.base {
            TypeBase::Named(name) => self.ctx.type_name(name),
            TypeBase::Generic { name, inner } => {
                self.ctx.token(name);
                self.ctx.token("<");
                self.write_type(inner);
                self.ctx.token(">");
            }
            TypeBase::Union(members) => {
                self.ctx.token("(");
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        self.ctx.space();
                        self.ctx.token("or");
                        self.ctx.space();
                    }
                    self.write_type(member);
                }
                self.ctx.token(")");
            }
        }
        for &nullable in &ty.array_nullability {
            if nullable {
                self.ctx.token("?");
            }
            self.ctx.token("[");
            self.ctx.token("]");
        }
        if ty.nullable {
            self.ctx.token("?");
        }
    }

    pub(crate) fn write_literal(&mut self, literal: &Literal) {
        match literal {
            Literal::Boolean(true) => self.ctx.token("true"),
            Literal::Boolean(false) => self.ctx.token("false"),
            Literal::Null => self.ctx.token("null"),
            Literal::Infinity { negative } => {
                if *negative {
                    self.ctx.token("-");
                }
                self.ctx.token("Infinity");
            }
            Literal::NaN => self.ctx.token("NaN"),
            Literal::Number(number) => self.ctx.token(number.raw()),
            Literal::String(value) => self.write_string(value),
            Literal::EmptySequence => {
                self.ctx.token("[");
                self.ctx.token("]");
            }
        }
    }

    /// ` = value`
    pub(crate) fn write_default(&mut self, default: &Literal) {
        self.ctx.space();
        self.ctx.token("=");
        self.ctx.space();
        self.write_literal(default);
    }

    pub(crate) fn write_string(&mut self, value: &str) {
        self.ctx.token(&format!("\"{value}\""));
    }
}
