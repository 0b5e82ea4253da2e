//! Extended attributes and argument lists.

use widl_ir::{Argument, ExtAttrRhs, ExtendedAttribute};

use crate::declarations::DocumentWriter;

impl DocumentWriter<'_> {
    /// `[A, B=x, C=(y, z), D(args), E(K, V)]`
    pub(crate) fn write_extended_attributes(&mut self, attrs: &[ExtendedAttribute]) {
        self.ctx.token("[");
        for (i, attr) in attrs.iter().enumerate() {
            if i > 0 {
                self.ctx.token(",");
                self.ctx.space();
            }
            self.write_extended_attribute(attr);
        }
        self.ctx.token("]");
    }

    fn write_extended_attribute(&mut self, attr: &ExtendedAttribute) {
        self.ctx.token(&attr.name);
        match &attr.rhs {
            Some(ExtAttrRhs::Identifier(name)) => {
                self.ctx.token("=");
                self.ctx.token(name);
            }
            Some(ExtAttrRhs::IdentifierList(names)) => {
                self.ctx.token("=");
                self.ctx.token("(");
                self.write_comma_separated(names);
                self.ctx.token(")");
            }
            None => {}
        }
        if let Some(arguments) = &attr.arguments {
            self.write_argument_list(arguments);
        } else if let Some((first, second)) = &attr.type_pair {
            self.ctx.token("(");
            self.write_type(first);
            self.ctx.token(",");
            self.ctx.space();
            self.write_type(second);
            self.ctx.token(")");
        }
    }

    fn write_comma_separated(&mut self, names: &[String]) {
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                self.ctx.token(",");
                self.ctx.space();
            }
            self.ctx.token(name);
        }
    }

    /// `(a, b)`
    pub(crate) fn write_argument_list(&mut self, arguments: &[Argument]) {
        self.ctx.token("(");
        for (i, argument) in arguments.iter().enumerate() {
            if i > 0 {
                self.ctx.token(",");
                self.ctx.space();
            }
            self.write_argument(argument);
        }
        self.ctx.token(")");
    }

    fn write_argument(&mut self, argument: &Argument) {
        if !argument.extended_attributes.is_empty() {
            self.write_extended_attributes(&argument.extended_attributes);
            self.ctx.space();
        }
        if argument.optional {
            self.ctx.token("optional");
            self.ctx.space();
        }
        self.write_type(&argument.idl_type);
        if argument.variadic {
            for _ in 0..3 {
                self.ctx.token(".");
            }
        }
        self.ctx.space();
        self.ctx.token(&argument.name);
        if let Some(default) = &argument.default {
            self.write_default(default);
        }
    }
}
