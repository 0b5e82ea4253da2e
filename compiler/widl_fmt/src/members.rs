//! Member Writing
//!
//! One method per member kind. Modifiers are written in the order the
//! parser accepts them, which for a parsed tree is also source order.

use widl_ir::{
    Argument, Attribute, Const, Field, Iterable, IteratorMember, IteratorObject, Member, Operation,
    Serializer, SerializerKind,
};

use crate::declarations::DocumentWriter;

impl DocumentWriter<'_> {
    pub(crate) fn write_member(&mut self, member: &Member) {
        let attrs = member.extended_attributes();
        if !attrs.is_empty() {
            self.write_extended_attributes(attrs);
            self.ctx.space();
        }
        match member {
            Member::Attribute(attribute) => self.write_attribute(attribute),
            Member::Operation(operation) => self.write_operation(operation),
            Member::Iterator(iterator) => self.write_iterator(iterator),
            Member::Const(constant) => self.write_const(constant),
            Member::Field(field) => self.write_field(field),
            Member::Iterable(iterable) => self.write_iterable(iterable),
            Member::Serializer(serializer) => self.write_serializer(serializer),
        }
    }

    /// Emit `word` followed by a pending space.
    fn keyword(&mut self, word: &str) {
        self.ctx.token(word);
        self.ctx.space();
    }

    fn write_attribute(&mut self, attribute: &Attribute) {
        if attribute.is_static {
            self.keyword("static");
        }
        if attribute.stringifier {
            self.keyword("stringifier");
        }
        if attribute.inherit {
            self.keyword("inherit");
        }
        if attribute.readonly {
            self.keyword("readonly");
        }
        self.keyword("attribute");
        self.write_type(&attribute.idl_type);
        self.ctx.space();
        self.ctx.token(&attribute.name);
        self.ctx.token(";");
    }

    fn write_operation(&mut self, operation: &Operation) {
        for special in &operation.specials {
            self.keyword(special.keyword());
        }
        if operation.is_static {
            self.keyword("static");
        }
        if operation.stringifier {
            if operation.return_type.is_none() {
                self.ctx.token("stringifier");
                self.ctx.token(";");
                return;
            }
            self.keyword("stringifier");
        }
        if let Some(return_type) = &operation.return_type {
            self.write_type(return_type);
        }
        self.write_operation_rest(operation.name.as_deref(), &operation.arguments);
    }

    /// ` name(args);` or ` (args);` after a return type.
    fn write_operation_rest(&mut self, name: Option<&str>, arguments: &[Argument]) {
        self.ctx.space();
        if let Some(name) = name {
            self.ctx.token(name);
        }
        self.write_argument_list(arguments);
        self.ctx.token(";");
    }

    fn write_iterator(&mut self, iterator: &IteratorMember) {
        self.write_type(&iterator.return_type);
        self.ctx.space();
        self.ctx.token("iterator");
        match &iterator.object {
            Some(IteratorObject::Object) => {
                self.ctx.space();
                self.ctx.token("object");
            }
            Some(IteratorObject::Named(name)) => {
                self.ctx.space();
                self.ctx.token("=");
                self.ctx.space();
                self.ctx.token(name);
            }
            None => {}
        }
        self.ctx.token(";");
    }

    fn write_const(&mut self, constant: &Const) {
        self.keyword("const");
        self.write_type(&constant.idl_type);
        self.ctx.space();
        self.ctx.token(&constant.name);
        self.ctx.space();
        self.ctx.token("=");
        self.ctx.space();
        self.write_literal(&constant.value);
        self.ctx.token(";");
    }

    fn write_field(&mut self, field: &Field) {
        if field.required {
            self.keyword("required");
        }
        self.write_type(&field.idl_type);
        self.ctx.space();
        self.ctx.token(&field.name);
        if let Some(default) = &field.default {
            self.write_default(default);
        }
        self.ctx.token(";");
    }

    fn write_iterable(&mut self, iterable: &Iterable) {
        if iterable.readonly {
            self.keyword("readonly");
        }
        self.ctx.token(iterable.kind.keyword());
        self.ctx.token("<");
        for (i, ty) in iterable.type_arguments.iter().enumerate() {
            if i > 0 {
                self.ctx.token(",");
                self.ctx.space();
            }
            self.write_type(ty);
        }
        self.ctx.token(">");
        self.ctx.token(";");
    }

    fn write_serializer(&mut self, serializer: &Serializer) {
        self.ctx.token("serializer");
        match &serializer.kind {
            SerializerKind::Bare => {}
            SerializerKind::PatternMap(names) => {
                self.write_serializer_pattern("{", names, "}");
            }
            SerializerKind::PatternList(names) => {
                self.write_serializer_pattern("[", names, "]");
            }
            SerializerKind::Named(name) => {
                self.ctx.space();
                self.ctx.token("=");
                self.ctx.space();
                self.ctx.token(name);
            }
            SerializerKind::Operation {
                return_type,
                name,
                arguments,
            } => {
                self.ctx.space();
                self.write_type(return_type);
                self.write_operation_rest(name.as_deref(), arguments);
                return;
            }
        }
        self.ctx.token(";");
    }

    /// ` = { a, b }`
    fn write_serializer_pattern(&mut self, open: &str, names: &[String], close: &str) {
        self.ctx.space();
        self.ctx.token("=");
        self.ctx.space();
        self.ctx.token(open);
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                self.ctx.token(",");
            }
            self.ctx.space();
            self.ctx.token(name);
        }
        if !names.is_empty() {
            self.ctx.space();
        }
        self.ctx.token(close);
    }
}
