//! Declaration Writing
//!
//! The document loop and one method per definition kind. Member bodies are
//! delegated to `members`.

use widl_ir::{
    Callback, Definition, Dictionary, Enum, Exception, Implements, Interface, Member, Trivia,
    Typedef,
};

use crate::context::WriteContext;
use crate::WriteOptions;

/// Writes a sequence of definitions into a string.
pub struct DocumentWriter<'a> {
    pub(crate) ctx: WriteContext<'a>,
}

impl<'a> DocumentWriter<'a> {
    pub fn new(trivia: &'a [Trivia], options: &WriteOptions<'a>) -> Self {
        DocumentWriter {
            ctx: WriteContext::new(trivia, options),
        }
    }

    /// Write definitions separated by blank lines.
    pub fn write_definitions(&mut self, definitions: &[Definition]) {
        for (i, definition) in definitions.iter().enumerate() {
            if i > 0 {
                self.ctx.blank_line();
            }
            self.write_definition(definition);
        }
    }

    pub fn finish(self) -> String {
        self.ctx.finish().output()
    }

    pub fn write_definition(&mut self, definition: &Definition) {
        let attrs = definition.extended_attributes();
        if !attrs.is_empty() {
            self.write_extended_attributes(attrs);
            self.ctx.line();
        }
        match definition {
            Definition::Interface(interface) => self.write_interface(interface),
            Definition::CallbackInterface(interface) => {
                self.ctx.token("callback");
                self.ctx.space();
                self.write_interface(interface);
            }
            Definition::Dictionary(dictionary) => self.write_dictionary(dictionary),
            Definition::Exception(exception) => self.write_exception(exception),
            Definition::Enum(enumeration) => self.write_enum(enumeration),
            Definition::Typedef(typedef) => self.write_typedef(typedef),
            Definition::Implements(implements) => self.write_implements(implements),
            Definition::Callback(callback) => self.write_callback(callback),
        }
    }

    fn write_interface(&mut self, interface: &Interface) {
        self.write_container(
            "interface",
            interface.partial,
            &interface.name,
            interface.inheritance.as_deref(),
            &interface.members,
        );
    }

    fn write_dictionary(&mut self, dictionary: &Dictionary) {
        self.write_container(
            "dictionary",
            dictionary.partial,
            &dictionary.name,
            dictionary.inheritance.as_deref(),
            &dictionary.members,
        );
    }

    fn write_exception(&mut self, exception: &Exception) {
        self.write_container(
            "exception",
            false,
            &exception.name,
            exception.inheritance.as_deref(),
            &exception.members,
        );
    }

    /// `[partial] keyword Name [: Parent] { members };`
    fn write_container(
        &mut self,
        keyword: &str,
        partial: bool,
        name: &str,
        inheritance: Option<&str>,
        members: &[Member],
    ) {
        if partial {
            self.ctx.token("partial");
            self.ctx.space();
        }
        self.ctx.token(keyword);
        self.ctx.space();
        self.ctx.token(name);
        if let Some(parent) = inheritance {
            self.ctx.space();
            self.ctx.token(":");
            self.ctx.space();
            self.ctx.token(parent);
        }
        self.ctx.space();
        self.ctx.token("{");

        self.ctx.indent();
        for member in members {
            self.ctx.line();
            self.write_member(member);
        }
        self.ctx.dedent();

        if !members.is_empty() {
            self.ctx.line();
        }
        self.ctx.token("}");
        self.ctx.token(";");
    }

    fn write_enum(&mut self, enumeration: &Enum) {
        self.ctx.token("enum");
        self.ctx.space();
        self.ctx.token(&enumeration.name);
        self.ctx.space();
        self.ctx.token("{");
        for (i, value) in enumeration.values.iter().enumerate() {
            if i > 0 {
                self.ctx.token(",");
            }
            self.ctx.space();
            self.write_string(value);
        }
        if enumeration.trailing_comma {
            self.ctx.token(",");
        }
        if !enumeration.values.is_empty() {
            self.ctx.space();
        }
        self.ctx.token("}");
        self.ctx.token(";");
    }

    fn write_typedef(&mut self, typedef: &Typedef) {
        self.ctx.token("typedef");
        self.ctx.space();
        if !typedef.type_extended_attributes.is_empty() {
            self.write_extended_attributes(&typedef.type_extended_attributes);
            self.ctx.space();
        }
        self.write_type(&typedef.idl_type);
        self.ctx.space();
        self.ctx.token(&typedef.name);
        self.ctx.token(";");
    }

    fn write_implements(&mut self, implements: &Implements) {
        self.ctx.token(&implements.target);
        self.ctx.space();
        self.ctx.token("implements");
        self.ctx.space();
        self.ctx.token(&implements.implements);
        self.ctx.token(";");
    }

    /// `callback Name = ReturnType (args);`
    fn write_callback(&mut self, callback: &Callback) {
        self.ctx.token("callback");
        self.ctx.space();
        self.ctx.token(&callback.name);
        self.ctx.space();
        self.ctx.token("=");
        self.ctx.space();
        self.write_type(&callback.return_type);
        self.ctx.space();
        self.write_argument_list(&callback.arguments);
        self.ctx.token(";");
    }
}
