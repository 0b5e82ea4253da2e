use widl_ir::{Argument, IdlType, IteratorMember, IteratorObject, Member, Operation, Special};

use crate::{PResult, Parser};

impl Parser<'_> {
    /// Operations and iterator members.
    ///
    /// ```text
    /// Operation = Special+ ReturnType Rest
    ///           | "static" ReturnType Rest
    ///           | "stringifier" ( ";" | ReturnType Rest )
    ///           | ReturnType ( Iterator | Rest )
    /// Rest      = [ Identifier ] "(" ArgumentList? ")" ";"
    /// Iterator  = "iterator" [ "object" | "=" Identifier ] ";"
    /// ```
    pub(crate) fn parse_operation(&mut self) -> PResult<Member> {
        let mut op = Operation {
            extended_attributes: Vec::new(),
            specials: Vec::new(),
            is_static: false,
            stringifier: false,
            return_type: None,
            name: None,
            arguments: Vec::new(),
        };

        while let Some(special) = self
            .cursor
            .current_identifier()
            .and_then(Special::from_keyword)
        {
            self.cursor.advance();
            op.specials.push(special);
        }

        if !op.specials.is_empty() {
            op.return_type = Some(self.parse_return_type()?);
        } else if self.cursor.eat_keyword("static") {
            op.is_static = true;
            op.return_type = Some(self.parse_return_type()?);
        } else if self.cursor.eat_keyword("stringifier") {
            op.stringifier = true;
            if self.cursor.eat_punct(";") {
                return Ok(Member::Operation(op));
            }
            op.return_type = Some(self.parse_return_type()?);
        } else {
            let return_type = self.parse_return_type()?;
            if self.cursor.eat_keyword("iterator") {
                return self.parse_iterator_rest(return_type).map(Member::Iterator);
            }
            op.return_type = Some(return_type);
        }

        let (name, arguments) = self.parse_operation_rest()?;
        op.name = name;
        op.arguments = arguments;
        Ok(Member::Operation(op))
    }

    /// `[name] (args);` after the return type.
    pub(crate) fn parse_operation_rest(&mut self) -> PResult<(Option<String>, Vec<Argument>)> {
        let name = self.cursor.eat_identifier().map(str::to_owned);
        if !self.cursor.eat_punct("(") {
            let message = if self.cursor.is_at_end() {
                "Unterminated operation"
            } else {
                "Invalid operation"
            };
            return Err(self.error(message));
        }
        let arguments = self.parse_parenthesized_arguments("Unterminated operation")?;
        self.expect_punct(";", "Unterminated operation")?;
        Ok((name, arguments))
    }

    fn parse_iterator_rest(&mut self, return_type: IdlType) -> PResult<IteratorMember> {
        let object = if self.cursor.eat_keyword("object") {
            Some(IteratorObject::Object)
        } else if self.cursor.eat_punct("=") {
            let name = self.expect_identifier("No right hand side in iterator")?;
            Some(IteratorObject::Named(name))
        } else {
            None
        };
        self.expect_punct(";", "Unterminated iterator")?;
        Ok(IteratorMember {
            extended_attributes: Vec::new(),
            return_type,
            object,
        })
    }
}
