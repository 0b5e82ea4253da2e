#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use widl_ir::{Argument, IdlType, Literal};

use crate::Parser;

fn arguments(source: &str) -> Option<Vec<Argument>> {
    let tokens = widl_lexer::tokenize(source).expect("tokenizes");
    let mut parser = Parser::new(&tokens);
    let args = parser.parse_argument_list().expect("parses");
    assert!(parser.cursor.is_at_end(), "trailing tokens in {source:?}");
    args
}

fn one(source: &str) -> Argument {
    let mut args = arguments(source).expect("has arguments");
    assert_eq!(args.len(), 1);
    args.remove(0)
}

#[test]
fn plain_argument() {
    assert_eq!(one("long x"), Argument::new(IdlType::named("long"), "x"));
}

#[test]
fn optional_with_default() {
    let arg = one("optional long x = 5");
    assert!(arg.optional);
    assert_eq!(arg.default, Some(Literal::number("5")));
}

#[test]
fn optional_without_default() {
    let arg = one("optional DOMString s");
    assert!(arg.optional);
    assert_eq!(arg.default, None);
}

#[test]
fn lone_optional_is_not_an_argument() {
    let tokens = widl_lexer::tokenize("optional )").expect("tokenizes");
    let mut parser = Parser::new(&tokens);
    assert_eq!(parser.parse_argument().expect("no error"), None);
    assert!(parser.cursor.check_keyword("optional"));
}

#[test]
fn variadic() {
    let arg = one("long... rest");
    assert!(arg.variadic);
    assert_eq!(arg.name, "rest");
}

#[test]
fn separated_dots_are_not_variadic() {
    let tokens = widl_lexer::tokenize("long . .. rest").expect("tokenizes");
    let mut parser = Parser::new(&tokens);
    assert_eq!(parser.parse_argument().expect("no error"), None);
    assert!(parser.cursor.check_keyword("long"));
}

#[test]
fn optional_is_never_variadic() {
    let tokens = widl_lexer::tokenize("optional long... x").expect("tokenizes");
    assert_eq!(
        Parser::new(&tokens).parse_argument().expect("no error"),
        None
    );
}

#[test]
fn default_requires_optional() {
    let tokens = widl_lexer::tokenize("long x = 5").expect("tokenizes");
    let mut parser = Parser::new(&tokens);
    let arg = parser.parse_argument().expect("parses").expect("argument");
    assert_eq!(arg.default, None);
    assert!(parser.cursor.check_punct("="));
}

#[test]
fn argument_extended_attributes() {
    let arg = one("[Clamp] octet b");
    assert_eq!(arg.extended_attributes.len(), 1);
    assert_eq!(arg.extended_attributes[0].name, "Clamp");
}

#[test]
fn missing_name_rolls_back_attributes() {
    let tokens = widl_lexer::tokenize("[Clamp] long )").expect("tokenizes");
    let mut parser = Parser::new(&tokens);
    assert_eq!(parser.parse_argument().expect("no error"), None);
    assert!(parser.cursor.check_punct("["));
}

#[test]
fn several_arguments() {
    let args = arguments("long a, optional (A or B)? b, sequence<long>... c").expect("args");
    let names: Vec<_> = args.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert!(args[1].idl_type.is_union());
    assert!(args[2].variadic);
}

#[test]
fn empty_list_is_none() {
    let tokens = widl_lexer::tokenize(")").expect("tokenizes");
    assert_eq!(
        Parser::new(&tokens).parse_argument_list().expect("no error"),
        None
    );
}

#[test]
fn trailing_comma_is_error() {
    let tokens = widl_lexer::tokenize("long a, )").expect("tokenizes");
    let err = Parser::new(&tokens)
        .parse_argument_list()
        .expect_err("trailing comma");
    assert_eq!(err.message, "Trailing comma in arguments list");
}
