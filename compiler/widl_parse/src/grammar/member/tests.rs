#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use widl_ir::{
    Attribute, IdlType, IterableKind, IteratorObject, Literal, Member, SerializerKind, Special,
};

use crate::{PResult, Parser};

fn parse_member(source: &str) -> PResult<Member> {
    let tokens = widl_lexer::tokenize(source).expect("tokenizes");
    let mut parser = Parser::new(&tokens);
    let member = parser.parse_interface_member()?;
    assert!(parser.cursor.is_at_end(), "trailing tokens in {source:?}");
    Ok(member)
}

fn member(source: &str) -> Member {
    parse_member(source).expect("parses")
}

fn err(source: &str) -> String {
    parse_member(source).expect_err("should fail").message
}

// ─── Attributes ────────────────────────────────────────────────

#[test]
fn plain_attribute() {
    assert_eq!(
        member("attribute short foo;"),
        Member::Attribute(Attribute {
            extended_attributes: Vec::new(),
            is_static: false,
            stringifier: false,
            inherit: false,
            readonly: false,
            idl_type: IdlType::named("short"),
            name: "foo".to_string(),
        })
    );
}

#[test]
fn attribute_modifiers() {
    let Member::Attribute(a) = member("static readonly attribute long x;") else {
        panic!("expected attribute");
    };
    assert!(a.is_static && a.readonly && !a.inherit);

    let Member::Attribute(a) = member("inherit readonly attribute long x;") else {
        panic!("expected attribute");
    };
    assert!(a.inherit && a.readonly);

    let Member::Attribute(a) = member("stringifier attribute DOMString href;") else {
        panic!("expected attribute");
    };
    assert!(a.stringifier);
}

#[test]
fn attribute_errors() {
    assert_eq!(
        err("static inherit attribute long x;"),
        "Cannot have a static or stringifier inherit"
    );
    assert_eq!(
        err("attribute sequence<long> x;"),
        "Attributes cannot accept sequence types"
    );
    assert_eq!(err("attribute ;"), "No type in attribute");
    assert_eq!(err("attribute long;"), "No name in attribute");
    assert_eq!(err("attribute long x"), "Unterminated attribute");
}

// ─── Operations ────────────────────────────────────────────────

#[test]
fn shared_prefix_with_attribute() {
    let Member::Operation(op) = member("short foo();") else {
        panic!("expected operation");
    };
    assert_eq!(op.return_type, Some(IdlType::named("short")));
    assert_eq!(op.name.as_deref(), Some("foo"));
    assert!(op.arguments.is_empty());
}

#[test]
fn static_operation_after_attribute_rollback() {
    let Member::Operation(op) = member("static void reset(optional long n = 0);") else {
        panic!("expected operation");
    };
    assert!(op.is_static);
    assert_eq!(op.arguments[0].default, Some(Literal::number("0")));
}

#[test]
fn argument_default() {
    let Member::Operation(op) = member("void f(optional long x = 5);") else {
        panic!("expected operation");
    };
    assert_eq!(op.arguments.len(), 1);
    assert!(op.arguments[0].optional);
    assert_eq!(op.arguments[0].default, Some(Literal::number("5")));
    assert_eq!(
        op.arguments[0]
            .default
            .as_ref()
            .map(|d| matches!(d, Literal::Number(n) if (n.value() - 5.0).abs() < f64::EPSILON)),
        Some(true)
    );
}

#[test]
fn specials_in_source_order() {
    let Member::Operation(op) = member("setter creator void (DOMString name, any value);") else {
        panic!("expected operation");
    };
    assert_eq!(op.specials, vec![Special::Setter, Special::Creator]);
    assert!(op.is_setter() && op.is_creator() && !op.is_getter());
    assert_eq!(op.name, None);
    assert_eq!(op.arguments.len(), 2);
}

#[test]
fn bare_stringifier() {
    let Member::Operation(op) = member("stringifier;") else {
        panic!("expected operation");
    };
    assert!(op.is_bare_stringifier());
}

#[test]
fn stringifier_with_type() {
    let Member::Operation(op) = member("stringifier DOMString name();") else {
        panic!("expected operation");
    };
    assert!(op.stringifier);
    assert_eq!(op.return_type, Some(IdlType::named("DOMString")));
}

#[test]
fn operation_errors() {
    assert_eq!(err("long x"), "Unterminated operation");
    assert_eq!(err("long x;"), "Invalid operation");
    assert_eq!(err("long x(;"), "Unterminated operation");
    assert_eq!(err("long x()"), "Unterminated operation");
    assert_eq!(err(";"), "No return type");
    assert_eq!(err("getter ;"), "No return type");
}

// ─── Iterators ─────────────────────────────────────────────────

#[test]
fn iterator_members() {
    let Member::Iterator(it) = member("Foo iterator;") else {
        panic!("expected iterator");
    };
    assert_eq!(it.return_type, IdlType::named("Foo"));
    assert_eq!(it.object, None);

    let Member::Iterator(it) = member("Foo iterator object;") else {
        panic!("expected iterator");
    };
    assert_eq!(it.object, Some(IteratorObject::Object));

    let Member::Iterator(it) = member("Foo iterator = Bar;") else {
        panic!("expected iterator");
    };
    assert_eq!(it.object, Some(IteratorObject::Named("Bar".to_string())));
}

#[test]
fn iterator_errors() {
    assert_eq!(err("Foo iterator ="), "No right hand side in iterator");
    assert_eq!(err("Foo iterator object"), "Unterminated iterator");
}

// ─── Consts ────────────────────────────────────────────────────

#[test]
fn consts() {
    let Member::Const(c) = member("const unsigned short ELEMENT_NODE = 1;") else {
        panic!("expected const");
    };
    assert_eq!(c.idl_type, IdlType::named("unsigned short"));
    assert_eq!(c.value, Literal::number("1"));

    let Member::Const(c) = member("const double? NEG = -Infinity;") else {
        panic!("expected const");
    };
    assert!(c.idl_type.nullable);
    assert_eq!(c.value, Literal::Infinity { negative: true });

    let Member::Const(c) = member("const MyType T = true;") else {
        panic!("expected const");
    };
    assert_eq!(c.idl_type, IdlType::named("MyType"));
}

#[test]
fn const_errors() {
    assert_eq!(err("const ;"), "No type for const");
    assert_eq!(err("const long = 1;"), "No name for const");
    assert_eq!(err("const long X 1;"), "No value assignment for const");
    assert_eq!(err("const long X = ;"), "No value for const");
    assert_eq!(err("const long X = 1"), "Unterminated const");
}

// ─── Iterable family ───────────────────────────────────────────

#[test]
fn iterable_declarations() {
    let Member::Iterable(it) = member("iterable<DOMString, long>;") else {
        panic!("expected iterable");
    };
    assert_eq!(it.kind, IterableKind::Iterable);
    assert_eq!(it.type_arguments.len(), 2);

    let Member::Iterable(it) = member("readonly maplike<DOMString, Foo>;") else {
        panic!("expected maplike");
    };
    assert!(it.readonly);
    assert_eq!(it.kind, IterableKind::Maplike);

    let Member::Iterable(it) = member("setlike<long>;") else {
        panic!("expected setlike");
    };
    assert_eq!(it.type_arguments, vec![IdlType::named("long")]);

    let Member::Iterable(it) = member("legacyiterable<long>;") else {
        panic!("expected legacyiterable");
    };
    assert_eq!(it.kind, IterableKind::LegacyIterable);
}

#[test]
fn readonly_attribute_is_not_iterable() {
    let Member::Attribute(a) = member("readonly attribute long length;") else {
        panic!("expected attribute");
    };
    assert!(a.readonly);
}

#[test]
fn iterable_errors() {
    assert_eq!(
        err("maplike<long>;"),
        "Missing second type argument in maplike declaration"
    );
    assert_eq!(err("iterable<long,>;"), "Error parsing iterable declaration");
    assert_eq!(err("iterable;"), "Error parsing iterable declaration");
    assert_eq!(err("setlike<long, long>;"), "Unterminated setlike declaration");
    assert_eq!(err("setlike<long>"), "Missing semicolon after setlike declaration");
}

// ─── Serializers ───────────────────────────────────────────────

fn serializer_kind(source: &str) -> SerializerKind {
    match member(source) {
        Member::Serializer(s) => s.kind,
        other => panic!("expected serializer, got {other:?}"),
    }
}

#[test]
fn serializer_forms() {
    assert_eq!(serializer_kind("serializer;"), SerializerKind::Bare);
    assert_eq!(
        serializer_kind("serializer = { getter };"),
        SerializerKind::PatternMap(vec!["getter".into()])
    );
    assert_eq!(
        serializer_kind("serializer = { inherit, a, b };"),
        SerializerKind::PatternMap(vec!["inherit".into(), "a".into(), "b".into()])
    );
    assert_eq!(
        serializer_kind("serializer = {};"),
        SerializerKind::PatternMap(Vec::new())
    );
    assert_eq!(
        serializer_kind("serializer = [ a, b ];"),
        SerializerKind::PatternList(vec!["a".into(), "b".into()])
    );
    assert_eq!(
        serializer_kind("serializer = name;"),
        SerializerKind::Named("name".into())
    );
    assert!(matches!(
        serializer_kind("serializer DOMString serialize();"),
        SerializerKind::Operation { name: Some(n), .. } if n == "serialize"
    ));
}

#[test]
fn serializer_errors() {
    assert_eq!(err("serializer = { a"), "Unterminated serializer pattern map");
    assert_eq!(err("serializer = { inherit, };"), "Unterminated serializer pattern map");
    assert_eq!(err("serializer = [ a;"), "Unterminated serializer pattern list");
    assert_eq!(err("serializer = ;"), "Invalid serializer");
    assert_eq!(err("serializer = a"), "No semicolon after serializer");
}
