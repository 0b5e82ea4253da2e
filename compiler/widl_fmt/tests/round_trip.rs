//! Round-trip tests over hand-written IDL covering every definition and
//! member kind.
//!
//! For each source:
//! 1. Lossless: `write(parse(s, trivia)) == s`
//! 2. Structural idempotence: `parse(write(parse(s)))` equals `parse(s)`
//! 3. Canonical fixpoint: writing the canonical output again changes nothing

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use widl_fmt::{write, WriteOptions};
use widl_ir::Document;
use widl_parse::{parse, ParseOptions};

fn parse_plain(source: &str) -> Document {
    parse(source, ParseOptions::default())
        .unwrap_or_else(|e| panic!("failed to parse {source:?}: {e}"))
}

fn check(source: &str) {
    let options = WriteOptions::default();

    let lossless = parse(source, ParseOptions::default().with_trivia())
        .unwrap_or_else(|e| panic!("failed to parse {source:?}: {e}"));
    assert_eq!(write(&lossless, &options), source, "lossless round trip");

    let plain = parse_plain(source);
    assert_eq!(lossless.clone().without_trivia(), plain);

    let canonical = write(&plain, &options);
    let reparsed = parse_plain(&canonical);
    assert_eq!(reparsed, plain, "canonical output:\n{canonical}");
    assert_eq!(write(&reparsed, &options), canonical, "canonical fixpoint");
}

#[test]
fn empty_and_trivia_only() {
    check("");
    check("\n\n");
    check("// only a comment");
    check("/* block */\n// line\n");
}

#[test]
fn interfaces() {
    check("interface A {};");
    check("interface A : B {\n  attribute long x;\n};\n");
    check(
        "[Exposed=(Window,Worker), Constructor(DOMString url, optional long n = 0)]
interface   Request   :   Body {
    readonly  attribute  ByteString  method ;
    [SameObject] readonly attribute Headers headers;
    Promise<Response> fetch( optional RequestInit init );
};
",
    );
    check("partial interface Window { attribute EventHandler onload; };");
    check("callback interface EventListener {\n\tvoid handleEvent(Event event);\n};");
}

#[test]
fn attributes_and_operations() {
    check(
        "interface A {
  static attribute long s;
  stringifier attribute DOMString href;
  inherit readonly attribute long i;
  attribute (long or DOMString)? u;
  attribute long[]?[] a;
  getter DOMString (unsigned long index);
  setter creator void (DOMString name, any value);
  deleter void (DOMString name);
  legacycaller any (any... args);
  static Promise<void> resolve(optional any value);
  stringifier;
  stringifier DOMString toString();
  void noArgs();
  void withAttrs([Clamp] octet b, [EnforceRange] optional unsigned long long n = 0x1F);
};",
    );
}

#[test]
fn iterators_consts_iterables_serializers() {
    check(
        "interface A {
  Foo iterator;
  Foo iterator object;
  Foo iterator = Bar;
  const unsigned short ELEMENT_NODE = 1;
  const float F = -1.5e3;
  const double? NEG = - Infinity;
  const boolean B = true;
  const MyType? N = null;
  const double NOT_A_NUMBER = NaN;
  const long OCT = 017;
  iterable<DOMString>;
  iterable<DOMString, long>;
  legacyiterable<long>;
  readonly maplike<DOMString, sequence<long>>;
  setlike<long>;
  serializer;
  serializer = {};
  serializer = { getter };
  serializer = { inherit };
  serializer = { inherit, a, b };
  serializer = { a, b };
  serializer = [];
  serializer = [ getter ];
  serializer = [ a, b ];
  serializer = name;
  serializer DOMString serialize();
  serializer object (long depth);
};",
    );
}

#[test]
fn dictionaries_and_exceptions() {
    check(
        "dictionary Init : Base {
  required DOMString name;
  long count = 0;
  DOMString mode = \"cors\";
  sequence<DOMString> list = [];
  unrestricted double d = Infinity;
};
partial dictionary Init { boolean flag = false; };
exception NotFound : Error {
  const unsigned short CODE = 8;
  DOMString detail;
};",
    );
}

#[test]
fn enums_typedefs_implements_callbacks() {
    check("enum Mode { \"open\", \"closed\" };");
    check("enum Trailing {\n  \"a\",\n  \"b\",\n};");
    check("enum Empty {};");
    check("typedef unsigned long long Size;");
    check("typedef [Clamp] octet Byte;");
    check("typedef (ArrayBuffer or ArrayBufferView or Blob or DOMString)? BodyInit;");
    check("typedef sequence<(long or DOMString)?>[] Nested;");
    check("Window implements GlobalEventHandlers;");
    check("callback Handler = void (Event e);");
    check("callback Cmp = long (any a, any b);");
    check("[TreatNonObjectAsNull] callback EventHandlerNonNull = any (Event event);");
}

#[test]
fn extended_attribute_forms() {
    check(
        "[NoInterfaceObject, PutForwards=href, Exposed=(), Constructor(),
  MapClass(DOMString, long), NamedConstructor=Image(optional long w)]
interface X {};",
    );
}

#[test]
fn comments_everywhere() {
    check(
        "// Copyright header
/* Block
 * comment */
[Exposed=Window /* inline */] // after attrs
interface /* before name */ Foo /* before brace */ { // after brace
    // before member
    attribute /* type */ long /* name */ x /* semi */ ; // trailing
    void f(/* empty */);
    /* before close */
}/* before semi */; // after definition
// trailing comment without newline",
    );
}

#[test]
fn windows_line_endings() {
    check("interface A {\r\n  attribute long x;\r\n};\r\n");
}

#[test]
fn multi_word_types_keep_inner_spacing() {
    check("typedef unsigned   /* c */ long\n long T;");
    check("typedef unrestricted\tdouble D;");
}

#[test]
fn renamed_multi_word_type_drops_inner_trivia() {
    let source = "typedef unsigned   /* c */ long\n long T; // keep";
    let document = parse(source, ParseOptions::default().with_trivia()).unwrap();
    let rename = |name: &str| match name {
        "unsigned long long" => "u64".to_owned(),
        other => other.to_owned(),
    };
    let options = WriteOptions::default().with_type_name_formatter(&rename);
    assert_eq!(write(&document, &options), "typedef u64 T; // keep");
}
