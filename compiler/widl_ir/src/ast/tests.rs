use super::*;
use pretty_assertions::assert_eq;

#[test]
fn array_of_moves_nullability_onto_dimension() {
    let ty = IdlType::named("long").nullable().array_of().nullable().array_of();
    assert_eq!(ty.array(), 2);
    assert_eq!(ty.array_nullability, vec![true, true]);
    assert!(!ty.nullable);

    let ty = IdlType::named("long").array_of().nullable();
    assert_eq!(ty.array_nullability, vec![false]);
    assert!(ty.nullable);
}

#[test]
fn generic_accessors() {
    let seq = IdlType::generic("sequence", IdlType::named("DOMString"));
    assert!(seq.is_sequence());
    assert_eq!(seq.generic_name(), Some("sequence"));
    assert_eq!(seq.name(), None);

    let promise = IdlType::generic("Promise", IdlType::named("void"));
    assert!(!promise.is_sequence());
    assert_eq!(promise.generic_name(), Some("Promise"));
}

#[test]
fn union_members_in_order() {
    let ty = IdlType::union(vec![IdlType::named("A"), IdlType::named("B")]);
    assert!(ty.is_union());
    let names: Vec<_> = ty.union_members().iter().filter_map(IdlType::name).collect();
    assert_eq!(names, vec!["A", "B"]);
    assert!(IdlType::named("A").union_members().is_empty());
}

#[test]
fn number_values() {
    assert_eq!(Number::new("5").value(), 5.0);
    assert_eq!(Number::new("-7").value(), -7.0);
    assert_eq!(Number::new("0x1F").value(), 31.0);
    assert_eq!(Number::new("-0X10").value(), -16.0);
    assert_eq!(Number::new("017").value(), 15.0);
    assert_eq!(Number::new("0").value(), 0.0);
    assert_eq!(Number::new("1.5e2").value(), 150.0);
    assert_eq!(Number::new(".25").value(), 0.25);
    assert_eq!(Number::new("5").raw(), "5");
}

#[test]
fn special_keywords_round_trip() {
    for special in Special::ALL {
        assert_eq!(Special::from_keyword(special.keyword()), Some(special));
    }
    assert_eq!(Special::from_keyword("static"), None);
}

#[test]
fn iterable_kind_rules() {
    assert!(IterableKind::Maplike.requires_second_type());
    assert!(IterableKind::Iterable.allows_second_type());
    assert!(!IterableKind::Setlike.allows_second_type());
    assert!(IterableKind::Setlike.allows_readonly());
    assert!(!IterableKind::LegacyIterable.allows_readonly());
    assert_eq!(IterableKind::from_keyword("legacyiterable"), Some(IterableKind::LegacyIterable));
}

#[test]
fn definition_name_and_members() {
    let def = Definition::Implements(Implements {
        extended_attributes: Vec::new(),
        target: "Window".into(),
        implements: "Mixin".into(),
    });
    assert_eq!(def.name(), "Window");
    assert_eq!(def.kind_name(), "implements");
    assert!(def.members().is_empty());

    let iface = Definition::Interface(Interface {
        extended_attributes: Vec::new(),
        name: "Node".into(),
        partial: true,
        inheritance: None,
        members: vec![Member::Const(Const {
            extended_attributes: Vec::new(),
            idl_type: IdlType::named("short"),
            name: "ELEMENT_NODE".into(),
            value: Literal::number("1"),
        })],
    });
    assert!(iface.is_partial());
    assert_eq!(iface.members().len(), 1);
    assert_eq!(iface.members()[0].name(), Some("ELEMENT_NODE"));

    let doc = Document::new(vec![def, iface]);
    assert_eq!(doc.find("Node").map(Definition::kind_name), Some("interface"));
    assert!(!doc.has_trivia());
}

#[test]
fn suffixed_sequence_is_still_a_sequence() {
    let ty = IdlType::generic("sequence", IdlType::named("long"))
        .array_of()
        .nullable();
    assert!(ty.is_sequence());
    assert_eq!(ty.generic_name(), Some("sequence"));
    assert!(!IdlType::named("sequence").is_sequence());
}
