//! End-to-end conformance tests exercising the compiler and evaluator
//! together, translated from representative cases of the official
//! JSON-Schema-Test-Suite draft-07 fixtures plus the universal properties
//! this core is expected to uphold.
use jsonschema_core::{compile, CompileOptions};
use serde_json::json;

#[test]
fn min_items_zero_allows_empty_array() {
    let compiled = compile(&json!({"minItems": 0})).unwrap();
    assert!(compiled.is_valid(&json!([])));
}

#[test]
fn min_items_negative_fails_meta_validation() {
    assert!(compile(&json!({"minItems": -1})).is_err());
}

#[test]
fn ref_into_definitions_is_resolved_and_absent_property_is_vacuous() {
    let schema = json!({
        "properties": {"a": {"$ref": "#/definitions/int"}},
        "definitions": {"int": {"type": "integer"}}
    });
    let compiled = compile(&schema).unwrap();
    assert!(compiled.is_valid(&json!({"a": 3})));
    assert!(!compiled.is_valid(&json!({"a": "x"})));
    assert!(compiled.is_valid(&json!({})));
}

#[test]
fn dangling_ref_is_a_compile_error() {
    assert!(compile(&json!({"$ref": "#/no_such"})).is_err());
}

#[test]
fn ref_into_array_definitions_checks_bounds() {
    let out_of_range = json!({
        "properties": {"a": {"$ref": "#/myDefs/3"}},
        "myDefs": [{"type": "integer"}, {"type": "string"}, {"type": "boolean"}]
    });
    assert!(compile(&out_of_range).is_err());

    let in_range = json!({
        "properties": {"a": {"$ref": "#/myDefs/2"}},
        "myDefs": [{"type": "integer"}, {"type": "string"}, {"type": "boolean"}]
    });
    let compiled = compile(&in_range).unwrap();
    assert!(compiled.is_valid(&json!({"a": true})));
    assert!(!compiled.is_valid(&json!({"a": 1})));
}

#[test]
fn recursive_schema_via_root_ref() {
    let schema = json!({"properties": {"child": {"$ref": "#"}}});
    let compiled = compile(&schema).unwrap();
    assert!(compiled.is_valid(&json!({"child": {"child": {}}})));
    assert!(!compiled.is_valid(&json!({"child": 5})));
}

#[test]
fn not_is_the_logical_negation_of_its_subschema() {
    let positive = compile(&json!({"type": "string"})).unwrap();
    let negated = compile(&json!({"not": {"type": "string"}})).unwrap();
    for instance in [json!("a"), json!(1), json!(null), json!([1, 2])] {
        assert_eq!(positive.is_valid(&instance), !negated.is_valid(&instance));
    }
}

#[test]
fn meta_schema_validates_itself() {
    let meta: serde_json::Value =
        serde_json::from_str(include_str!("../meta_schemas/draft7.json")).unwrap();
    assert!(compile(&meta).unwrap().is_valid(&meta));
}

#[test]
fn type_gated_keywords_pass_vacuously_on_other_types() {
    let compiled = compile(&json!({"minLength": 10})).unwrap();
    assert!(compiled.is_valid(&json!(1)));
    assert!(compiled.is_valid(&json!(true)));
    assert!(compiled.is_valid(&json!([1, 2, 3])));
    assert!(compiled.is_valid(&json!({"a": 1})));
    assert!(compiled.is_valid(&json!(null)));
}

#[test]
fn const_and_enum_are_reflexive() {
    let value = json!({"a": [1, 2.5, "x"]});
    let const_schema = compile(&json!({"const": value})).unwrap();
    assert!(const_schema.is_valid(&value));

    let enum_schema = compile(&json!({"enum": [1, "two", [3]]})).unwrap();
    assert!(enum_schema.is_valid(&json!(1)));
    assert!(enum_schema.is_valid(&json!("two")));
    assert!(enum_schema.is_valid(&json!([3])));
    assert!(!enum_schema.is_valid(&json!(4)));
}

#[test]
fn unique_items_treats_numbers_equal_by_value_but_distinct_from_booleans() {
    let compiled = compile(&json!({"uniqueItems": true})).unwrap();
    assert!(compiled.is_valid(&json!([1, true])));
    assert!(!compiled.is_valid(&json!([1, 1.0])));
}

#[test]
fn additional_properties_respects_both_properties_and_pattern_properties() {
    let schema = json!({
        "properties": {"a": true},
        "patternProperties": {"^b": true},
        "additionalProperties": false
    });
    let compiled = compile(&schema).unwrap();
    assert!(compiled.is_valid(&json!({"a": 1, "bee": 2})));
    assert!(!compiled.is_valid(&json!({"a": 1, "c": 2})));
}

#[test]
fn remote_schema_fixtures_are_resolved_through_compile_options() {
    let compiled = CompileOptions::new()
        .with_remote_schema("https://example.com/schemas/positive.json", json!({"minimum": 0}))
        .compile(&json!({
            "properties": {"count": {"$ref": "https://example.com/schemas/positive.json"}}
        }))
        .unwrap();
    assert!(compiled.is_valid(&json!({"count": 1})));
    assert!(!compiled.is_valid(&json!({"count": -1})));
}

#[test]
fn if_then_else_applies_the_matching_branch() {
    let schema = json!({
        "if": {"properties": {"kind": {"const": "circle"}}, "required": ["kind"]},
        "then": {"required": ["radius"]},
        "else": {"required": ["width", "height"]}
    });
    let compiled = compile(&schema).unwrap();
    assert!(compiled.is_valid(&json!({"kind": "circle", "radius": 2})));
    assert!(!compiled.is_valid(&json!({"kind": "circle"})));
    assert!(compiled.is_valid(&json!({"kind": "square", "width": 1, "height": 1})));
    assert!(!compiled.is_valid(&json!({"kind": "square"})));
}

#[test]
fn all_of_any_of_one_of_compose() {
    let schema = json!({
        "allOf": [{"type": "integer"}, {"minimum": 0}],
        "anyOf": [{"multipleOf": 2}, {"multipleOf": 3}],
        "not": {"multipleOf": 5}
    });
    let compiled = compile(&schema).unwrap();
    assert!(compiled.is_valid(&json!(4)));
    assert!(compiled.is_valid(&json!(9)));
    assert!(!compiled.is_valid(&json!(-4)));
    assert!(!compiled.is_valid(&json!(1.5)));
    assert!(!compiled.is_valid(&json!(30)));
}
