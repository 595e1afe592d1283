//! Integration tests against an external draft 2020-12 validator.
//!
//! Every document the DSL emits must compile as a schema, and must accept
//! and reject instances the way its keywords say.

use schema_dsl::{
    all_of, arr, bool, con, enu, int, meta, nul, num, obj, one_of, props, rec, req_props, str,
    tup, tup_rest, Attributes, Schema, StringFormat,
};
use serde_json::{json, Value};

fn validator(schema: &Schema) -> jsonschema::Validator {
    jsonschema::options()
        .with_draft(jsonschema::Draft::Draft202012)
        .build(&schema.to_value())
        .unwrap_or_else(|e| panic!("{} should compile: {e}", schema.to_json()))
}

fn assert_accepts(schema: &Schema, instances: &[Value]) {
    let validator = validator(schema);
    for instance in instances {
        assert!(
            validator.is_valid(instance),
            "{} should accept {instance}",
            schema.to_json()
        );
    }
}

fn assert_rejects(schema: &Schema, instances: &[Value]) {
    let validator = validator(schema);
    for instance in instances {
        assert!(
            !validator.is_valid(instance),
            "{} should reject {instance}",
            schema.to_json()
        );
    }
}

#[test]
fn primitives() {
    assert_accepts(&nul!(), &[json!(null)]);
    assert_accepts(&int!(), &[json!(0), json!(-7)]);
    assert_accepts(&num!(), &[json!(1.5), json!(3)]);
    assert_accepts(&str!(), &[json!("")]);
    assert_accepts(&bool!(), &[json!(true)]);

    assert_rejects(&int!(), &[json!(1.5), json!("1")]);
    assert_rejects(&bool!(), &[json!(0)]);
}

#[test]
fn bounded_primitives() {
    let byte = int!(meta(Attributes::new().minimum(0).maximum(255)));
    assert_accepts(&byte, &[json!(0), json!(255)]);
    assert_rejects(&byte, &[json!(-1), json!(256)]);

    let code = str!(meta(Attributes::new().pattern("^[A-Z]{3}$").min_length(3)));
    assert_accepts(&code, &[json!("USD")]);
    assert_rejects(&code, &[json!("usd"), json!("US")]);

    let email = str!(meta(Attributes::new().format(StringFormat::Email)));
    let _ = validator(&email);

    let ratio = num!(meta(Attributes::new().minimum(f64::NAN).maximum(1.0)));
    assert_accepts(&ratio, &[json!(-5), json!(1)]);
    assert_rejects(&ratio, &[json!(1.5)]);
}

#[test]
fn objects() {
    let user = obj!(
        meta(Attributes::new().additional_properties(false)),
        props([("name", str!()), ("age", int!())], &["name"])
    );
    assert_accepts(&user, &[json!({"name": "a"}), json!({"name": "a", "age": 3})]);
    assert_rejects(
        &user,
        &[json!({"age": 3}), json!({"name": "a", "extra": 1}), json!([])],
    );

    let point = obj!(req_props([("x", num!()), ("y", num!())]));
    assert_rejects(&point, &[json!({"x": 1})]);

    let repeated = obj!(props([("id", str!())], &["id", "id"]));
    assert_accepts(&repeated, &[json!({"id": "a"})]);
    assert_rejects(&repeated, &[json!({})]);
}

#[test]
fn arrays_and_records() {
    let tags = arr!(meta(Attributes::new().unique_items(true)), str!()).unwrap();
    assert_accepts(&tags, &[json!([]), json!(["a", "b"])]);
    assert_rejects(&tags, &[json!(["a", "a"]), json!([1])]);

    let scores = rec!(int!()).unwrap();
    assert_accepts(&scores, &[json!({}), json!({"a": 1})]);
    assert_rejects(&scores, &[json!({"a": "1"})]);
}

#[test]
fn tuples() {
    let pair = tup!(str!(), int!()).unwrap();
    assert_accepts(&pair, &[json!(["a", 1])]);
    assert_rejects(&pair, &[json!(["a"]), json!(["a", 1, 2]), json!([1, "a"])]);

    let command = tup_rest!([str!()], int!()).unwrap();
    assert_accepts(&command, &[json!(["run"]), json!(["run", 1, 2, 3])]);
    assert_rejects(&command, &[json!([]), json!(["run", "x"])]);
}

#[test]
fn values_and_combinators() {
    let unit = enu!("kg", "lb", json!({"custom": true})).unwrap();
    assert_accepts(&unit, &[json!("kg"), json!({"custom": true})]);
    assert_rejects(&unit, &[json!("g"), json!({"custom": false})]);

    let version = con!(2).unwrap();
    assert_accepts(&version, &[json!(2)]);
    assert_rejects(&version, &[json!(3)]);

    let id = one_of!(int!(), str!()).unwrap();
    assert_accepts(&id, &[json!(1), json!("1")]);
    assert_rejects(&id, &[json!(true)]);

    let both = all_of!(
        obj!(req_props([("x", int!())])),
        obj!(req_props([("y", str!())]))
    )
    .unwrap();
    assert_accepts(&both, &[json!({"x": 1, "y": "a"})]);
    assert_rejects(&both, &[json!({"x": 1})]);
}
