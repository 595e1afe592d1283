//! Test module for schema-dsl
//!
//! Property-based tests (proptest) for the factories, plus unit tests for
//! the diagnostic policies.

use proptest::prelude::*;
use serde_json::Value;

use crate::{bool, int, nul, num, str, Arg, Schema};

pub mod error_tests;
pub mod structured_tests;

/// The primitive factories with the `type` they emit.
pub const PRIMITIVES: [(&str, &str); 5] = [
    ("nul", "null"),
    ("int", "integer"),
    ("num", "number"),
    ("str", "string"),
    ("bool", "boolean"),
];

/// Call the primitive factory named `name`.
pub fn primitive(name: &str, args: Vec<Arg>) -> Schema {
    match name {
        "nul" => nul(args),
        "int" => int(args),
        "num" => num(args),
        "str" => str(args),
        _ => bool(args),
    }
}

/// Strategy to generate a primitive schema
pub fn arb_leaf_schema() -> impl Strategy<Value = Schema> {
    prop::sample::select(PRIMITIVES.to_vec()).prop_map(|(name, _)| primitive(name, Vec::new()))
}

/// Strategy to generate arbitrary JSON literals, including objects and arrays
pub fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}
