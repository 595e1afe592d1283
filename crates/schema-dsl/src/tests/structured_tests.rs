//! Property-based tests for the composite factories
//!
//! These tests validate tuple bounds, property envelopes and the position of
//! child schemas relative to metadata.

use super::arb_leaf_schema;
use crate::{props, rec, req_props, tup, tup_rest, Arg, Field, PropertyMap};
use proptest::prelude::*;
use serde_json::json;

/// Strategy to generate property maps with distinct names
fn arb_property_map() -> impl Strategy<Value = PropertyMap> {
    prop::collection::btree_map("[a-z]{1,8}", arb_leaf_schema(), 1..6)
        .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// **Property 1: Tuple Bounds**
    /// *For any* `n >= 1` element schemas, the tuple SHALL have
    /// `prefixItems.len() == minItems == maxItems == n` and `items: false`.
    #[test]
    fn prop_tuple_bounds_match_element_count(elements in prop::collection::vec(arb_leaf_schema(), 1..8)) {
        let n = elements.len() as u64;
        let schema = tup(elements.iter().map(Arg::from)).expect("tuple with elements");

        prop_assert_eq!(schema.type_name(), Some("array"));
        prop_assert_eq!(schema.prefix_items(), Some(elements.as_slice()));
        prop_assert_eq!(schema.get("minItems").and_then(Field::as_u64), Some(n));
        prop_assert_eq!(schema.get("maxItems").and_then(Field::as_u64), Some(n));
        let closed = Field::Value(json!(false));
        prop_assert_eq!(schema.items(), Some(&closed));
    }

    /// **Property 2: Tuple With Rest**
    /// *For any* non-empty prefix and rest schema, the document SHALL keep the
    /// prefix in order, use `rest` as `items`, set `minItems` to the prefix
    /// length and omit `maxItems`.
    #[test]
    fn prop_tuple_rest_is_open_ended(
        prefix in prop::collection::vec(arb_leaf_schema(), 1..6),
        rest in arb_leaf_schema(),
    ) {
        let schema = tup_rest([Arg::from(prefix.clone()), Arg::from(&rest)]).expect("tuple with rest");

        prop_assert_eq!(schema.prefix_items(), Some(prefix.as_slice()));
        prop_assert_eq!(schema.items().and_then(Field::as_schema), Some(&rest));
        prop_assert_eq!(schema.get("minItems").and_then(Field::as_u64), Some(prefix.len() as u64));
        prop_assert!(!schema.contains_key("maxItems"));
    }

    /// **Property 3: Required Follows Map Order**
    /// *For any* property map, `req_props` SHALL require every key in map
    /// order.
    #[test]
    fn prop_req_props_requires_every_key(properties in arb_property_map()) {
        let names: Vec<String> = properties.keys().map(str::to_string).collect();
        let schema = crate::obj([Arg::from(req_props(properties))]);

        let required: Vec<String> = schema
            .required()
            .unwrap_or_default()
            .into_iter()
            .map(str::to_string)
            .collect();
        prop_assert_eq!(required, names);
    }

    /// **Property 4: Empty Required Is Omitted**
    /// *For any* property map wrapped without required names, the object
    /// SHALL NOT carry `required`.
    #[test]
    fn prop_props_without_names_omits_required(properties in arb_property_map()) {
        let len = properties.len();
        let schema = crate::obj([Arg::from(props(properties, &[]))]);

        prop_assert!(!schema.contains_key("required"));
        prop_assert_eq!(schema.properties().map(PropertyMap::len), Some(len));
    }

    /// **Property 5: Records Have No Properties**
    /// *For any* value schema, `rec` SHALL emit exactly `type` and
    /// `additionalProperties`.
    #[test]
    fn prop_record_has_only_additional_properties(values in arb_leaf_schema()) {
        let schema = rec([Arg::from(&values)]).expect("record with value schema");

        prop_assert_eq!(schema.keys().collect::<Vec<_>>(), vec!["type", "additionalProperties"]);
        prop_assert_eq!(schema.additional_properties().and_then(Field::as_schema), Some(&values));
    }
}

#[cfg(test)]
mod unit_tests {
    use crate::{
        arr, int, meta, obj, props, rec, req_props, str, tup, tup_rest, Attributes, BuildErrorCode,
    };

    #[test]
    fn test_array_with_metadata() {
        let schema = arr!(meta(Attributes::new().title("Pair")), int!()).unwrap();
        assert_eq!(
            schema.to_json(),
            r#"{"type":"array","title":"Pair","items":{"type":"integer"}}"#
        );
    }

    #[test]
    fn test_array_items_cannot_be_shadowed() {
        let schema = arr!(meta(Attributes::new().set("items", false).min_items(1)), str!()).unwrap();
        assert_eq!(
            schema.to_json(),
            r#"{"type":"array","minItems":1,"items":{"type":"string"}}"#
        );
    }

    #[test]
    fn test_array_without_item_schema_fails() {
        let err = arr!().unwrap_err();
        assert_eq!(err.code, BuildErrorCode::MissingArgument);
        assert_eq!(err.factory, "arr");

        let err = arr!(meta(Attributes::new()), 1).unwrap_err();
        assert_eq!(err.code, BuildErrorCode::MissingArgument);
    }

    #[test]
    fn test_object_shapes() {
        assert_eq!(obj!().to_json(), r#"{"type":"object","properties":{}}"#);
        assert_eq!(
            obj!(meta(Attributes::new().title("Empty"))).to_json(),
            r#"{"type":"object","properties":{},"title":"Empty"}"#
        );
        assert_eq!(
            obj!(props([("a", int!()), ("b", str!())], &["a"])).to_json(),
            r#"{"type":"object","properties":{"a":{"type":"integer"},"b":{"type":"string"}},"required":["a"]}"#
        );
        assert_eq!(
            obj!(
                meta(Attributes::new().additional_properties(false)),
                req_props([("a", int!())])
            )
            .to_json(),
            r#"{"type":"object","properties":{"a":{"type":"integer"}},"required":["a"],"additionalProperties":false}"#
        );
    }

    #[test]
    fn test_object_ignores_metadata_after_envelope() {
        let schema = obj!(req_props([("a", int!())]), meta(Attributes::new().title("Late")));
        assert!(schema.get("title").is_none());
        assert_eq!(schema.required(), Some(vec!["a"]));
    }

    #[test]
    fn test_object_keeps_structural_keys_over_metadata() {
        let schema = obj!(
            meta(Attributes::new().set("required", "x").set("properties", 1).title("T")),
            props([("a", int!())], &["a"])
        );
        assert_eq!(schema.required(), Some(vec!["a"]));
        assert_eq!(schema.properties().map(|p| p.len()), Some(1));
        assert_eq!(schema.keys().last(), Some("title"));
    }

    #[test]
    fn test_object_keeps_undeclared_required_when_permissive() {
        let schema = obj!(props([("a", int!())], &["a", "missing"]));
        assert_eq!(schema.required(), Some(vec!["a", "missing"]));
    }

    #[test]
    fn test_object_lists_repeated_required_once() {
        let schema = obj!(props([("a", int!()), ("b", str!())], &["b", "a", "b", "a"]));
        assert_eq!(schema.required(), Some(vec!["b", "a"]));

        let schema = obj!(props([("a", int!())], &["a", "a"]));
        assert_eq!(
            schema.to_json(),
            r#"{"type":"object","properties":{"a":{"type":"integer"}},"required":["a"]}"#
        );
    }

    #[test]
    fn test_tuple_forms_agree() {
        let spread = tup!(int!(), str!()).unwrap();
        let listed = tup!([int!(), str!()]).unwrap();
        let mixed = tup!(int!(), vec![str!()]).unwrap();

        assert_eq!(spread, listed);
        assert_eq!(spread, mixed);
        assert_eq!(
            spread.to_json(),
            r#"{"type":"array","prefixItems":[{"type":"integer"},{"type":"string"}],"minItems":2,"maxItems":2,"items":false}"#
        );
    }

    #[test]
    fn test_tuple_with_metadata_and_stray_literal() {
        let schema = tup!(meta(Attributes::new().title("Point")), int!(), "oops", int!()).unwrap();
        assert_eq!(
            schema.to_json(),
            r#"{"type":"array","title":"Point","prefixItems":[{"type":"integer"},{"type":"integer"}],"minItems":2,"maxItems":2,"items":false}"#
        );
    }

    #[test]
    fn test_tuple_without_elements_fails() {
        assert_eq!(tup!().unwrap_err().code, BuildErrorCode::MissingArgument);
        assert_eq!(
            tup!(meta(Attributes::new())).unwrap_err().code,
            BuildErrorCode::MissingArgument
        );
        assert_eq!(
            tup!(Vec::<crate::Schema>::new()).unwrap_err().code,
            BuildErrorCode::MissingArgument
        );
    }

    #[test]
    fn test_tuple_rest_with_metadata() {
        let schema = tup_rest!(meta(Attributes::new().title("Command")), [str!()], int!()).unwrap();
        assert_eq!(
            schema.to_json(),
            r#"{"type":"array","title":"Command","prefixItems":[{"type":"string"}],"items":{"type":"integer"},"minItems":1}"#
        );
    }

    #[test]
    fn test_tuple_rest_requires_prefix_and_rest() {
        let err = tup_rest!(Vec::<crate::Schema>::new(), int!()).unwrap_err();
        assert_eq!(err.to_string(), "[MISSING_ARGUMENT] tup_rest: requires a non-empty prefix schema list");

        let err = tup_rest!(int!(), int!()).unwrap_err();
        assert_eq!(err.code, BuildErrorCode::MissingArgument);

        let err = tup_rest!([int!()]).unwrap_err();
        assert_eq!(err.to_string(), "[MISSING_ARGUMENT] tup_rest: requires a rest schema");
    }

    #[test]
    fn test_record_with_metadata() {
        let schema = rec!(meta(Attributes::new().min_properties(1)), int!()).unwrap();
        assert_eq!(
            schema.to_json(),
            r#"{"type":"object","minProperties":1,"additionalProperties":{"type":"integer"}}"#
        );
        assert!(schema.properties().is_none());
    }

    #[test]
    fn test_record_without_value_schema_fails() {
        let err = rec!(meta(Attributes::new())).unwrap_err();
        assert_eq!(err.to_string(), "[MISSING_ARGUMENT] rec: requires a value schema");
    }

    #[test]
    fn test_children_are_embedded_by_value() {
        let child = int!(meta(Attributes::new().minimum(0)));
        let a = arr!(&child).unwrap();
        let b = rec!(&child).unwrap();
        assert_eq!(a.items().and_then(|f| f.as_schema()), Some(&child));
        assert_eq!(b.additional_properties().and_then(|f| f.as_schema()), Some(&child));
    }
}
