//! Composite schemas: objects, arrays, tuples and records.

use serde_json::Value;

use crate::arg::{Arg, Positional};
use crate::document::{PropertyMap, Schema};
use crate::error::{BuildError, BuildResult};
use crate::factory::assemble::{Assembly, Built};

const OBJ_RESERVED: &[&str] = &["type", "properties", "required"];
const ARR_RESERVED: &[&str] = &["type", "items"];
const TUP_RESERVED: &[&str] = &["type", "prefixItems", "minItems", "maxItems", "items"];
const TUP_REST_RESERVED: &[&str] = &["type", "prefixItems", "items", "minItems"];
const REC_RESERVED: &[&str] = &["type", "additionalProperties", "properties"];

pub(crate) fn build_obj(args: impl IntoIterator<Item = Arg>) -> Built {
    let mut args = Positional::new(args);
    let mut assembly = Assembly::new("obj");

    // An envelope in first position means there is no metadata.
    let meta = args.take_meta();
    let envelope = args.take_props();
    assembly.reject_rest(args);

    let (properties, required) = match envelope {
        Some(envelope) => envelope.into_inner().into_parts(),
        None => (PropertyMap::new(), Vec::new()),
    };
    let mut listed: Vec<String> = Vec::with_capacity(required.len());
    for name in required {
        if listed.contains(&name) {
            assembly.diagnose(BuildError::duplicate_required("obj", &name));
            continue;
        }
        if !properties.contains_key(name.as_str()) {
            assembly.diagnose(BuildError::undeclared_required("obj", &name));
        }
        listed.push(name);
    }
    let required = listed;

    assembly.structural("type", "object");
    assembly.structural("properties", properties);
    if !required.is_empty() {
        assembly.structural("required", Value::from(required));
    }
    assembly.spread(meta.as_ref(), OBJ_RESERVED);
    assembly.finish()
}

/// A container with an optional metadata argument and one child schema.
struct Container {
    factory: &'static str,
    type_name: &'static str,
    key: &'static str,
    missing: &'static str,
    reserved: &'static [&'static str],
}

const ARR: Container = Container {
    factory: "arr",
    type_name: "array",
    key: "items",
    missing: "an item schema",
    reserved: ARR_RESERVED,
};

const REC: Container = Container {
    factory: "rec",
    type_name: "object",
    key: "additionalProperties",
    missing: "a value schema",
    reserved: REC_RESERVED,
};

impl Container {
    fn build(&self, args: impl IntoIterator<Item = Arg>) -> BuildResult<Built> {
        let mut args = Positional::new(args);
        let mut assembly = Assembly::new(self.factory);

        let meta = args.take_meta();
        let Some(schema) = args.take_schema() else {
            return Err(assembly.missing(self.missing));
        };
        assembly.reject_rest(args);

        // The child goes last so metadata cannot shadow it.
        assembly.structural("type", self.type_name);
        assembly.spread(meta.as_ref(), self.reserved);
        assembly.structural(self.key, schema);
        Ok(assembly.finish())
    }
}

pub(crate) fn build_arr(args: impl IntoIterator<Item = Arg>) -> BuildResult<Built> {
    ARR.build(args)
}

pub(crate) fn build_rec(args: impl IntoIterator<Item = Arg>) -> BuildResult<Built> {
    REC.build(args)
}

pub(crate) fn build_tup(args: impl IntoIterator<Item = Arg>) -> BuildResult<Built> {
    let mut args = Positional::new(args);
    let mut assembly = Assembly::new("tup");

    let meta = args.take_meta();
    let elements = assembly.schemas(args);
    if elements.is_empty() {
        return Err(assembly.missing("at least one element schema"));
    }

    let count = elements.len();
    assembly.structural("type", "array");
    assembly.spread(meta.as_ref(), TUP_RESERVED);
    assembly.structural("prefixItems", elements);
    assembly.structural("minItems", count);
    assembly.structural("maxItems", count);
    assembly.structural("items", false);
    Ok(assembly.finish())
}

pub(crate) fn build_tup_rest(args: impl IntoIterator<Item = Arg>) -> BuildResult<Built> {
    let mut args = Positional::new(args);
    let mut assembly = Assembly::new("tup_rest");

    let meta = args.take_meta();
    let prefix = match args.take_schemas() {
        Some(prefix) if !prefix.is_empty() => prefix,
        _ => return Err(assembly.missing("a non-empty prefix schema list")),
    };
    let Some(rest) = args.take_schema() else {
        return Err(assembly.missing("a rest schema"));
    };
    assembly.reject_rest(args);

    let count = prefix.len();
    assembly.structural("type", "array");
    assembly.spread(meta.as_ref(), TUP_REST_RESERVED);
    assembly.structural("prefixItems", prefix);
    assembly.structural("items", rest);
    assembly.structural("minItems", count);
    Ok(assembly.finish())
}

/// `{"type": "object", "properties": ..., "required": [...]}`
///
/// Takes an optional metadata argument followed by an optional property
/// envelope, or an envelope alone. Without an envelope the object has empty
/// `properties`.
///
/// # Example
/// ```rust
/// use schema_dsl::{int, obj, req_props, str};
///
/// let point = obj!(req_props([("x", int!()), ("label", str!())]));
/// assert_eq!(
///     point.to_json(),
///     r#"{"type":"object","properties":{"x":{"type":"integer"},"label":{"type":"string"}},"required":["x","label"]}"#
/// );
/// ```
pub fn obj(args: impl IntoIterator<Item = Arg>) -> Schema {
    build_obj(args).tolerate()
}

/// `{"type": "array", "items": ...}`
///
/// Takes an item schema, optionally preceded by metadata. `items` is always
/// the last key.
pub fn arr(args: impl IntoIterator<Item = Arg>) -> BuildResult<Schema> {
    Ok(build_arr(args)?.tolerate())
}

/// A fixed-length tuple: `prefixItems`, `minItems == maxItems`, `items: false`.
///
/// Element schemas may be passed one by one or as a list; an optional
/// metadata argument may lead.
pub fn tup(args: impl IntoIterator<Item = Arg>) -> BuildResult<Schema> {
    Ok(build_tup(args)?.tolerate())
}

/// A tuple with a fixed prefix and an unbounded tail validated by `rest`.
///
/// Arguments: optional metadata, a non-empty list of prefix schemas, the rest
/// schema.
///
/// # Example
/// ```rust
/// use schema_dsl::{int, str, tup_rest};
///
/// let command = tup_rest!([str!()], int!()).unwrap();
/// assert_eq!(command.prefix_items().map(<[_]>::len), Some(1));
/// assert!(command.get("maxItems").is_none());
/// ```
pub fn tup_rest(args: impl IntoIterator<Item = Arg>) -> BuildResult<Schema> {
    Ok(build_tup_rest(args)?.tolerate())
}

/// `{"type": "object", "additionalProperties": ...}` with no `properties`.
pub fn rec(args: impl IntoIterator<Item = Arg>) -> BuildResult<Schema> {
    Ok(build_rec(args)?.tolerate())
}
