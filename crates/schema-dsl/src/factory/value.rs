//! Literal-value schemas: `enum` and `const`.
//!
//! A leading argument counts as metadata only when it carries the Metadata
//! marker. Untagged objects and arrays are literals, whatever their shape.

use serde_json::Value;

use crate::arg::{Arg, Positional};
use crate::document::Schema;
use crate::error::BuildResult;
use crate::factory::assemble::{Assembly, Built};

const ENU_RESERVED: &[&str] = &["enum"];
const CON_RESERVED: &[&str] = &["const"];

/// Pull literals off `args` in order, recording anything else as unexpected.
fn literals(assembly: &mut Assembly, args: Positional) -> Vec<Value> {
    let mut values = Vec::new();
    for (position, arg) in args {
        match arg.into_literal() {
            Ok(value) => values.push(value),
            Err(arg) => assembly.unexpected(position, &arg),
        }
    }
    values
}

pub(crate) fn build_enu(args: impl IntoIterator<Item = Arg>) -> BuildResult<Built> {
    let mut args = Positional::new(args);
    let mut assembly = Assembly::new("enu");

    let meta = args.take_meta();
    let values = literals(&mut assembly, args);
    if values.is_empty() {
        return Err(assembly.missing("at least one literal value"));
    }

    assembly.spread(meta.as_ref(), ENU_RESERVED);
    assembly.structural("enum", Value::Array(values));
    Ok(assembly.finish())
}

pub(crate) fn build_con(args: impl IntoIterator<Item = Arg>) -> BuildResult<Built> {
    let mut args = Positional::new(args);
    let mut assembly = Assembly::new("con");

    let meta = args.take_meta();
    let mut literal = None;
    for (position, arg) in args {
        match arg.into_literal() {
            Ok(value) if literal.is_none() => literal = Some(value),
            Ok(value) => assembly.unexpected(position, &Arg::Value(value)),
            Err(arg) => assembly.unexpected(position, &arg),
        }
    }
    let Some(value) = literal else {
        return Err(assembly.missing("a literal value"));
    };

    assembly.spread(meta.as_ref(), CON_RESERVED);
    assembly.structural("const", value);
    Ok(assembly.finish())
}

/// `{"enum": [...]}`
///
/// Values keep their order and duplicates.
///
/// # Example
/// ```rust
/// use schema_dsl::enu;
/// use serde_json::json;
///
/// let shape = enu!(json!({"kind": "circle"}), json!([1, 2]), "square", "square").unwrap();
/// assert_eq!(
///     shape.to_json(),
///     r#"{"enum":[{"kind":"circle"},[1,2],"square","square"]}"#
/// );
/// ```
pub fn enu(args: impl IntoIterator<Item = Arg>) -> BuildResult<Schema> {
    Ok(build_enu(args)?.tolerate())
}

/// `{"const": ...}`
pub fn con(args: impl IntoIterator<Item = Arg>) -> BuildResult<Schema> {
    Ok(build_con(args)?.tolerate())
}
