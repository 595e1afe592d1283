//! Schema composition: `anyOf`, `oneOf`, `allOf`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::arg::{Arg, Positional};
use crate::document::Schema;
use crate::error::BuildResult;
use crate::factory::assemble::{Assembly, Built};

/// The three composition keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Combinator {
    AnyOf,
    OneOf,
    AllOf,
}

impl Combinator {
    /// The document key, e.g. `"anyOf"`.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::AnyOf => "anyOf",
            Self::OneOf => "oneOf",
            Self::AllOf => "allOf",
        }
    }

    /// The factory name used in diagnostics, e.g. `"any_of"`.
    pub fn factory(&self) -> &'static str {
        match self {
            Self::AnyOf => "any_of",
            Self::OneOf => "one_of",
            Self::AllOf => "all_of",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

pub(crate) fn build_combinator(
    combinator: Combinator,
    args: impl IntoIterator<Item = Arg>,
) -> BuildResult<Built> {
    let mut args = Positional::new(args);
    let mut assembly = Assembly::new(combinator.factory());

    let meta = args.take_meta();
    let schemas = assembly.schemas(args);
    if schemas.is_empty() {
        return Err(assembly.missing("at least one schema"));
    }

    assembly.spread(meta.as_ref(), &[combinator.keyword()]);
    assembly.structural(combinator.keyword(), schemas);
    Ok(assembly.finish())
}

/// `{"anyOf": [...]}`
pub fn any_of(args: impl IntoIterator<Item = Arg>) -> BuildResult<Schema> {
    Ok(build_combinator(Combinator::AnyOf, args)?.tolerate())
}

/// `{"oneOf": [...]}`; sub-schema order is kept.
pub fn one_of(args: impl IntoIterator<Item = Arg>) -> BuildResult<Schema> {
    Ok(build_combinator(Combinator::OneOf, args)?.tolerate())
}

/// `{"allOf": [...]}`
///
/// # Example
/// ```rust
/// use schema_dsl::{all_of, int, obj, props, req_props, str};
///
/// let merged = all_of!(
///     obj!(req_props([("x", int!())])),
///     obj!(props([("y", str!())], &[])),
/// )
/// .unwrap();
/// assert_eq!(
///     merged.to_json(),
///     r#"{"allOf":[{"type":"object","properties":{"x":{"type":"integer"}},"required":["x"]},{"type":"object","properties":{"y":{"type":"string"}}}]}"#
/// );
/// ```
pub fn all_of(args: impl IntoIterator<Item = Arg>) -> BuildResult<Schema> {
    Ok(build_combinator(Combinator::AllOf, args)?.tolerate())
}
