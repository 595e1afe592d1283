//! # schema-dsl
//!
//! A builder DSL for JSON Schema (draft 2020-12) documents.
//!
//! Schemas are assembled from composable factory calls. Every factory is
//! overloaded: it takes optional leading metadata, then the schemas, property
//! envelopes or literal values its keyword needs. Arguments are told apart
//! at runtime by an invisible tag, never by their shape, so an object literal
//! passed to [`enu`](fn@enu) is always a value and never mistaken for metadata.
//!
//! ## Quick Start
//!
//! ```rust
//! use schema_dsl::{arr, meta, obj, props, str, Attributes};
//!
//! let user = obj!(
//!     meta(Attributes::new().title("User")),
//!     props([("name", str!()), ("tags", arr!(str!()).unwrap())], &["name"]),
//! );
//!
//! assert_eq!(
//!     user.to_json(),
//!     r#"{"type":"object","properties":{"name":{"type":"string"},"tags":{"type":"array","items":{"type":"string"}}},"required":["name"],"title":"User"}"#
//! );
//! ```
//!
//! ## Factories
//!
//! | Factory | Arguments | Document |
//! |---------|-----------|----------|
//! | [`nul`](fn@nul), [`int`](fn@int), [`num`](fn@num), [`str`](fn@str), [`bool`](fn@bool) | `meta?` | `{"type": ...}` |
//! | [`obj`](fn@obj) | `meta?`, `envelope?` | `type`, `properties`, `required` |
//! | [`arr`](fn@arr) | `meta?`, `items` | `type`, `items` |
//! | [`tup`](fn@tup) | `meta?`, `schema`+ | `type`, `prefixItems`, `minItems`, `maxItems`, `items: false` |
//! | [`tup_rest`](fn@tup_rest) | `meta?`, `[schema]+`, `rest` | `type`, `prefixItems`, `items`, `minItems` |
//! | [`rec`](fn@rec) | `meta?`, `values` | `type`, `additionalProperties` |
//! | [`enu`](fn@enu) | `meta?`, `literal`+ | `enum` |
//! | [`con`](fn@con) | `meta?`, `literal` | `const` |
//! | [`any_of`](fn@any_of), [`one_of`](fn@one_of), [`all_of`](fn@all_of) | `meta?`, `schema`+ | `anyOf` / `oneOf` / `allOf` |
//!
//! Each factory has a macro of the same name that converts its arguments
//! with [`Arg::from`]. Metadata fields follow the structural keys they
//! precede in the table, except for `arr` and `rec` where the child schema
//! comes last.
//!
//! ## Diagnostics
//!
//! A missing required argument is a [`BuildError`] with
//! [`BuildErrorCode::MissingArgument`]. Everything else the factories notice
//! is a diagnostic:
//!
//! | Code | Condition | Permissive behaviour |
//! |------|-----------|----------------------|
//! | `UNEXPECTED_ARGUMENT` | argument of the wrong kind at its position | ignored |
//! | `RESERVED_KEY` | metadata key equal to a structural key | metadata key dropped |
//! | `UNDECLARED_REQUIRED` | required name not in `properties` | name kept |
//! | `DUPLICATE_REQUIRED` | required name listed twice | first occurrence kept |
//!
//! The free functions are permissive and log diagnostics with
//! `tracing::warn!`. [`Dsl`] applies a [`DslConfig`]:
//!
//! ```rust
//! use schema_dsl::{int, props, Arg, BuildErrorCode, Dsl};
//!
//! let dsl = Dsl::strict();
//! let err = dsl.obj([Arg::from(props([("a", int!())], &["b"]))]).unwrap_err();
//! assert_eq!(err.code, BuildErrorCode::UndeclaredRequired);
//! ```
//!
//! ## Tags
//!
//! [`Schema`], [`Meta`] and [`PropsEnvelope`] are [`Tagged`](tag::Tagged)
//! values. The tag is a process-wide marker from the
//! [`TagRegistry`](tag::TagRegistry); it never appears in the serialized
//! document.
//!
//! ```rust
//! use schema_dsl::tag::{has_tag, TagKind};
//! use schema_dsl::{int, meta, Attributes};
//! use serde_json::json;
//!
//! assert!(has_tag(TagKind::Schema, &int!()));
//! assert!(has_tag(TagKind::Metadata, &meta(Attributes::new())));
//! assert!(!has_tag(TagKind::Metadata, &json!({"title": "plain"})));
//! ```

#[macro_use]
mod macros;

mod arg;
mod config;
mod document;
mod dsl;
mod error;
mod factory;
mod map;
mod meta;
mod props;
pub mod tag;

#[cfg(test)]
mod tests;

pub use arg::{Arg, ArgKind};
pub use config::{DslConfig, Policy};
pub use document::{Document, Field, PropertyMap, Schema};
pub use dsl::Dsl;
pub use error::{BuildError, BuildErrorCode, BuildResult};
pub use factory::{
    all_of, any_of, arr, bool, con, enu, int, nul, num, obj, one_of, rec, str, tup, tup_rest,
    Combinator,
};
pub use map::OrderedMap;
pub use meta::{meta, Attributes, Meta, StringFormat};
pub use props::{props, req_props, Envelope, PropsEnvelope};
