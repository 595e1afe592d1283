//! Positional factory arguments.
//!
//! Factories accept a list of [`Arg`]s and decide what each one is by its
//! tag. Tagged values (schemas, metadata, property envelopes) convert into
//! their own variants; everything else that converts into JSON is a literal.
//! A JSON object is always a literal, however much it looks like metadata.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::VecDeque;
use std::fmt;

use crate::document::Schema;
use crate::meta::Meta;
use crate::props::PropsEnvelope;
use crate::tag::{has_tag, sealed, Marked, Tag, TagKind};

/// One positional argument to a factory.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Schema(Schema),
    Meta(Meta),
    Props(PropsEnvelope),
    /// An ordered list of schemas, e.g. a tuple prefix.
    Schemas(Vec<Schema>),
    /// A JSON literal for `enu`/`con`.
    Value(Value),
}

/// The category of an [`Arg`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgKind {
    Schema,
    Metadata,
    PropertyEnvelope,
    SchemaArray,
    Literal,
}

impl ArgKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Schema => "schema",
            Self::Metadata => "metadata",
            Self::PropertyEnvelope => "property envelope",
            Self::SchemaArray => "schema array",
            Self::Literal => "literal",
        }
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Arg {
    pub fn kind(&self) -> ArgKind {
        match self {
            Self::Schema(_) => ArgKind::Schema,
            Self::Meta(_) => ArgKind::Metadata,
            Self::Props(_) => ArgKind::PropertyEnvelope,
            Self::Schemas(_) => ArgKind::SchemaArray,
            Self::Value(_) => ArgKind::Literal,
        }
    }

    pub(crate) fn into_schema(self) -> Result<Schema, Arg> {
        match self {
            Self::Schema(schema) if has_tag(TagKind::Schema, &schema) => Ok(schema),
            other => Err(other),
        }
    }

    pub(crate) fn into_meta(self) -> Result<Meta, Arg> {
        match self {
            Self::Meta(meta) if has_tag(TagKind::Metadata, &meta) => Ok(meta),
            other => Err(other),
        }
    }

    pub(crate) fn into_props(self) -> Result<PropsEnvelope, Arg> {
        match self {
            Self::Props(env) if has_tag(TagKind::PropertyEnvelope, &env) => Ok(env),
            other => Err(other),
        }
    }

    /// A schema list whose every element carries the Schema marker.
    pub(crate) fn into_schemas(self) -> Result<Vec<Schema>, Arg> {
        match self {
            Self::Schemas(list) if list.iter().all(|s| has_tag(TagKind::Schema, s)) => Ok(list),
            other => Err(other),
        }
    }

    pub(crate) fn into_literal(self) -> Result<Value, Arg> {
        match self {
            Self::Value(value) => Ok(value),
            other => Err(other),
        }
    }
}

impl sealed::Sealed for Arg {}

impl Marked for Arg {
    fn marker(&self) -> Option<&'static Tag> {
        match self {
            Self::Schema(schema) => schema.marker(),
            Self::Meta(meta) => meta.marker(),
            Self::Props(env) => env.marker(),
            Self::Schemas(_) | Self::Value(_) => None,
        }
    }
}

impl From<Schema> for Arg {
    fn from(schema: Schema) -> Self {
        Self::Schema(schema)
    }
}

impl From<&Schema> for Arg {
    fn from(schema: &Schema) -> Self {
        Self::Schema(schema.clone())
    }
}

impl From<Meta> for Arg {
    fn from(meta: Meta) -> Self {
        Self::Meta(meta)
    }
}

impl From<&Meta> for Arg {
    fn from(meta: &Meta) -> Self {
        Self::Meta(meta.clone())
    }
}

impl From<PropsEnvelope> for Arg {
    fn from(env: PropsEnvelope) -> Self {
        Self::Props(env)
    }
}

impl From<&PropsEnvelope> for Arg {
    fn from(env: &PropsEnvelope) -> Self {
        Self::Props(env.clone())
    }
}

impl From<Vec<Schema>> for Arg {
    fn from(schemas: Vec<Schema>) -> Self {
        Self::Schemas(schemas)
    }
}

impl From<&[Schema]> for Arg {
    fn from(schemas: &[Schema]) -> Self {
        Self::Schemas(schemas.to_vec())
    }
}

impl<const N: usize> From<[Schema; N]> for Arg {
    fn from(schemas: [Schema; N]) -> Self {
        Self::Schemas(schemas.into())
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&Value> for Arg {
    fn from(value: &Value) -> Self {
        Self::Value(value.clone())
    }
}

macro_rules! arg_from_json {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Self::Value(Value::from(value))
                }
            }
        )*
    };
}

arg_from_json!(bool, &str, String, i32, i64, u8, u32, u64, f64, Vec<Value>);

/// Arguments in call order, consumed front to back during classification.
pub(crate) struct Positional {
    queue: VecDeque<(usize, Arg)>,
}

impl Positional {
    pub(crate) fn new(args: impl IntoIterator<Item = Arg>) -> Self {
        Self {
            queue: args.into_iter().enumerate().collect(),
        }
    }

    /// Take the next argument if it carries `kind`'s marker.
    fn take_tagged(&mut self, kind: TagKind) -> Option<Arg> {
        let (_, front) = self.queue.front()?;
        if !has_tag(kind, front) {
            return None;
        }
        self.queue.pop_front().map(|(_, arg)| arg)
    }

    pub(crate) fn take_meta(&mut self) -> Option<Meta> {
        self.take_tagged(TagKind::Metadata)?.into_meta().ok()
    }

    pub(crate) fn take_props(&mut self) -> Option<PropsEnvelope> {
        self.take_tagged(TagKind::PropertyEnvelope)?.into_props().ok()
    }

    pub(crate) fn take_schema(&mut self) -> Option<Schema> {
        self.take_tagged(TagKind::Schema)?.into_schema().ok()
    }

    /// Take the next argument if it is a schema list.
    pub(crate) fn take_schemas(&mut self) -> Option<Vec<Schema>> {
        let (_, front) = self.queue.front()?;
        if !matches!(front, Arg::Schemas(_)) {
            return None;
        }
        let (position, arg) = self.queue.pop_front()?;
        match arg.into_schemas() {
            Ok(list) => Some(list),
            Err(arg) => {
                self.queue.push_front((position, arg));
                None
            }
        }
    }
}

impl Iterator for Positional {
    type Item = (usize, Arg);

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_front()
    }
}
