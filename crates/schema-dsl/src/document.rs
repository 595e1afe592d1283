//! Schema documents.
//!
//! A [`Schema`] is one node of the schema tree: an ordered record of
//! [`Field`]s wrapped with the Schema marker. Child schemas are embedded by
//! value; the fields are held behind an [`Arc`], so embedding the same child
//! in several parents is cheap and the child can never change underneath
//! them.
//!
//! The wire format is the JSON serialization of the fields in assembly order.

use serde::{Serialize, Serializer};
use serde_json::Value;
use std::sync::Arc;

use crate::factory::Combinator;
use crate::map::OrderedMap;
use crate::tag::Tagged;

/// A tagged schema document.
pub type Schema = Tagged<Document>;

/// Property name to child schema, in insertion order.
pub type PropertyMap = OrderedMap<Schema>;

/// The value of a single document field.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// A plain JSON value (`type`, bounds, `required`, `enum`, `items: false`, ...).
    Value(Value),
    /// A single embedded schema (`items`, `additionalProperties`, `contains`, ...).
    Schema(Schema),
    /// An ordered list of schemas (`prefixItems`, `anyOf`, `oneOf`, `allOf`).
    Schemas(Vec<Schema>),
    /// A property map (`properties`, `patternProperties`).
    Properties(PropertyMap),
}

impl Field {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_schema(&self) -> Option<&Schema> {
        match self {
            Self::Schema(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_schemas(&self) -> Option<&[Schema]> {
        match self {
            Self::Schemas(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_properties(&self) -> Option<&PropertyMap> {
        match self {
            Self::Properties(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_value().and_then(Value::as_str)
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.as_value().and_then(Value::as_u64)
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_value().and_then(Value::as_bool)
    }

    /// The wire form of this field.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Value(v) => v.clone(),
            Self::Schema(s) => s.to_value(),
            Self::Schemas(list) => Value::Array(list.iter().map(|s| s.to_value()).collect()),
            Self::Properties(map) => Value::Object(
                map.iter()
                    .map(|(name, schema)| (name.to_string(), schema.to_value()))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => v.serialize(serializer),
            Self::Schema(s) => s.serialize(serializer),
            Self::Schemas(list) => list.serialize(serializer),
            Self::Properties(map) => map.serialize(serializer),
        }
    }
}

impl From<Value> for Field {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Schema> for Field {
    fn from(schema: Schema) -> Self {
        Self::Schema(schema)
    }
}

impl From<&Schema> for Field {
    fn from(schema: &Schema) -> Self {
        Self::Schema(schema.clone())
    }
}

impl From<Vec<Schema>> for Field {
    fn from(schemas: Vec<Schema>) -> Self {
        Self::Schemas(schemas)
    }
}

impl From<PropertyMap> for Field {
    fn from(properties: PropertyMap) -> Self {
        Self::Properties(properties)
    }
}

macro_rules! field_from_json {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Field {
                fn from(value: $ty) -> Self {
                    Self::Value(Value::from(value))
                }
            }
        )*
    };
}

field_from_json!(bool, &str, String, i32, i64, u32, u64, usize, f64);

/// The untagged body of a [`Schema`].
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    fields: Arc<OrderedMap<Field>>,
}

impl Document {
    pub(crate) fn from_fields(fields: OrderedMap<Field>) -> Self {
        Self {
            fields: Arc::new(fields),
        }
    }

    /// Look up a field.
    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Field names in assembly order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys()
    }

    /// Fields in assembly order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The `type` discriminator, absent for enum, const and combinator documents.
    pub fn type_name(&self) -> Option<&str> {
        self.get("type").and_then(Field::as_str)
    }

    pub fn properties(&self) -> Option<&PropertyMap> {
        self.get("properties").and_then(Field::as_properties)
    }

    /// The `required` names, in order.
    pub fn required(&self) -> Option<Vec<&str>> {
        let list = self.get("required")?.as_value()?.as_array()?;
        Some(list.iter().filter_map(Value::as_str).collect())
    }

    /// `items`: a schema for arrays and tuples-with-rest, `false` for tuples.
    pub fn items(&self) -> Option<&Field> {
        self.get("items")
    }

    pub fn prefix_items(&self) -> Option<&[Schema]> {
        self.get("prefixItems").and_then(Field::as_schemas)
    }

    pub fn additional_properties(&self) -> Option<&Field> {
        self.get("additionalProperties")
    }

    pub fn enum_values(&self) -> Option<&[Value]> {
        self.get("enum")
            .and_then(Field::as_value)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    pub fn const_value(&self) -> Option<&Value> {
        self.get("const").and_then(Field::as_value)
    }

    /// The sub-schemas of a combinator document.
    pub fn sub_schemas(&self, combinator: Combinator) -> Option<&[Schema]> {
        self.get(combinator.keyword()).and_then(Field::as_schemas)
    }

    /// The wire form of this document.
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(key, field)| (key.to_string(), field.to_value()))
                .collect(),
        )
    }

    /// Compact JSON.
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.to_value()).unwrap_or_default()
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}
