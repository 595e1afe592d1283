//! Metadata wrappers.
//!
//! [`meta`] tags an [`Attributes`] record so factories can tell it apart from
//! ordinary data. Its fields are spread into the document the wrapper is
//! passed to; the wrapper itself never appears in the output.
//!
//! # Example
//! ```rust
//! use schema_dsl::{int, meta, Attributes};
//!
//! let uint8 = int!(meta(Attributes::new().minimum(0).maximum(255)));
//! assert_eq!(uint8.to_json(), r#"{"type":"integer","minimum":0,"maximum":255}"#);
//! ```

use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::{trace, warn};

use crate::document::{Field, PropertyMap, Schema};
use crate::map::OrderedMap;
use crate::tag::{tag, TagKind, Tagged};

/// A tagged attribute record.
pub type Meta = Tagged<Attributes>;

/// Wrap `attributes` with the Metadata marker.
///
/// The record is copied into the wrapper; later changes to the caller's
/// record do not affect it. Keys are not validated.
pub fn meta(attributes: impl Into<Attributes>) -> Meta {
    let attributes = attributes.into();
    trace!(fields = attributes.len(), "Tagging metadata");
    tag(TagKind::Metadata, attributes)
}

fn text(value: impl Into<String>) -> Field {
    Field::Value(Value::String(value.into()))
}

/// Well-known values for the string `format` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringFormat {
    Email,
    Uri,
    Uuid,
    Date,
    DateTime,
    Ipv4,
    Ipv6,
}

impl StringFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Uri => "uri",
            Self::Uuid => "uuid",
            Self::Date => "date",
            Self::DateTime => "date-time",
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
        }
    }
}

impl From<StringFormat> for String {
    fn from(format: StringFormat) -> Self {
        format.as_str().to_string()
    }
}

/// An ordered record of descriptive and constraint attributes.
///
/// The typed setters cover the attribute vocabulary for every factory;
/// [`ext`](Attributes::ext) and [`set`](Attributes::set) accept anything
/// else. Setting a key twice keeps its first position and the last value.
///
/// # Example
/// ```rust
/// use schema_dsl::{Attributes, StringFormat};
///
/// let attrs = Attributes::new()
///     .title("Email")
///     .format(StringFormat::Email)
///     .max_length(254)
///     .ext("$source", "crm");
///
/// assert_eq!(attrs.keys().collect::<Vec<_>>(), vec!["title", "format", "maxLength", "$source"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    fields: OrderedMap<Field>,
}

impl Attributes {
    pub fn new() -> Self {
        Self {
            fields: OrderedMap::new(),
        }
    }

    /// Set an arbitrary key.
    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Field>) -> Self {
        self.fields.insert(key, value.into());
        self
    }

    /// Set a `$`-prefixed extension key. The `$` is added if missing.
    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn ext(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let key = if key.starts_with('$') {
            key
        } else {
            format!("${key}")
        };
        self.set(key, Field::Value(value.into()))
    }

    // ---------------------------------------------------------------------
    // Metadata
    // ---------------------------------------------------------------------

    /// `$id`
    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.set("$id", text(id))
    }

    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn title(self, title: impl Into<String>) -> Self {
        self.set("title", text(title))
    }

    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn description(self, description: impl Into<String>) -> Self {
        self.set("description", text(description))
    }

    /// `$comment`
    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn comment(self, comment: impl Into<String>) -> Self {
        self.set("$comment", text(comment))
    }

    /// `default`; any JSON value, including objects and arrays.
    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn default_value(self, value: impl Into<Value>) -> Self {
        self.set("default", Field::Value(value.into()))
    }

    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn examples<V: Into<Value>>(self, examples: impl IntoIterator<Item = V>) -> Self {
        let examples: Vec<Value> = examples.into_iter().map(Into::into).collect();
        self.set("examples", Value::Array(examples))
    }

    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn deprecated(self, deprecated: bool) -> Self {
        self.set("deprecated", deprecated)
    }

    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn read_only(self, read_only: bool) -> Self {
        self.set("readOnly", read_only)
    }

    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn write_only(self, write_only: bool) -> Self {
        self.set("writeOnly", write_only)
    }

    // ---------------------------------------------------------------------
    // Numbers
    // ---------------------------------------------------------------------

    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn minimum(self, minimum: impl Into<Value>) -> Self {
        self.bound("minimum", minimum.into())
    }

    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn maximum(self, maximum: impl Into<Value>) -> Self {
        self.bound("maximum", maximum.into())
    }

    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn exclusive_minimum(self, bound: impl Into<Value>) -> Self {
        self.bound("exclusiveMinimum", bound.into())
    }

    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn exclusive_maximum(self, bound: impl Into<Value>) -> Self {
        self.bound("exclusiveMaximum", bound.into())
    }

    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn multiple_of(self, factor: impl Into<Value>) -> Self {
        self.bound("multipleOf", factor.into())
    }

    /// Numeric keywords only accept numbers. `f64::NAN` and the infinities
    /// convert to `null`, which no validator accepts as a bound.
    fn bound(self, key: &str, value: Value) -> Self {
        if value.is_number() {
            self.set(key, Field::Value(value))
        } else {
            warn!(key, %value, "Skipping non-numeric bound");
            self
        }
    }

    // ---------------------------------------------------------------------
    // Strings
    // ---------------------------------------------------------------------

    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn min_length(self, length: u64) -> Self {
        self.set("minLength", length)
    }

    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn max_length(self, length: u64) -> Self {
        self.set("maxLength", length)
    }

    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn pattern(self, pattern: impl Into<String>) -> Self {
        self.set("pattern", text(pattern))
    }

    /// `format`; free-form, see [`StringFormat`] for the common ones.
    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn format(self, format: impl Into<String>) -> Self {
        self.set("format", text(format))
    }

    // ---------------------------------------------------------------------
    // Arrays
    // ---------------------------------------------------------------------

    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn min_items(self, count: u64) -> Self {
        self.set("minItems", count)
    }

    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn max_items(self, count: u64) -> Self {
        self.set("maxItems", count)
    }

    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn unique_items(self, unique: bool) -> Self {
        self.set("uniqueItems", unique)
    }

    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn contains(self, schema: Schema) -> Self {
        self.set("contains", schema)
    }

    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn min_contains(self, count: u64) -> Self {
        self.set("minContains", count)
    }

    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn max_contains(self, count: u64) -> Self {
        self.set("maxContains", count)
    }

    // ---------------------------------------------------------------------
    // Objects
    // ---------------------------------------------------------------------

    /// `additionalProperties`: `false`/`true` or a schema.
    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn additional_properties(self, value: impl Into<Field>) -> Self {
        self.set("additionalProperties", value)
    }

    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn min_properties(self, count: u64) -> Self {
        self.set("minProperties", count)
    }

    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn max_properties(self, count: u64) -> Self {
        self.set("maxProperties", count)
    }

    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn property_names(self, schema: Schema) -> Self {
        self.set("propertyNames", schema)
    }

    #[must_use = "This method returns new Attributes and does not modify self"]
    pub fn pattern_properties(self, patterns: impl Into<PropertyMap>) -> Self {
        self.set("patternProperties", Field::Properties(patterns.into()))
    }

    // ---------------------------------------------------------------------
    // Access
    // ---------------------------------------------------------------------

    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// JSON objects convert field by field; any other JSON value is an empty record.
impl From<Value> for Attributes {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => map.into(),
            _ => Self::new(),
        }
    }
}

impl From<serde_json::Map<String, Value>> for Attributes {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        map.into_iter()
            .map(|(key, value)| (key, Field::Value(value)))
            .collect()
    }
}

impl From<&Attributes> for Attributes {
    fn from(attributes: &Attributes) -> Self {
        attributes.clone()
    }
}

impl<K: Into<String>> FromIterator<(K, Field)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, Field)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::has_tag;
    use serde_json::json;

    #[test]
    fn meta_is_tagged_and_serializes_without_marker() {
        let m = meta(Attributes::new().title("T").ext("$x", 1));
        assert!(has_tag(TagKind::Metadata, &m));
        assert!(!has_tag(TagKind::Schema, &m));
        assert_eq!(serde_json::to_value(&m).unwrap(), json!({"title": "T", "$x": 1}));
    }

    #[test]
    fn meta_copies_its_input() {
        let attrs = Attributes::new().title("before");
        let m = meta(&attrs);
        let changed = attrs.title("after");
        assert_eq!(m.get("title").and_then(Field::as_str), Some("before"));
        assert_eq!(changed.get("title").and_then(Field::as_str), Some("after"));
    }

    #[test]
    fn non_finite_bounds_are_skipped() {
        let attrs = Attributes::new()
            .minimum(f64::NAN)
            .maximum(f64::INFINITY)
            .multiple_of(0.5)
            .exclusive_minimum("1");
        assert_eq!(attrs.keys().collect::<Vec<_>>(), vec!["multipleOf"]);
    }

    #[test]
    fn ext_adds_dollar_prefix() {
        let attrs = Attributes::new().ext("vendor", true);
        assert!(attrs.get("$vendor").is_some());
    }

    #[test]
    fn json_object_converts_and_scalars_are_empty() {
        let attrs = Attributes::from(json!({"title": "x", "$anchor": "a"}));
        assert_eq!(attrs.keys().collect::<Vec<_>>(), vec!["title", "$anchor"]);
        assert!(Attributes::from(json!(42)).is_empty());
        assert!(meta(json!(null)).is_empty());
    }
}
