//! Property envelopes for [`obj`](crate::obj()).
//!
//! An envelope pairs a property map with the list of required names, so
//! `obj` can take both through one positional slot.
//!
//! # Example
//! ```rust
//! use schema_dsl::{int, obj, props, req_props};
//!
//! let span = obj!(props([("start", int!()), ("end", int!())], &["start"]));
//! assert_eq!(span.required(), Some(vec!["start"]));
//!
//! let strict_span = obj!(req_props([("start", int!()), ("end", int!())]));
//! assert_eq!(strict_span.required(), Some(vec!["start", "end"]));
//! ```

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::trace;

use crate::document::PropertyMap;
use crate::tag::{tag, TagKind, Tagged};

/// A tagged property envelope.
pub type PropsEnvelope = Tagged<Envelope>;

/// A property map plus the names that must be present.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    properties: PropertyMap,
    required: Vec<String>,
}

impl Envelope {
    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    /// The required names, or `None` when there are none.
    pub fn required(&self) -> Option<&[String]> {
        if self.required.is_empty() {
            None
        } else {
            Some(&self.required)
        }
    }

    pub(crate) fn into_parts(self) -> (PropertyMap, Vec<String>) {
        (self.properties, self.required)
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.required.is_empty() { 1 } else { 2 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("properties", &self.properties)?;
        if !self.required.is_empty() {
            map.serialize_entry("required", &self.required)?;
        }
        map.end()
    }
}

fn envelope(properties: PropertyMap, required: Vec<String>) -> PropsEnvelope {
    trace!(
        properties = properties.len(),
        required = required.len(),
        "Tagging property envelope"
    );
    tag(TagKind::PropertyEnvelope, Envelope { properties, required })
}

/// Envelope whose required names are exactly `required`, in order.
///
/// An empty `required` omits the keyword. Names are not checked against the
/// map here; `obj` reports undeclared names.
pub fn props(properties: impl Into<PropertyMap>, required: &[&str]) -> PropsEnvelope {
    let required = required.iter().map(|name| name.to_string()).collect();
    envelope(properties.into(), required)
}

/// Envelope in which every property is required, in map order.
pub fn req_props(properties: impl Into<PropertyMap>) -> PropsEnvelope {
    let properties = properties.into();
    let required = properties.keys().map(str::to_string).collect();
    envelope(properties, required)
}
