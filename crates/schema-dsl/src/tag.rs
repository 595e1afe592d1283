//! Tag registry.
//!
//! Every value the DSL hands out carries one of three process-wide markers:
//! [`TagKind::Schema`], [`TagKind::Metadata`] or [`TagKind::PropertyEnvelope`].
//! Factories classify their arguments by testing for these markers with
//! [`has_tag`], never by looking at the shape of a value.
//!
//! Markers live in a single `static` [`TagRegistry`] and are compared by
//! identity. A [`Tag`] cannot be constructed outside this crate, so a plain
//! JSON object that happens to look like metadata is never mistaken for it.
//!
//! The marker is not part of the wrapped value: [`Tagged`] serializes exactly
//! like the value it wraps.
//!
//! # Example
//! ```rust
//! use schema_dsl::tag::{has_tag, TagKind};
//! use schema_dsl::{int, meta, Attributes};
//!
//! let schema = int!();
//! assert!(has_tag(TagKind::Schema, &schema));
//! assert!(!has_tag(TagKind::Metadata, &schema));
//!
//! let m = meta(Attributes::new().title("Count"));
//! assert!(has_tag(TagKind::Metadata, &m));
//!
//! // A look-alike JSON object carries no marker at all.
//! let plain = serde_json::json!({ "title": "Count" });
//! assert!(!has_tag(TagKind::Metadata, &plain));
//! ```
//!
//! [`Marked`] is sealed, so no type outside this crate can claim a marker:
//!
//! ```compile_fail
//! use schema_dsl::tag::{Marked, Tag};
//!
//! struct LookAlike;
//!
//! impl Marked for LookAlike {
//!     fn marker(&self) -> Option<&'static Tag> {
//!         None
//!     }
//! }
//! ```

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Deref;

/// The three categories a tagged value can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// A finished schema document.
    Schema,
    /// A metadata wrapper produced by [`meta`](crate::meta()).
    Metadata,
    /// A property envelope produced by [`props`](crate::props()) or
    /// [`req_props`](crate::req_props()).
    PropertyEnvelope,
}

impl TagKind {
    /// Returns the name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Schema => "Schema",
            Self::Metadata => "Metadata",
            Self::PropertyEnvelope => "PropertyEnvelope",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An opaque marker. The only instances are the ones held by the registry.
#[derive(Debug)]
pub struct Tag {
    kind: TagKind,
    _sealed: (),
}

impl Tag {
    const fn new(kind: TagKind) -> Self {
        Self { kind, _sealed: () }
    }

    /// The kind this marker stands for.
    pub fn kind(&self) -> TagKind {
        self.kind
    }
}

/// Holds exactly one [`Tag`] per [`TagKind`] for the lifetime of the process.
#[derive(Debug)]
pub struct TagRegistry {
    schema: Tag,
    metadata: Tag,
    envelope: Tag,
}

static REGISTRY: TagRegistry = TagRegistry {
    schema: Tag::new(TagKind::Schema),
    metadata: Tag::new(TagKind::Metadata),
    envelope: Tag::new(TagKind::PropertyEnvelope),
};

impl TagRegistry {
    /// The process-wide registry.
    pub fn global() -> &'static TagRegistry {
        &REGISTRY
    }

    /// The marker for `kind`.
    pub(crate) fn marker(&'static self, kind: TagKind) -> &'static Tag {
        match kind {
            TagKind::Schema => &self.schema,
            TagKind::Metadata => &self.metadata,
            TagKind::PropertyEnvelope => &self.envelope,
        }
    }

    /// True iff `tag` is this registry's marker for `kind`.
    pub(crate) fn is_marker(&'static self, kind: TagKind, tag: &Tag) -> bool {
        std::ptr::eq(self.marker(kind), tag)
    }
}

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Anything that may carry a marker.
///
/// Only the crate's own types implement this trait.
pub trait Marked: sealed::Sealed {
    /// The attached marker, if any.
    fn marker(&self) -> Option<&'static Tag>;
}

impl sealed::Sealed for serde_json::Value {}

impl Marked for serde_json::Value {
    fn marker(&self) -> Option<&'static Tag> {
        None
    }
}

impl<T: Marked + ?Sized> sealed::Sealed for &T {}

impl<T: Marked + ?Sized> Marked for &T {
    fn marker(&self) -> Option<&'static Tag> {
        (**self).marker()
    }
}

/// Returns true iff `value` carries the registry's marker for `kind`.
pub fn has_tag<T: Marked + ?Sized>(kind: TagKind, value: &T) -> bool {
    value
        .marker()
        .is_some_and(|tag| TagRegistry::global().is_marker(kind, tag))
}

/// Attaches the marker for `kind` to `value`.
pub(crate) fn tag<T>(kind: TagKind, value: T) -> Tagged<T> {
    Tagged {
        marker: TagRegistry::global().marker(kind),
        value,
    }
}

/// A value together with its marker.
///
/// Derefs to the wrapped value, so field access reads as if the marker were
/// not there. Serialization ignores the marker.
#[derive(Clone)]
pub struct Tagged<T> {
    marker: &'static Tag,
    value: T,
}

impl<T> Tagged<T> {
    /// The kind of the attached marker.
    pub fn kind(&self) -> TagKind {
        self.marker.kind()
    }

    /// Borrow the wrapped value.
    pub fn inner(&self) -> &T {
        &self.value
    }

    pub(crate) fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for Tagged<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> sealed::Sealed for Tagged<T> {}

impl<T> Marked for Tagged<T> {
    fn marker(&self) -> Option<&'static Tag> {
        Some(self.marker)
    }
}

impl<T: PartialEq> PartialEq for Tagged<T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.marker, other.marker) && self.value == other.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Tagged<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(self.marker.kind().as_str())
            .field(&self.value)
            .finish()
    }
}

impl<T: Serialize> Serialize for Tagged<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}
