//! Configured front-end.
//!
//! [`Dsl`] exposes the same factories as the free functions, but applies its
//! [`DslConfig`] to every diagnostic and returns [`BuildResult`] throughout.
//!
//! # Example
//! ```rust
//! use schema_dsl::{meta, Arg, Attributes, BuildErrorCode, Dsl};
//!
//! let dsl = Dsl::strict();
//! let err = dsl
//!     .int([Arg::from(meta(Attributes::new().set("type", "string")))])
//!     .unwrap_err();
//! assert_eq!(err.code, BuildErrorCode::ReservedKey);
//!
//! let count = Dsl::default().int([Arg::from(meta(Attributes::new().set("type", "string")))]).unwrap();
//! assert_eq!(count.type_name(), Some("integer"));
//! ```

use tracing::debug;

use crate::arg::Arg;
use crate::config::DslConfig;
use crate::document::Schema;
use crate::error::BuildResult;
use crate::factory::{
    build_arr, build_combinator, build_con, build_enu, build_obj, build_primitive, build_rec,
    build_tup, build_tup_rest, Combinator,
};

/// Schema factories bound to a [`DslConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dsl {
    config: DslConfig,
}

impl Dsl {
    pub fn new(config: DslConfig) -> Self {
        debug!(?config, "Creating schema DSL");
        Self { config }
    }

    /// A front-end that turns every diagnostic into an error.
    pub fn strict() -> Self {
        Self::new(DslConfig::strict())
    }

    pub fn config(&self) -> &DslConfig {
        &self.config
    }

    pub fn nul(&self, args: impl IntoIterator<Item = Arg>) -> BuildResult<Schema> {
        build_primitive("nul", "null", args).resolve(&self.config)
    }

    pub fn int(&self, args: impl IntoIterator<Item = Arg>) -> BuildResult<Schema> {
        build_primitive("int", "integer", args).resolve(&self.config)
    }

    pub fn num(&self, args: impl IntoIterator<Item = Arg>) -> BuildResult<Schema> {
        build_primitive("num", "number", args).resolve(&self.config)
    }

    pub fn str(&self, args: impl IntoIterator<Item = Arg>) -> BuildResult<Schema> {
        build_primitive("str", "string", args).resolve(&self.config)
    }

    pub fn bool(&self, args: impl IntoIterator<Item = Arg>) -> BuildResult<Schema> {
        build_primitive("bool", "boolean", args).resolve(&self.config)
    }

    pub fn obj(&self, args: impl IntoIterator<Item = Arg>) -> BuildResult<Schema> {
        build_obj(args).resolve(&self.config)
    }

    pub fn arr(&self, args: impl IntoIterator<Item = Arg>) -> BuildResult<Schema> {
        build_arr(args)?.resolve(&self.config)
    }

    pub fn tup(&self, args: impl IntoIterator<Item = Arg>) -> BuildResult<Schema> {
        build_tup(args)?.resolve(&self.config)
    }

    pub fn tup_rest(&self, args: impl IntoIterator<Item = Arg>) -> BuildResult<Schema> {
        build_tup_rest(args)?.resolve(&self.config)
    }

    pub fn rec(&self, args: impl IntoIterator<Item = Arg>) -> BuildResult<Schema> {
        build_rec(args)?.resolve(&self.config)
    }

    pub fn enu(&self, args: impl IntoIterator<Item = Arg>) -> BuildResult<Schema> {
        build_enu(args)?.resolve(&self.config)
    }

    pub fn con(&self, args: impl IntoIterator<Item = Arg>) -> BuildResult<Schema> {
        build_con(args)?.resolve(&self.config)
    }

    pub fn any_of(&self, args: impl IntoIterator<Item = Arg>) -> BuildResult<Schema> {
        build_combinator(Combinator::AnyOf, args)?.resolve(&self.config)
    }

    pub fn one_of(&self, args: impl IntoIterator<Item = Arg>) -> BuildResult<Schema> {
        build_combinator(Combinator::OneOf, args)?.resolve(&self.config)
    }

    pub fn all_of(&self, args: impl IntoIterator<Item = Arg>) -> BuildResult<Schema> {
        build_combinator(Combinator::AllOf, args)?.resolve(&self.config)
    }
}
