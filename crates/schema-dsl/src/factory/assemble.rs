//! Document assembly.
//!
//! Every factory builds its document through an [`Assembly`]: structural
//! keys and metadata fields are inserted in output order, and anything the
//! factory could not use is recorded as a diagnostic. Metadata never
//! replaces a structural key; a colliding key is dropped and reported.

use tracing::{debug, trace, warn};

use crate::arg::{Arg, Positional};
use crate::config::DslConfig;
use crate::document::{Document, Field, Schema};
use crate::error::{BuildError, BuildResult};
use crate::map::OrderedMap;
use crate::meta::Meta;
use crate::tag::{tag, TagKind};

pub(crate) struct Assembly {
    factory: &'static str,
    fields: OrderedMap<Field>,
    diagnostics: Vec<BuildError>,
}

impl Assembly {
    pub(crate) fn new(factory: &'static str) -> Self {
        Self {
            factory,
            fields: OrderedMap::new(),
            diagnostics: Vec::new(),
        }
    }

    pub(crate) fn structural(&mut self, key: &str, value: impl Into<Field>) {
        self.fields.insert(key, value.into());
    }

    /// Spread `meta`'s fields, skipping any key in `reserved`.
    pub(crate) fn spread(&mut self, meta: Option<&Meta>, reserved: &[&str]) {
        let Some(meta) = meta else {
            return;
        };
        for (key, field) in meta.iter() {
            if reserved.contains(&key) {
                self.diagnose(BuildError::reserved_key(self.factory, key));
                continue;
            }
            self.fields.insert(key, field.clone());
        }
    }

    pub(crate) fn unexpected(&mut self, position: usize, arg: &Arg) {
        self.diagnose(BuildError::unexpected_argument(self.factory, position, arg.kind()));
    }

    /// Record every argument left in `args` as unexpected.
    pub(crate) fn reject_rest(&mut self, args: Positional) {
        for (position, arg) in args {
            self.unexpected(position, &arg);
        }
    }

    /// Collect schema and schema-list arguments in order; anything else is
    /// unexpected.
    pub(crate) fn schemas(&mut self, args: Positional) -> Vec<Schema> {
        let mut schemas = Vec::new();
        for (position, arg) in args {
            let arg = match arg.into_schema() {
                Ok(schema) => {
                    schemas.push(schema);
                    continue;
                }
                Err(arg) => arg,
            };
            match arg.into_schemas() {
                Ok(list) => schemas.extend(list),
                Err(arg) => self.unexpected(position, &arg),
            }
        }
        schemas
    }

    pub(crate) fn diagnose(&mut self, diagnostic: BuildError) {
        trace!(
            factory = self.factory,
            code = %diagnostic.code,
            "Recorded diagnostic"
        );
        self.diagnostics.push(diagnostic);
    }

    /// Fail with a construction error.
    pub(crate) fn missing(&self, what: &str) -> BuildError {
        debug!(factory = self.factory, missing = what, "Schema construction failed");
        BuildError::missing_argument(self.factory, what)
    }

    pub(crate) fn finish(self) -> Built {
        trace!(
            factory = self.factory,
            fields = self.fields.len(),
            diagnostics = self.diagnostics.len(),
            "Assembled schema document"
        );
        Built {
            factory: self.factory,
            schema: tag(TagKind::Schema, Document::from_fields(self.fields)),
            diagnostics: self.diagnostics,
        }
    }
}

/// A finished document awaiting the diagnostic policy.
pub(crate) struct Built {
    factory: &'static str,
    schema: Schema,
    diagnostics: Vec<BuildError>,
}

impl Built {
    /// Apply `config`: the first diagnostic under a strict policy fails the
    /// call, the others are logged.
    pub(crate) fn resolve(self, config: &DslConfig) -> BuildResult<Schema> {
        for diagnostic in self.diagnostics {
            if config.policy_for(diagnostic.code).is_strict() {
                debug!(
                    factory = self.factory,
                    code = %diagnostic.code,
                    "Rejecting call under strict policy"
                );
                return Err(diagnostic);
            }
            log_tolerated(&diagnostic);
        }
        Ok(self.schema)
    }

    /// Log every diagnostic and keep the document.
    pub(crate) fn tolerate(self) -> Schema {
        for diagnostic in &self.diagnostics {
            log_tolerated(diagnostic);
        }
        self.schema
    }
}

fn log_tolerated(diagnostic: &BuildError) {
    warn!(
        factory = %diagnostic.factory,
        code = %diagnostic.code,
        position = ?diagnostic.position,
        key = ?diagnostic.key,
        "{}",
        diagnostic.message
    );
}
