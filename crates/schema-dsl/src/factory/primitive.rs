//! Leaf schemas: `null`, `integer`, `number`, `string`, `boolean`.
//!
//! Each factory takes at most one argument, a metadata wrapper, whose fields
//! follow the `type` key.

use crate::arg::{Arg, Positional};
use crate::document::Schema;
use crate::factory::assemble::{Assembly, Built};

const RESERVED: &[&str] = &["type"];

pub(crate) fn build_primitive(
    factory: &'static str,
    type_name: &'static str,
    args: impl IntoIterator<Item = Arg>,
) -> Built {
    let mut args = Positional::new(args);
    let mut assembly = Assembly::new(factory);

    let meta = args.take_meta();
    assembly.reject_rest(args);

    assembly.structural("type", type_name);
    assembly.spread(meta.as_ref(), RESERVED);
    assembly.finish()
}

/// `{"type": "null"}`
pub fn nul(args: impl IntoIterator<Item = Arg>) -> Schema {
    build_primitive("nul", "null", args).tolerate()
}

/// `{"type": "integer"}`
pub fn int(args: impl IntoIterator<Item = Arg>) -> Schema {
    build_primitive("int", "integer", args).tolerate()
}

/// `{"type": "number"}`
pub fn num(args: impl IntoIterator<Item = Arg>) -> Schema {
    build_primitive("num", "number", args).tolerate()
}

/// `{"type": "string"}`
pub fn str(args: impl IntoIterator<Item = Arg>) -> Schema {
    build_primitive("str", "string", args).tolerate()
}

/// `{"type": "boolean"}`
pub fn bool(args: impl IntoIterator<Item = Arg>) -> Schema {
    build_primitive("bool", "boolean", args).tolerate()
}
