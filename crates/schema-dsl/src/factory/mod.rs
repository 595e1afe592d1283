//! Schema factories.
//!
//! Each factory classifies its positional [`Arg`](crate::Arg)s by tag,
//! assembles the document through [`assemble::Assembly`] and hands back the
//! result. The free functions tolerate diagnostics; [`Dsl`](crate::Dsl)
//! applies a configured policy to the same builders.

pub(crate) mod assemble;
mod combinator;
mod primitive;
mod structured;
mod value;

pub use combinator::{all_of, any_of, one_of, Combinator};
pub use primitive::{bool, int, num, nul, str};
pub use structured::{arr, obj, rec, tup, tup_rest};
pub use value::{con, enu};

pub(crate) use combinator::build_combinator;
pub(crate) use primitive::build_primitive;
pub(crate) use structured::{build_arr, build_obj, build_rec, build_tup, build_tup_rest};
pub(crate) use value::{build_con, build_enu};
