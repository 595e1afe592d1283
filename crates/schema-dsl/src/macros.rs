//! Call-site sugar for the factories.
//!
//! Every factory takes `impl IntoIterator<Item = Arg>`. The macros convert
//! each argument with [`Arg::from`](crate::Arg), so calls read like the
//! documents they build:
//!
//! ```rust
//! use schema_dsl::{arr, int, meta, Attributes};
//!
//! let pair = arr!(meta(Attributes::new().title("Pair")), int!()).unwrap();
//! assert_eq!(pair.to_json(), r#"{"type":"array","title":"Pair","items":{"type":"integer"}}"#);
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __args {
    ($($arg:expr),* $(,)?) => {{
        let args: ::std::vec::Vec<$crate::Arg> = ::std::vec![$($crate::Arg::from($arg)),*];
        args
    }};
}

/// `nul!()` or `nul!(meta)`.
#[macro_export]
macro_rules! nul {
    ($($arg:expr),* $(,)?) => {
        $crate::nul($crate::__args!($($arg),*))
    };
}

/// `int!()` or `int!(meta)`.
#[macro_export]
macro_rules! int {
    ($($arg:expr),* $(,)?) => {
        $crate::int($crate::__args!($($arg),*))
    };
}

/// `num!()` or `num!(meta)`.
#[macro_export]
macro_rules! num {
    ($($arg:expr),* $(,)?) => {
        $crate::num($crate::__args!($($arg),*))
    };
}

/// `str!()` or `str!(meta)`.
#[macro_export]
macro_rules! str {
    ($($arg:expr),* $(,)?) => {
        $crate::str($crate::__args!($($arg),*))
    };
}

/// `bool!()` or `bool!(meta)`.
#[macro_export]
macro_rules! bool {
    ($($arg:expr),* $(,)?) => {
        $crate::bool($crate::__args!($($arg),*))
    };
}

/// `obj!()`, `obj!(envelope)`, `obj!(meta)` or `obj!(meta, envelope)`.
#[macro_export]
macro_rules! obj {
    ($($arg:expr),* $(,)?) => {
        $crate::obj($crate::__args!($($arg),*))
    };
}

/// `arr!(items)` or `arr!(meta, items)`.
#[macro_export]
macro_rules! arr {
    ($($arg:expr),* $(,)?) => {
        $crate::arr($crate::__args!($($arg),*))
    };
}

/// `tup!(a, b, ...)`, `tup!([a, b])` or `tup!(meta, a, b, ...)`.
#[macro_export]
macro_rules! tup {
    ($($arg:expr),* $(,)?) => {
        $crate::tup($crate::__args!($($arg),*))
    };
}

/// `tup_rest!([a, b], rest)` or `tup_rest!(meta, [a, b], rest)`.
#[macro_export]
macro_rules! tup_rest {
    ($($arg:expr),* $(,)?) => {
        $crate::tup_rest($crate::__args!($($arg),*))
    };
}

/// `rec!(values)` or `rec!(meta, values)`.
#[macro_export]
macro_rules! rec {
    ($($arg:expr),* $(,)?) => {
        $crate::rec($crate::__args!($($arg),*))
    };
}

/// `enu!(v1, v2, ...)` or `enu!(meta, v1, ...)`.
#[macro_export]
macro_rules! enu {
    ($($arg:expr),* $(,)?) => {
        $crate::enu($crate::__args!($($arg),*))
    };
}

/// `con!(v)` or `con!(meta, v)`.
#[macro_export]
macro_rules! con {
    ($($arg:expr),* $(,)?) => {
        $crate::con($crate::__args!($($arg),*))
    };
}

/// `any_of!(a, b, ...)` or `any_of!(meta, a, b, ...)`.
#[macro_export]
macro_rules! any_of {
    ($($arg:expr),* $(,)?) => {
        $crate::any_of($crate::__args!($($arg),*))
    };
}

/// `one_of!(a, b, ...)` or `one_of!(meta, a, b, ...)`.
#[macro_export]
macro_rules! one_of {
    ($($arg:expr),* $(,)?) => {
        $crate::one_of($crate::__args!($($arg),*))
    };
}

/// `all_of!(a, b, ...)` or `all_of!(meta, a, b, ...)`.
#[macro_export]
macro_rules! all_of {
    ($($arg:expr),* $(,)?) => {
        $crate::all_of($crate::__args!($($arg),*))
    };
}

/// `props!(map)` or `props!(map, "a", "b")`: required names as trailing
/// arguments.
#[macro_export]
macro_rules! props {
    ($properties:expr $(, $required:expr)* $(,)?) => {
        $crate::props($properties, &[$($required),*])
    };
}
