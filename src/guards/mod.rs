//! The guard rule family.
//!
//! Every rule is a short, pure check: it consumes a value (plus the request
//! context used to name it) and either returns the value unchanged or raises
//! a classified failure. Free functions cover the common case of validating
//! a bare function parameter; the [`Arg`] builder adds explicit names,
//! message overrides, and frame-depth adjustment; the `_expr` variants in
//! [`expr`] take a [`capture!`](crate::capture) expression instead.

pub mod arg;
pub mod collection;
pub mod expr;
pub mod generic;
pub mod numeric;
pub mod string;

pub use arg::{arg, Arg};
pub use collection::{not_empty, Collection};
pub use expr::{
    int_str_expr, max_len_str_expr, non_negative_expr, not_blank_str_expr, not_empty_expr,
    not_empty_str_expr, not_null_expr, one_of_expr, positive_expr,
};
pub use generic::{condition, not_null, of_type_boxed, of_type_ref, one_of};
pub use numeric::{non_negative, positive};
pub use string::{int_str, max_len_str, not_blank_str, not_empty_str};
