//! Expression-form guards.
//!
//! Each rule in the family has a variant taking a [`Captured`] expression
//! built by the [`capture!`](crate::capture) macro. The argument name comes
//! from the expression itself rather than from frame inspection, which
//! makes these the precise path for properties, fields, and locals:
//!
//! ```rust,ignore
//! let endpoint = not_blank_str_expr(capture!(cfg.endpoint))?;
//! ```

use crate::core::error::GuardResult;
use crate::guards::arg::Arg;
use crate::guards::collection::Collection;
use crate::resolve::Captured;
use std::fmt::Display;

/// Expression form of [`not_null`](crate::guards::not_null).
pub fn not_null_expr<T, F>(captured: Captured<F>) -> GuardResult<T>
where
    F: FnOnce() -> Option<T>,
{
    Arg::from_captured(captured)?.not_null()
}

/// Expression form of [`not_empty_str`](crate::guards::not_empty_str).
pub fn not_empty_str_expr<S, F>(captured: Captured<F>) -> GuardResult<S>
where
    S: AsRef<str>,
    F: FnOnce() -> Option<S>,
{
    Arg::from_captured(captured)?.not_empty_str()
}

/// Expression form of [`not_blank_str`](crate::guards::not_blank_str).
pub fn not_blank_str_expr<S, F>(captured: Captured<F>) -> GuardResult<S>
where
    S: AsRef<str>,
    F: FnOnce() -> Option<S>,
{
    Arg::from_captured(captured)?.not_blank_str()
}

/// Expression form of [`max_len_str`](crate::guards::max_len_str).
pub fn max_len_str_expr<S, F>(captured: Captured<F>, max: usize) -> GuardResult<S>
where
    S: AsRef<str>,
    F: FnOnce() -> S,
{
    Arg::from_captured(captured)?.max_len_str(max)
}

/// Expression form of [`int_str`](crate::guards::int_str).
pub fn int_str_expr<S, F>(captured: Captured<F>) -> GuardResult<S>
where
    S: AsRef<str>,
    F: FnOnce() -> S,
{
    Arg::from_captured(captured)?.int_str()
}

/// Expression form of [`not_empty`](crate::guards::not_empty).
pub fn not_empty_expr<C, F>(captured: Captured<F>) -> GuardResult<C>
where
    C: Collection,
    F: FnOnce() -> Option<C>,
{
    Arg::from_captured(captured)?.not_empty()
}

/// Expression form of [`non_negative`](crate::guards::non_negative).
pub fn non_negative_expr<I, F>(captured: Captured<F>) -> GuardResult<I>
where
    I: Into<i64> + Copy,
    F: FnOnce() -> I,
{
    Arg::from_captured(captured)?.non_negative()
}

/// Expression form of [`positive`](crate::guards::positive).
pub fn positive_expr<I, F>(captured: Captured<F>) -> GuardResult<I>
where
    I: Into<i64> + Copy,
    F: FnOnce() -> I,
{
    Arg::from_captured(captured)?.positive()
}

/// Expression form of [`one_of`](crate::guards::one_of).
pub fn one_of_expr<T, F>(captured: Captured<F>, supported: &[T]) -> GuardResult<T>
where
    T: PartialEq + Display,
    F: FnOnce() -> T,
{
    Arg::from_captured(captured)?.one_of(supported)
}
