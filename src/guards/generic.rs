//! Guards that apply to values of any type: presence, membership, runtime
//! type compatibility, and caller-supplied conditions.

use crate::core::error::{GuardResult, ViolationKind};
use crate::core::messages;
use crate::guards::arg::Arg;
use std::any::{type_name, Any};
use std::fmt::Display;

/// Validate that a required value is present.
///
/// Accepts either a bare value or an `Option`; returns the unwrapped value,
/// so the call can be used assignment-style. Raises an absence failure
/// named after the caller's parameter when no explicit name is given.
#[track_caller]
pub fn not_null<T>(value: impl Into<Option<T>>) -> GuardResult<T> {
    Arg::new(value.into()).not_null()
}

/// Validate that a value is one of an allowed set.
///
/// An empty `supported` slice is treated as "no values are supported" and
/// always raises.
#[track_caller]
pub fn one_of<T>(value: T, supported: &[T]) -> GuardResult<T>
where
    T: PartialEq + Display,
{
    Arg::new(value).one_of(supported)
}

/// Validate that an erased value holds the required concrete type,
/// borrowing it back on success.
#[track_caller]
pub fn of_type_ref<T: Any>(value: &dyn Any) -> GuardResult<&T> {
    Arg::new(value).of_type()
}

/// Validate that a boxed erased value holds the required concrete type,
/// unboxing it on success.
#[track_caller]
pub fn of_type_boxed<T: Any>(value: Box<dyn Any>) -> GuardResult<T> {
    Arg::new(value).of_type()
}

/// Validate a condition the caller has already evaluated.
#[track_caller]
pub fn condition(holds: bool) -> GuardResult<()> {
    Arg::new(()).satisfies(|_| holds)
}

impl<T> Arg<Option<T>> {
    /// Rule form of [`not_null`].
    pub fn not_null(self) -> GuardResult<T> {
        let (value, request) = self.into_parts();
        match value {
            Some(inner) => Ok(inner),
            None => Err(request.violation(
                ViolationKind::Null,
                Some(type_name::<Option<T>>()),
                |_| messages::null(),
            )),
        }
    }
}

impl<V: PartialEq + Display> Arg<V> {
    /// Rule form of [`one_of`].
    pub fn one_of(self, supported: &[V]) -> GuardResult<V> {
        let (value, request) = self.into_parts();
        if supported.contains(&value) {
            Ok(value)
        } else {
            let repr = value.to_string();
            Err(request
                .record(ViolationKind::Membership, Some(type_name::<V>()), |_| {
                    messages::unsupported_value(supported)
                })
                .with_value(repr)
                .raise())
        }
    }
}

impl<'a> Arg<&'a dyn Any> {
    /// Rule form of [`of_type_ref`].
    pub fn of_type<T: Any>(self) -> GuardResult<&'a T> {
        let (value, request) = self.into_parts();
        match value.downcast_ref::<T>() {
            Some(typed) => Ok(typed),
            None => Err(request.violation(
                ViolationKind::Type,
                Some(type_name::<&dyn Any>()),
                |_| messages::type_mismatch(type_name::<T>()),
            )),
        }
    }
}

impl Arg<Box<dyn Any>> {
    /// Rule form of [`of_type_boxed`].
    pub fn of_type<T: Any>(self) -> GuardResult<T> {
        let (value, request) = self.into_parts();
        match value.downcast::<T>() {
            Ok(typed) => Ok(*typed),
            Err(_) => Err(request.violation(
                ViolationKind::Type,
                Some(type_name::<Box<dyn Any>>()),
                |_| messages::type_mismatch(type_name::<T>()),
            )),
        }
    }
}
