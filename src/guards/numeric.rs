//! Sign guards for signed integers.
//!
//! Generic over anything that widens losslessly into `i64`, so the same
//! rules cover `i8` through `i64` (and unsigned types pass trivially).

use crate::core::error::{GuardResult, ViolationKind};
use crate::core::messages;
use crate::guards::arg::Arg;
use std::any::type_name;

/// Validate that an integer is zero or greater.
#[track_caller]
pub fn non_negative<I: Into<i64> + Copy>(value: I) -> GuardResult<I> {
    Arg::new(value).non_negative()
}

/// Validate that an integer is strictly greater than zero.
#[track_caller]
pub fn positive<I: Into<i64> + Copy>(value: I) -> GuardResult<I> {
    Arg::new(value).positive()
}

impl<I: Into<i64> + Copy> Arg<I> {
    /// Rule form of [`non_negative`].
    pub fn non_negative(self) -> GuardResult<I> {
        let (value, request) = self.into_parts();
        let widened: i64 = value.into();
        if widened >= 0 {
            Ok(value)
        } else {
            Err(request.violation(
                ViolationKind::Range,
                Some(type_name::<I>()),
                |_| messages::negative_int(),
            ))
        }
    }

    /// Rule form of [`positive`].
    pub fn positive(self) -> GuardResult<I> {
        let (value, request) = self.into_parts();
        let widened: i64 = value.into();
        if widened > 0 {
            Ok(value)
        } else {
            Err(request.violation(
                ViolationKind::Range,
                Some(type_name::<I>()),
                |_| messages::non_positive_int(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guards::arg::arg;
    use proptest::prelude::*;

    fn schedule(delay_secs: i64) -> GuardResult<i64> {
        non_negative(delay_secs)
    }

    #[test]
    fn test_non_negative_accepts_zero_and_up() {
        assert_eq!(schedule(0).unwrap(), 0);
        assert_eq!(schedule(30).unwrap(), 30);
    }

    #[test]
    fn test_non_negative_rejects_negative() {
        let err = schedule(-1).unwrap_err();
        assert!(err.is_constraint());
        assert_eq!(err.name(), Some("delay_secs"));
        assert_eq!(err.message(), "Parameter cannot be negative.");
    }

    #[test]
    fn test_positive_rejects_zero() {
        let err = arg(0i32).named("page_size").positive().unwrap_err();
        assert_eq!(err.message(), "Parameter cannot be negative or zero.");
    }

    #[test]
    fn test_positive_accepts_small_int_types() {
        assert_eq!(positive(5i8).unwrap(), 5);
        assert_eq!(positive(5u32).unwrap(), 5);
    }

    proptest! {
        #[test]
        fn prop_non_negative_is_identity(n in 0i64..) {
            prop_assert_eq!(arg(n).named("n").non_negative().unwrap(), n);
        }

        #[test]
        fn prop_positive_is_identity(n in 1i64..) {
            prop_assert_eq!(arg(n).named("n").positive().unwrap(), n);
        }

        #[test]
        fn prop_negative_always_rejected(n in i64::MIN..0) {
            prop_assert!(arg(n).named("n").non_negative().is_err());
            prop_assert!(arg(n).named("n").positive().is_err());
        }
    }
}
