//! String-shape guards: emptiness, blankness, length, and integer format.

use crate::core::error::{GuardResult, ViolationKind};
use crate::core::messages;
use crate::guards::arg::Arg;
use std::any::type_name;

/// Validate that a string is present and non-empty.
#[track_caller]
pub fn not_empty_str<S: AsRef<str>>(value: impl Into<Option<S>>) -> GuardResult<S> {
    Arg::new(value.into()).not_empty_str()
}

/// Validate that a string is present and contains a non-whitespace character.
#[track_caller]
pub fn not_blank_str<S: AsRef<str>>(value: impl Into<Option<S>>) -> GuardResult<S> {
    Arg::new(value.into()).not_blank_str()
}

/// Validate that a non-blank string is at most `max` characters long.
/// Blank strings pass; combine with [`not_blank_str`] to reject them.
#[track_caller]
pub fn max_len_str<S: AsRef<str>>(value: S, max: usize) -> GuardResult<S> {
    Arg::new(value).max_len_str(max)
}

/// Validate that a string parses as a 32-bit signed integer.
/// Surrounding whitespace is tolerated.
#[track_caller]
pub fn int_str<S: AsRef<str>>(value: S) -> GuardResult<S> {
    Arg::new(value).int_str()
}

impl<S: AsRef<str>> Arg<Option<S>> {
    /// Rule form of [`not_empty_str`].
    pub fn not_empty_str(self) -> GuardResult<S> {
        let (value, request) = self.into_parts();
        match value {
            Some(text) if !text.as_ref().is_empty() => Ok(text),
            _ => Err(request.violation(
                ViolationKind::Shape,
                Some(type_name::<Option<S>>()),
                |_| messages::empty_string(),
            )),
        }
    }

    /// Rule form of [`not_blank_str`].
    pub fn not_blank_str(self) -> GuardResult<S> {
        let (value, request) = self.into_parts();
        match value {
            Some(text) if !text.as_ref().trim().is_empty() => Ok(text),
            _ => Err(request.violation(
                ViolationKind::Shape,
                Some(type_name::<Option<S>>()),
                |_| messages::blank_string(),
            )),
        }
    }
}

impl<S: AsRef<str>> Arg<S> {
    /// Rule form of [`max_len_str`].
    pub fn max_len_str(self, max: usize) -> GuardResult<S> {
        let (value, request) = self.into_parts();
        let blank = value.as_ref().trim().is_empty();
        let len = value.as_ref().chars().count();
        if blank || len <= max {
            Ok(value)
        } else {
            Err(request.violation(
                ViolationKind::Shape,
                Some(type_name::<S>()),
                |_| messages::long_string(len, max),
            ))
        }
    }

    /// Rule form of [`int_str`].
    pub fn int_str(self) -> GuardResult<S> {
        let (value, request) = self.into_parts();
        if value.as_ref().trim().parse::<i32>().is_ok() {
            Ok(value)
        } else {
            let repr = value.as_ref().to_string();
            Err(request.violation(
                ViolationKind::Shape,
                Some(type_name::<S>()),
                move |_| messages::non_int_string(&repr),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guards::arg::arg;
    use proptest::prelude::*;

    fn greet(greeting: Option<String>) -> GuardResult<String> {
        not_empty_str(greeting)
    }

    #[test]
    fn test_not_empty_str_returns_value() {
        assert_eq!(greet(Some("hello".to_string())).unwrap(), "hello");
    }

    #[test]
    fn test_not_empty_str_rejects_missing_and_empty() {
        let err = greet(None).unwrap_err();
        assert!(err.is_constraint());
        assert_eq!(err.name(), Some("greeting"));
        assert_eq!(err.message(), "Parameter cannot be null or an empty string.");

        let err = greet(Some(String::new())).unwrap_err();
        assert_eq!(err.message(), "Parameter cannot be null or an empty string.");
    }

    #[test]
    fn test_not_blank_str_rejects_whitespace() {
        let err = arg(Some("  \t ")).named("title").not_blank_str().unwrap_err();
        assert!(err.is_constraint());
        assert_eq!(err.message(), "Parameter cannot be null or whitespace.");
    }

    #[test]
    fn test_not_blank_str_accepts_content() {
        let title = not_blank_str(" chapter one ").unwrap();
        assert_eq!(title, " chapter one ");
    }

    #[test]
    fn test_max_len_str_enforces_limit() {
        let err = arg("abcdefghij").named("code").max_len_str(4).unwrap_err();
        assert_eq!(
            err.message(),
            "String argument too long, 10 characters, max 4 allowed."
        );
    }

    #[test]
    fn test_max_len_str_counts_characters_not_bytes() {
        // four characters, more than four bytes
        assert!(max_len_str("äöüß", 4).is_ok());
    }

    #[test]
    fn test_max_len_str_lets_blank_through() {
        assert!(max_len_str("        ", 2).is_ok());
    }

    #[test]
    fn test_int_str_accepts_integers() {
        assert_eq!(int_str("42").unwrap(), "42");
        assert_eq!(int_str(" -7 ").unwrap(), " -7 ");
    }

    #[test]
    fn test_int_str_rejects_non_integers() {
        let err = arg("4.5").named("port").int_str().unwrap_err();
        assert_eq!(err.message(), "'4.5' is expected to be an integer.");

        // out of 32-bit range
        let err = arg("4294967296").named("port").int_str().unwrap_err();
        assert!(err.is_constraint());
    }

    proptest! {
        #[test]
        fn prop_non_empty_strings_pass_unchanged(s in ".{1,40}") {
            prop_assume!(!s.is_empty());
            let out = arg(Some(s.clone())).named("s").not_empty_str().unwrap();
            prop_assert_eq!(out, s);
        }

        #[test]
        fn prop_short_strings_pass_max_len(s in "[a-zA-Z0-9]{0,16}") {
            let out = arg(s.clone()).named("s").max_len_str(16).unwrap();
            prop_assert_eq!(out, s);
        }

        #[test]
        fn prop_i32_strings_parse(n in any::<i32>()) {
            let text = n.to_string();
            let out = arg(text.clone()).named("n").int_str().unwrap();
            prop_assert_eq!(out, text);
        }
    }
}
