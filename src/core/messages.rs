//! Default failure messages for each rule.
//!
//! Plain pure functions parameterized by the violation details. Callers can
//! override any of these per call; downstream code may pattern-match on the
//! defaults, so their wording is stable.

use std::fmt::Display;

/// Default message for a missing required value.
pub fn null() -> String {
    "Parameter may not be null".to_string()
}

/// Default message for a null or empty string.
pub fn empty_string() -> String {
    "Parameter cannot be null or an empty string.".to_string()
}

/// Default message for a null, empty, or all-whitespace string.
pub fn blank_string() -> String {
    "Parameter cannot be null or whitespace.".to_string()
}

/// Default message for a string exceeding its maximum length.
pub fn long_string(len: usize, max: usize) -> String {
    format!("String argument too long, {len} characters, max {max} allowed.")
}

/// Default message for a string that does not parse as a 32-bit integer.
pub fn non_int_string(value: &str) -> String {
    format!("'{value}' is expected to be an integer.")
}

/// Default message for a null or empty collection.
pub fn empty_collection() -> String {
    "Parameter cannot be null or an empty collection.".to_string()
}

/// Default message for a negative integer.
pub fn negative_int() -> String {
    "Parameter cannot be negative.".to_string()
}

/// Default message for a zero or negative integer.
pub fn non_positive_int() -> String {
    "Parameter cannot be negative or zero.".to_string()
}

/// Default message for a value outside the allowed set.
pub fn unsupported_value<T: Display>(supported: &[T]) -> String {
    let list = supported
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("Argument value not supported. Supported values are {list}.")
}

/// Default message for a failed caller-supplied condition.
pub fn condition(name: &str) -> String {
    format!("Argument {name} did not satisfy condition.")
}

/// Default message for a runtime type mismatch.
pub fn type_mismatch(required: &str) -> String {
    format!("Parameter must be of type {required} or assignable to it.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_are_stable() {
        assert_eq!(null(), "Parameter may not be null");
        assert_eq!(empty_string(), "Parameter cannot be null or an empty string.");
        assert_eq!(blank_string(), "Parameter cannot be null or whitespace.");
        assert_eq!(
            long_string(12, 8),
            "String argument too long, 12 characters, max 8 allowed."
        );
        assert_eq!(non_int_string("abc"), "'abc' is expected to be an integer.");
        assert_eq!(
            empty_collection(),
            "Parameter cannot be null or an empty collection."
        );
        assert_eq!(negative_int(), "Parameter cannot be negative.");
        assert_eq!(non_positive_int(), "Parameter cannot be negative or zero.");
        assert_eq!(
            unsupported_value(&["apples", "pears"]),
            "Argument value not supported. Supported values are apples, pears."
        );
        assert_eq!(
            condition("count"),
            "Argument count did not satisfy condition."
        );
        assert_eq!(
            type_mismatch("Button"),
            "Parameter must be of type Button or assignable to it."
        );
    }
}
