//! Expression capture: recover an argument name and value from a single
//! access expression written inline by the caller.
//!
//! The [`capture!`](crate::capture) macro records the source text of its
//! body alongside a thunk that evaluates it. The body must be a plain
//! access path (`value`, `owner.field`, `cfg.limits.max`); the final path
//! segment becomes the resolved name. Anything else is a usage error,
//! raised before the thunk is ever evaluated. Because the name is read from
//! the expression itself, this path needs no stack walking and is
//! unaffected by optimization.

use crate::core::error::{GuardError, GuardResult};

/// A captured access expression: its source text plus a thunk that
/// evaluates it exactly once.
///
/// Built only by the [`capture!`](crate::capture) macro and consumed by a
/// single validation call.
#[derive(Debug)]
pub struct Captured<F> {
    expr: &'static str,
    thunk: F,
}

impl<F> Captured<F> {
    /// Package an expression's source text with its evaluation thunk.
    /// Prefer the [`capture!`](crate::capture) macro, which keeps the two
    /// in sync by construction.
    pub fn from_expr(expr: &'static str, thunk: F) -> Self {
        Self { expr, thunk }
    }

    /// The captured source text.
    pub fn expr(&self) -> &'static str {
        self.expr
    }

    /// Structurally check the expression, then evaluate it.
    ///
    /// Returns the accessed identifier's name and the current value. The
    /// structural check runs first, so a malformed expression fails with
    /// [`GuardError::Usage`] without executing any caller code.
    pub fn into_parts<V>(self) -> GuardResult<(String, V)>
    where
        F: FnOnce() -> V,
    {
        let name = access_name(self.expr)?;
        log::trace!("name resolution via captured expression `{}`: {name}", self.expr);
        let value = (self.thunk)();
        Ok((name, value))
    }
}

/// Extract the accessed identifier from an expression's source text.
///
/// Accepts only a dot-separated path of identifiers, optionally rooted at
/// `self`, and returns the final segment. Everything else (calls, indexing,
/// literals, operators) is rejected as a usage error.
pub(crate) fn access_name(expr: &str) -> GuardResult<String> {
    let reject = || {
        GuardError::Usage(format!(
            "capture body `{expr}` is not a single variable or field access; \
             use a form like `value` or `owner.field`"
        ))
    };

    let segments: Vec<&str> = expr.split('.').map(str::trim).collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(reject());
    }
    for (index, segment) in segments.iter().enumerate() {
        let plain_ident = is_identifier(segment);
        let self_root = index == 0 && *segment == "self";
        if !plain_ident && !self_root {
            return Err(reject());
        }
    }
    let last = segments[segments.len() - 1];
    // `self` alone accesses no named member.
    if last == "self" {
        return Err(reject());
    }
    Ok(last.to_string())
}

fn is_identifier(text: &str) -> bool {
    if text == "self" {
        return false;
    }
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_plain_variable() {
        assert_eq!(access_name("arg1").unwrap(), "arg1");
    }

    #[test]
    fn test_field_access() {
        assert_eq!(access_name("cfg.limits").unwrap(), "limits");
        assert_eq!(access_name("cfg.limits.max").unwrap(), "max");
        assert_eq!(access_name("self.endpoint").unwrap(), "endpoint");
    }

    #[test]
    fn test_spaced_tokens_are_tolerated() {
        // stringify! may join tokens with spaces
        assert_eq!(access_name("self . endpoint").unwrap(), "endpoint");
    }

    #[test]
    fn test_rejected_shapes() {
        for bad in [
            "fetch()",
            "a + b",
            "items[0]",
            "42",
            "\"literal\"",
            "self",
            "owner.method()",
            "*ptr",
            "",
        ] {
            let err = access_name(bad).unwrap_err();
            assert!(err.is_usage(), "`{bad}` should be a usage error");
        }
    }

    #[test]
    fn test_value_extracted_once() {
        let calls = Cell::new(0u32);
        let captured = Captured::from_expr("amount", || {
            calls.set(calls.get() + 1);
            41i64
        });
        let (name, value) = captured.into_parts().unwrap();
        assert_eq!(name, "amount");
        assert_eq!(value, 41);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_malformed_expression_never_evaluates() {
        let captured = Captured::from_expr("total()", || {
            panic!("thunk must not run for a malformed capture");
        });
        let err = captured.into_parts::<i64>().unwrap_err();
        assert!(err.is_usage());
    }
}
