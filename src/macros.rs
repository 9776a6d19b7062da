//! Call-site macros.

/// Capture a single variable or field access for validation.
///
/// Records the expression's source text alongside a thunk that evaluates
/// it, producing a [`Captured`](crate::resolve::Captured) handle for the
/// `_expr` guard variants. The body must be a plain access path; anything
/// else raises a usage failure at validation time, before the expression
/// is evaluated.
///
/// ```rust,ignore
/// let endpoint = not_blank_str_expr(capture!(cfg.endpoint))?;
/// let arg1 = not_null_expr(capture!(arg1))?;
/// ```
///
/// The thunk captures by move, matching the assignment-style use above.
#[macro_export]
macro_rules! capture {
    ($($body:tt)+) => {
        $crate::resolve::capture::Captured::from_expr(
            ::std::stringify!($($body)+),
            move || $($body)+,
        )
    };
}
