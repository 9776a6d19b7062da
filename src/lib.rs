//! # Parapet - Guard Clauses That Name the Argument
//!
//! Parapet is a validation layer for defensive programming. A guard call
//! either returns the value unchanged or raises a classified failure that
//! names the offending value — and the name is inferred automatically, so
//! call sites stay short.
//!
//! ## Features
//!
//! - **Automatic naming**: failures identify the invalid argument without
//!   the caller spelling out its name
//! - **Two inference strategies**: caller-frame inspection for bare
//!   parameters, and exact expression capture via [`capture!`] for
//!   properties, fields, and locals
//! - **Classified failures**: absence, constraint, and usage failures are
//!   distinct variants, so callers can tell "missing" from "invalid"
//! - **Assignment-style chaining**: every rule returns the validated value
//! - **Overridable everywhere**: explicit names and custom messages win
//!   over inference and defaults per call
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use parapet::prelude::*;
//!
//! fn connect(endpoint: Option<String>, timeout_secs: i64) -> GuardResult<()> {
//!     // Named after the caller's parameter: "endpoint"
//!     let endpoint = not_null(endpoint)?;
//!
//!     // Explicit name and message override
//!     let timeout_secs = arg(timeout_secs)
//!         .named("timeout_secs")
//!         .message("timeout must not be negative")
//!         .non_negative()?;
//!
//!     // Exact capture of a field access: named "endpoint"
//!     let cfg = Config { endpoint };
//!     let endpoint = not_blank_str_expr(capture!(cfg.endpoint))?;
//!
//!     let _ = (endpoint, timeout_secs);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into three modules:
//!
//! - [`core`]: failure taxonomy and default messages
//! - [`resolve`]: name resolution (frame inspection and expression capture)
//! - [`guards`]: the rule family and the [`Arg`](guards::Arg) request builder
//!
//! ## Choosing a strategy
//!
//! Frame inspection is a best-effort convenience: it is exact when the
//! caller is a function with a single parameter, narrows by declared type
//! when there are several, and otherwise degrades into a descriptive
//! fallback name. Expression capture reads the identifier straight out of
//! the source text and is unaffected by optimization; prefer it whenever
//! the validated value is not a single, uniquely-typed parameter.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod core;
pub mod guards;
pub mod resolve;

mod macros;

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
/// ```rust,ignore
/// use parapet::prelude::*;
/// ```
pub mod prelude {
    // Failure taxonomy
    pub use crate::core::error::{FailureRecord, GuardError, GuardResult, ViolationKind};

    // Name resolution
    pub use crate::resolve::{Captured, FrameInspector, ResolvedName};

    // Request builder
    pub use crate::guards::arg::{arg, Arg};

    // Rules
    pub use crate::guards::collection::{not_empty, Collection};
    pub use crate::guards::generic::{condition, not_null, of_type_boxed, of_type_ref, one_of};
    pub use crate::guards::numeric::{non_negative, positive};
    pub use crate::guards::string::{int_str, max_len_str, not_blank_str, not_empty_str};

    // Expression-form rules
    pub use crate::guards::expr::{
        int_str_expr, max_len_str_expr, non_negative_expr, not_blank_str_expr, not_empty_expr,
        not_empty_str_expr, not_null_expr, one_of_expr, positive_expr,
    };

    // Capture macro
    pub use crate::capture;
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
        assert_eq!(super::NAME, "parapet");
    }

    fn open_account(owner_name: Option<String>) -> GuardResult<String> {
        let owner_name: String = not_null(owner_name)?;
        not_blank_str(owner_name)
    }

    #[test]
    fn test_guard_chain_end_to_end() {
        let owner = open_account(Some("Ada".to_string())).unwrap();
        assert_eq!(owner, "Ada");

        let err = open_account(None).unwrap_err();
        assert!(err.is_absence());
        assert_eq!(err.name(), Some("owner_name"));
    }

    #[test]
    fn test_capture_end_to_end() {
        struct Job {
            attempts: i32,
        }
        let job = Job { attempts: -1 };
        let err = non_negative_expr(capture!(job.attempts)).unwrap_err();
        assert!(err.is_constraint());
        assert_eq!(err.name(), Some("attempts"));
        assert_eq!(
            err.to_string(),
            "Parameter cannot be negative. (parameter 'attempts')"
        );
    }
}
