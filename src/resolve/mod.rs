//! Name resolution for validated arguments.
//!
//! Answers "what should we call this value in a failure message?" using
//! whichever evidence is available:
//!
//! - [`frame`]: inspection of the caller's call frame and its declared
//!   parameter list, recovered from the call-site location. Best effort;
//!   degrades into a descriptive fallback, never an error.
//! - [`capture`]: structural capture of a single variable or field access
//!   written inline by the caller, via the [`capture!`](crate::capture)
//!   macro. Exact; the recommended path whenever the argument is not a
//!   single, uniquely-typed function parameter.

pub mod capture;
pub mod frame;
pub(crate) mod signature;

pub use capture::Captured;
pub use frame::FrameInspector;

use std::fmt;

/// The name attached to a failure, identifying which value was invalid.
///
/// Produced at most once per validation request. A fallback is not an error:
/// it degrades the failure message while still describing what happened and
/// how to get a precise name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedName {
    /// A real identifier recovered from the call site.
    Identifier(String),
    /// A descriptive placeholder used when no identifier could be recovered.
    Fallback(String),
}

impl ResolvedName {
    /// The name as a string slice, whichever way it was produced.
    pub fn as_str(&self) -> &str {
        match self {
            ResolvedName::Identifier(name) | ResolvedName::Fallback(name) => name,
        }
    }

    /// Whether this is a descriptive fallback rather than a real identifier.
    pub fn is_fallback(&self) -> bool {
        matches!(self, ResolvedName::Fallback(_))
    }
}

impl fmt::Display for ResolvedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
