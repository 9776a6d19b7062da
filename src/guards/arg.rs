//! The per-call validation request.
//!
//! [`Arg`] carries a value through one validation call together with
//! everything needed to name it in a failure: an optional explicit name, an
//! optional message override, and the call-site location captured at the
//! entry point. It is created per call and consumed when the rule returns
//! or raises; nothing is retained across calls.

use crate::core::error::{FailureRecord, GuardError, GuardResult, ViolationKind};
use crate::core::messages;
use crate::resolve::frame::FrameInspector;
use crate::resolve::{Captured, ResolvedName};
use std::any::type_name;
use std::panic::Location;

/// Where the resolved name for this request will come from.
///
/// An explicit name always wins; a captured expression carries its own
/// identifier; otherwise the caller's frame is inspected on demand.
#[derive(Debug, Clone)]
enum NameSource {
    Explicit(String),
    Captured(String),
    Frame {
        depth: usize,
        call_site: &'static Location<'static>,
    },
}

/// A value under validation, plus the context needed to name it.
///
/// Start a request with [`arg`] (or any of the free guard functions, which
/// build one internally), optionally adjust it, then finish with a rule
/// method:
///
/// ```rust,ignore
/// let limit = arg(limit).named("limit").non_negative()?;
/// let token = arg(token).message("session token is required").not_null()?;
/// ```
#[derive(Debug)]
pub struct Arg<V> {
    value: V,
    source: NameSource,
    message: Option<String>,
}

/// Begin a validation request for a value.
///
/// Captures the call-site location so that, absent an explicit name, the
/// failure can be named after the caller's declared parameter.
#[track_caller]
pub fn arg<V>(value: V) -> Arg<V> {
    Arg::new(value)
}

impl<V> Arg<V> {
    /// See [`arg`].
    #[track_caller]
    pub fn new(value: V) -> Self {
        Self {
            value,
            source: NameSource::Frame {
                depth: 1,
                call_site: Location::caller(),
            },
            message: None,
        }
    }

    /// Build a request from a captured expression.
    ///
    /// Runs the structural check and evaluates the capture; a malformed
    /// capture body surfaces as [`GuardError::Usage`] before any rule runs.
    pub fn from_captured<F>(captured: Captured<F>) -> GuardResult<Self>
    where
        F: FnOnce() -> V,
    {
        let (name, value) = captured.into_parts()?;
        Ok(Self {
            value,
            source: NameSource::Captured(name),
            message: None,
        })
    }

    /// Name the argument explicitly, overriding both inference strategies.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.source = NameSource::Explicit(name.into());
        self
    }

    /// Override the rule's default failure message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Adjust the caller-relative frame depth used by name inference
    /// (1 = the direct caller of the guard entry point). Required when the
    /// guard call is wrapped in a helper layer; otherwise inference points
    /// at the wrong frame. Ignored once a name is set explicitly.
    pub fn depth(mut self, depth: usize) -> Self {
        if let NameSource::Frame { call_site, .. } = self.source {
            self.source = NameSource::Frame { depth, call_site };
        }
        self
    }

    /// Check a caller-supplied condition against the value.
    ///
    /// Returns the value unchanged when the predicate holds; otherwise
    /// raises a constraint failure naming the argument.
    pub fn satisfies(self, predicate: impl FnOnce(&V) -> bool) -> GuardResult<V> {
        let (value, request) = self.into_parts();
        if predicate(&value) {
            Ok(value)
        } else {
            Err(request.violation(
                ViolationKind::Shape,
                Some(type_name::<V>()),
                |name| messages::condition(name.as_str()),
            ))
        }
    }

    /// Split into the raw value and the resolution context. Rule
    /// implementations call this so the value can be consumed while the
    /// context stays available for failure construction.
    pub(crate) fn into_parts(self) -> (V, Request) {
        (
            self.value,
            Request {
                source: self.source,
                message: self.message,
            },
        )
    }
}

/// Resolution context for one request, kept after the value is taken out.
#[derive(Debug)]
pub(crate) struct Request {
    source: NameSource,
    message: Option<String>,
}

impl Request {
    /// Produce the name for this request. Called at most once per request,
    /// and only on the failure path; explicit and captured names are used
    /// as-is, frame inference runs here.
    fn resolve(&self, type_hint: Option<&str>) -> ResolvedName {
        match &self.source {
            NameSource::Explicit(name) => ResolvedName::Identifier(name.clone()),
            NameSource::Captured(name) => ResolvedName::Identifier(name.clone()),
            NameSource::Frame { depth, call_site } => {
                FrameInspector::with_call_site(*depth, call_site).resolve(type_hint)
            }
        }
    }

    /// Build the failure record for a violation: resolve the name, then
    /// apply the caller's message override or the rule default.
    pub(crate) fn record(
        self,
        kind: ViolationKind,
        type_hint: Option<&str>,
        default: impl FnOnce(&ResolvedName) -> String,
    ) -> FailureRecord {
        let name = self.resolve(type_hint);
        let message = self.message.unwrap_or_else(|| default(&name));
        FailureRecord::new(kind, name, message)
    }

    /// Shorthand for [`Request::record`] followed by raising.
    pub(crate) fn violation(
        self,
        kind: ViolationKind,
        type_hint: Option<&str>,
        default: impl FnOnce(&ResolvedName) -> String,
    ) -> GuardError {
        self.record(kind, type_hint, default).raise()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_name_wins() {
        let err = arg(Option::<String>::None)
            .named("explicitName")
            .not_null()
            .unwrap_err();
        assert_eq!(err.name(), Some("explicitName"));
    }

    #[test]
    fn test_message_override_wins() {
        let err = arg(Option::<i32>::None)
            .named("slot")
            .message("a slot index is required")
            .not_null()
            .unwrap_err();
        assert_eq!(err.message(), "a slot index is required");
    }

    #[test]
    fn test_satisfies_returns_value() {
        let checked = arg(10u32).named("retries").satisfies(|v| *v <= 16).unwrap();
        assert_eq!(checked, 10);
    }

    #[test]
    fn test_satisfies_names_argument_in_message() {
        let err = arg(99u32)
            .named("retries")
            .satisfies(|v| *v <= 16)
            .unwrap_err();
        assert!(err.is_constraint());
        assert_eq!(err.message(), "Argument retries did not satisfy condition.");
    }

    #[test]
    fn test_from_captured_malformed_body_is_usage() {
        let captured = Captured::from_expr("limit + 1", || 7i64);
        let err = Arg::from_captured(captured).unwrap_err();
        assert!(err.is_usage());
    }
}
