//! Failure types for Parapet.
//!
//! Uses thiserror for structured errors with context. Failures are designed to:
//! - Carry the resolved name of the offending argument
//! - Be serializable for sending to logs or frontends
//! - Let callers distinguish "missing" from "invalid" by matching on the variant

use crate::resolve::ResolvedName;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of a rule violation, recorded before the failure is raised.
///
/// The category decides which [`GuardError`] variant the violation maps to:
/// [`ViolationKind::Null`] becomes an absence failure, everything else a
/// constraint failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    /// A required value was missing.
    Null,
    /// A present value has the wrong shape (emptiness, length, format).
    Shape,
    /// A numeric value is outside its permitted range.
    Range,
    /// A value is not a member of the allowed set.
    Membership,
    /// A value has an incompatible runtime type.
    Type,
}

/// Top-level failure type for Parapet.
///
/// Exactly three variants exist. [`GuardError::Absence`] and
/// [`GuardError::Constraint`] report problems with the value under test;
/// [`GuardError::Usage`] reports that the validation call itself was invoked
/// incorrectly (for example, a `capture!` body that is not a plain access)
/// and must never be confused with a failure of the value.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum GuardError {
    /// A required value was absent.
    #[error("{message} (parameter '{name}')")]
    Absence {
        /// Resolved or fallback name of the offending argument.
        name: String,
        /// Human-readable description of the violation.
        message: String,
    },

    /// A present value violates a shape, range, membership, or type rule.
    #[error("{}", constraint_line(.name, .message, .value_repr))]
    Constraint {
        /// Resolved or fallback name of the offending argument.
        name: String,
        /// Human-readable description of the violation.
        message: String,
        /// Display rendering of the offending value, when diagnostically useful.
        value_repr: Option<String>,
        /// Runtime type of the offending value, for type violations.
        offending_type: Option<String>,
    },

    /// The validation layer itself was used incorrectly.
    #[error("invalid guard usage: {0}")]
    Usage(String),
}

fn constraint_line(name: &str, message: &str, value_repr: &Option<String>) -> String {
    match value_repr {
        Some(value) => format!("{message} (parameter '{name}', value '{value}')"),
        None => format!("{message} (parameter '{name}')"),
    }
}

impl GuardError {
    /// Name of the offending argument. `None` for usage failures, which
    /// concern the call rather than a value.
    pub fn name(&self) -> Option<&str> {
        match self {
            GuardError::Absence { name, .. } | GuardError::Constraint { name, .. } => Some(name),
            GuardError::Usage(_) => None,
        }
    }

    /// The failure message, without the parameter-name suffix.
    pub fn message(&self) -> &str {
        match self {
            GuardError::Absence { message, .. } | GuardError::Constraint { message, .. } => message,
            GuardError::Usage(message) => message,
        }
    }

    /// Whether this failure reports a missing value.
    pub fn is_absence(&self) -> bool {
        matches!(self, GuardError::Absence { .. })
    }

    /// Whether this failure reports a present-but-invalid value.
    pub fn is_constraint(&self) -> bool {
        matches!(self, GuardError::Constraint { .. })
    }

    /// Whether this failure reports incorrect use of the validation layer.
    pub fn is_usage(&self) -> bool {
        matches!(self, GuardError::Usage(_))
    }
}

/// Result type alias for guard operations.
pub type GuardResult<T> = Result<T, GuardError>;

// ============================================================================
// Failure construction
// ============================================================================

/// A violation caught by a rule, not yet raised.
///
/// Created only when a predicate fails, and immediately converted into a
/// [`GuardError`] via [`FailureRecord::raise`]. Never retained.
#[derive(Debug)]
pub struct FailureRecord {
    /// Category of the violation.
    pub kind: ViolationKind,
    /// The name produced for this request.
    pub name: ResolvedName,
    /// Message, either the rule default or the caller's override.
    pub message: String,
    /// Display rendering of the offending value, when diagnostically useful.
    pub value_repr: Option<String>,
    /// Runtime type of the offending value, for type violations.
    pub offending_type: Option<String>,
}

impl FailureRecord {
    /// Create a record with no value or type diagnostics.
    pub fn new(kind: ViolationKind, name: ResolvedName, message: String) -> Self {
        Self {
            kind,
            name,
            message,
            value_repr: None,
            offending_type: None,
        }
    }

    /// Attach a rendering of the offending value.
    pub fn with_value(mut self, value_repr: String) -> Self {
        self.value_repr = Some(value_repr);
        self
    }

    /// Attach the runtime type of the offending value.
    pub fn with_offending_type(mut self, offending_type: String) -> Self {
        self.offending_type = Some(offending_type);
        self
    }

    /// Convert the record into the failure to raise.
    ///
    /// Null violations map to [`GuardError::Absence`]; every other kind maps
    /// to [`GuardError::Constraint`].
    pub fn raise(self) -> GuardError {
        match self.kind {
            ViolationKind::Null => GuardError::Absence {
                name: self.name.to_string(),
                message: self.message,
            },
            ViolationKind::Shape
            | ViolationKind::Range
            | ViolationKind::Membership
            | ViolationKind::Type => GuardError::Constraint {
                name: self.name.to_string(),
                message: self.message,
                value_repr: self.value_repr,
                offending_type: self.offending_type,
            },
        }
    }
}
