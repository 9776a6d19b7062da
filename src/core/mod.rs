//! Core types for the Parapet validation layer.
//!
//! This module contains the foundational pieces shared by every guard:
//! - The failure taxonomy (absence / constraint / usage)
//! - Violation categories and the record raised on violation
//! - Default message functions, one per rule

pub mod error;
pub mod messages;

// Re-export commonly used types
pub use error::{FailureRecord, GuardError, GuardResult, ViolationKind};
