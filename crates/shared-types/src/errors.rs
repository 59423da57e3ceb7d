//! # Error Types
//!
//! Classification shared by every subsystem error.

use serde::{Deserialize, Serialize};

/// Error classes.
///
/// None of them is retryable: configuration errors are fatal at setup, input
/// errors go straight back to the caller, consistency errors are invariant
/// violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorClass {
    /// Invalid size lists or grid bounds, detected at setup.
    Configuration,
    /// Empty leaf set, unknown leaf, out-of-bounds coordinate, malformed artifact.
    Input,
    /// Internal invariant violation.
    Consistency,
}

impl ErrorClass {
    /// Whether the error can only be fixed by changing configuration.
    pub fn is_fatal_at_setup(&self) -> bool {
        matches!(self, Self::Configuration)
    }
}

impl std::fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "configuration"),
            Self::Input => write!(f, "input"),
            Self::Consistency => write!(f, "consistency"),
        }
    }
}
