//! Error types for the gym ledger
//!
//! This module defines every error that can surface from the record
//! operations and the persistence gateway.
//!
//! # Error Categories
//!
//! - **Validation Errors**: age out of range, unknown package, non-numeric input
//! - **Lookup Errors**: member id not present in the registry
//! - **Parse Faults**: malformed persisted files (fatal at startup)
//! - **I/O Errors**: the data directory cannot be read or written

use thiserror::Error;

/// Main error type for the gym ledger
///
/// `InvalidInput` and `NotFound` are recoverable: the console reports them
/// inline and the session continues. `ParseFault` and `Io` are raised by the
/// persistence gateway and end the process when they occur during startup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GymError {
    /// Operator input failed a type or range check
    #[error("Invalid {field}: {message}")]
    InvalidInput {
        /// Name of the offending input (age, package, amount, ...)
        field: String,
        /// Description of the failed check
        message: String,
    },

    /// No member with the given id exists
    #[error("Member {member_id} not found")]
    NotFound {
        /// The id that was looked up
        member_id: String,
    },

    /// A persisted data file could not be parsed
    #[error("Parse fault in {file}{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseFault {
        /// File that contains the malformed record
        file: String,
        /// Line number where the fault occurred (if available)
        line: Option<u64>,
        /// Description of the fault
        message: String,
    },

    /// I/O error occurred while reading or writing data files
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for GymError {
    fn from(error: std::io::Error) -> Self {
        GymError::Io {
            message: error.to_string(),
        }
    }
}

// The file name is unknown at this level; the gateway replaces it via `in_file`.
impl From<csv::Error> for GymError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        match error.kind() {
            csv::ErrorKind::Io(io) => GymError::Io {
                message: io.to_string(),
            },
            _ => GymError::ParseFault {
                file: String::new(),
                line,
                message: error.to_string(),
            },
        }
    }
}

impl GymError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        GymError::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(member_id: &str) -> Self {
        GymError::NotFound {
            member_id: member_id.to_string(),
        }
    }

    /// Create a ParseFault error
    pub fn parse_fault(file: &str, line: Option<u64>, message: impl Into<String>) -> Self {
        GymError::ParseFault {
            file: file.to_string(),
            line,
            message: message.into(),
        }
    }

    /// Attach a file name to a ParseFault; other variants pass through
    pub fn in_file(self, file: &str) -> Self {
        match self {
            GymError::ParseFault { line, message, .. } => GymError::ParseFault {
                file: file.to_string(),
                line,
                message,
            },
            other => other,
        }
    }

    /// Whether the console can report this error and keep the session going
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GymError::InvalidInput { .. } | GymError::NotFound { .. }
        )
    }
}
