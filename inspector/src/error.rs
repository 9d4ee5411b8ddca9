//! Error taxonomy for a single inspection.
//!
//! Every variant is terminal for the invocation. [`InspectError::kind`] groups
//! variants into the categories that the exit status contract distinguishes.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::core::types::{Family, FieldSelector};
use crate::exit_codes;

/// Why an inspection could not produce a satisfied/not-satisfied answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InspectError {
    /// The link locator does not resolve to a file.
    #[error("link not found: {}", .path.display())]
    RecordNotFound { path: PathBuf },

    /// The link exists but cannot be read or parsed into a record.
    #[error("link malformed: {}: {reason}", .path.display())]
    RecordMalformed { path: PathBuf, reason: String },

    /// The requested byproduct stream is not recorded in the link.
    #[error("field '{field}' is absent from the link")]
    FieldAbsent { field: FieldSelector },

    #[error(
        "invalid {family} operator '{token}' (expected one of: {})",
        .family.operator_tokens().join(", ")
    )]
    InvalidOperator { token: String, family: Family },

    /// A known operator paired with a field of the other family.
    #[error("operator '{token}' cannot be applied to field '{field}'")]
    OperatorFamilyMismatch { token: String, field: FieldSelector },

    #[error("invalid field selector '{token}' (expected one of: stdout, stderr, exit-code)")]
    InvalidFieldSelector { token: String },

    #[error("invalid integer reference '{token}'")]
    InvalidReference { token: String },

    #[error("invalid configuration: {reason}")]
    Config { reason: String },
}

/// Coarse error category, one per error exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    RecordNotFound,
    RecordMalformed,
    FieldAbsent,
}

impl ErrorKind {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::InvalidInput => exit_codes::INVALID_INPUT,
            ErrorKind::RecordNotFound => exit_codes::RECORD_NOT_FOUND,
            ErrorKind::RecordMalformed => exit_codes::RECORD_MALFORMED,
            ErrorKind::FieldAbsent => exit_codes::FIELD_ABSENT,
        }
    }
}

impl InspectError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InspectError::RecordNotFound { .. } => ErrorKind::RecordNotFound,
            InspectError::RecordMalformed { .. } => ErrorKind::RecordMalformed,
            InspectError::FieldAbsent { .. } => ErrorKind::FieldAbsent,
            InspectError::InvalidOperator { .. }
            | InspectError::OperatorFamilyMismatch { .. }
            | InspectError::InvalidFieldSelector { .. }
            | InspectError::InvalidReference { .. }
            | InspectError::Config { .. } => ErrorKind::InvalidInput,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.kind().exit_code()
    }

    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        InspectError::RecordMalformed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
