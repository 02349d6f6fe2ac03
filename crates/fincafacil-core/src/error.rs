use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Id;

/// Classification of a field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// A mandatory field is empty.
    Missing,
    /// The value does not match its required shape.
    Format,
    /// A numeric or date value is outside its allowed bounds.
    Range,
    /// A named entity could not be resolved, or resolved outside its scope.
    Reference,
    /// The code already exists.
    Uniqueness,
}

/// A field-scoped validation failure.
///
/// These are accumulated per record and reported together; a single bad
/// field never short-circuits validation of the rest of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(
        kind: FieldErrorKind,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Failures of the persistence layer itself. Unlike [`FieldError`], these
/// are fatal for the current record (batch mode) or the whole operation
/// (single-record mode).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate animal code '{0}'")]
    DuplicateCode(String),
    #[error("unknown animal id {0}")]
    UnknownAnimal(Id),
    #[error("store backend error: {0}")]
    Backend(String),
}
