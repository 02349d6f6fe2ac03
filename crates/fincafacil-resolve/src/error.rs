use thiserror::Error;

use fincafacil_core::{FieldError, FieldErrorKind, RefKind, StoreError};

/// Typed resolution failure.
///
/// `NotFound` and `CrossScope` are returned rather than raised so callers
/// can aggregate several field errors for one record instead of
/// short-circuiting on the first bad reference.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("{} '{name}' not found", .kind.label())]
    NotFound { kind: RefKind, name: String },
    #[error("{} '{name}' belongs to a different farm", .kind.label())]
    CrossScope { kind: RefKind, name: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ResolveError {
    /// Convert a `NotFound`/`CrossScope` failure into a field error.
    /// `Store` failures must be propagated instead and return `None` here.
    pub fn into_field_error(self, field: &str) -> Option<FieldError> {
        if matches!(self, Self::Store(_)) {
            return None;
        }
        Some(FieldError::new(
            FieldErrorKind::Reference,
            field,
            self.to_string(),
        ))
    }
}
