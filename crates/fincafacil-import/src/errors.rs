use thiserror::Error;

use fincafacil_core::StoreError;

/// Errors that abort an entire import before any rows are processed.
/// Per-row problems are never raised; they land in
/// [`crate::BatchResult::errors`] instead.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
