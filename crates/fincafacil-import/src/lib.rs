//! Bulk import: spreadsheet-shaped rows reconciled against the reference
//! tables with partial-failure semantics. One bad row never aborts the
//! batch; the caller gets a full accounting of successes and failures.

pub mod errors;
pub mod reconciler;
pub mod rows;

pub use errors::ImportError;
pub use reconciler::{BatchReconciler, BatchResult, RowError, import_batch};
pub use rows::{import_csv, rows_from_path, rows_from_reader};
