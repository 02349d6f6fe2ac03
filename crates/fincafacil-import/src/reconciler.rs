use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use fincafacil_core::{AcquisitionType, RawRow, Store, StoreError};
use fincafacil_register::{BuildError, RecordBuilder, acquisition_of};
use fincafacil_resolve::ReferenceSnapshot;

/// First data row of a spreadsheet; row 1 is the header.
const FIRST_DATA_ROW: u64 = 2;

/// One failed row, numbered by its position in the source file so the user
/// can trace it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowError {
    pub row: u64,
    pub message: String,
}

/// Full accounting of a batch: how many rows were persisted and which
/// failed. The import always runs to completion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub imported: u64,
    pub errors: Vec<RowError>,
}

/// Reconciles an ordered sequence of raw rows against the reference tables
/// and writes the valid ones.
///
/// Reference tables are snapshotted once at batch start; each valid row is
/// written immediately so later rows can reference animals created earlier
/// in the same file. Rows are processed strictly in file order.
#[derive(Debug, Clone)]
pub struct BatchReconciler {
    default_acquisition: Option<AcquisitionType>,
    builder: RecordBuilder,
}

impl BatchReconciler {
    /// `default_acquisition` applies to rows without a `tipo_ingreso` of
    /// their own.
    pub fn new(default_acquisition: Option<AcquisitionType>) -> Self {
        Self {
            default_acquisition,
            builder: RecordBuilder::new(),
        }
    }

    pub fn reconcile(
        &self,
        store: &mut dyn Store,
        rows: &[RawRow],
    ) -> Result<BatchResult, StoreError> {
        let snapshot = ReferenceSnapshot::load(&*store)?;

        let mut imported = 0u64;
        let mut errors = Vec::new();

        for (idx, raw) in rows.iter().enumerate() {
            let row = idx as u64 + FIRST_DATA_ROW;
            if raw.is_blank() {
                continue;
            }

            let acquisition = match acquisition_of(raw, self.default_acquisition) {
                Ok(acquisition) => acquisition,
                Err(error) => {
                    warn!(row, %error, "row rejected");
                    errors.push(RowError {
                        row,
                        message: error.to_string(),
                    });
                    continue;
                }
            };

            match self.builder.build(raw, acquisition, &snapshot, &*store) {
                Ok(record) => match store.insert_animal(&record) {
                    Ok(id) => {
                        debug!(row, id, code = %record.code, "row imported");
                        imported += 1;
                    }
                    Err(error) => {
                        warn!(row, %error, "store rejected row");
                        errors.push(RowError {
                            row,
                            message: error.to_string(),
                        });
                    }
                },
                Err(BuildError::Invalid(field_errors)) => {
                    let message = field_errors
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join("; ");
                    warn!(row, %message, "row failed validation");
                    errors.push(RowError { row, message });
                }
                Err(BuildError::Store(error)) => {
                    warn!(row, %error, "store failed while validating row");
                    errors.push(RowError {
                        row,
                        message: error.to_string(),
                    });
                }
            }
        }

        info!(
            rows = rows.len(),
            imported,
            failed = errors.len(),
            "batch reconciled"
        );
        Ok(BatchResult { imported, errors })
    }
}

/// One-shot entry point for callers that do not need to hold a reconciler.
pub fn import_batch(
    store: &mut dyn Store,
    rows: &[RawRow],
    default_acquisition: Option<AcquisitionType>,
) -> Result<BatchResult, StoreError> {
    BatchReconciler::new(default_acquisition).reconcile(store, rows)
}
