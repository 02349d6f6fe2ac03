use thiserror::Error;
use tracing::info;

use fincafacil_core::{AcquisitionType, FieldError, Id, RawRow, Store, StoreError};
use fincafacil_resolve::StoreResolver;

use crate::builder::{BuildError, RecordBuilder};
use crate::fields;

/// Failure modes of single-record registration. Unlike batch import, a
/// store failure here aborts the whole operation.
#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("record failed validation with {} field error(s)", .0.len())]
    Invalid(Vec<FieldError>),
    #[error("unrecognized acquisition type '{0}'")]
    UnknownAcquisition(String),
    #[error("row does not specify an acquisition type")]
    MissingAcquisition,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Acquisition type for a row: the row's own `tipo_ingreso` when present,
/// else the supplied default.
pub fn acquisition_of(
    raw: &RawRow,
    default: Option<AcquisitionType>,
) -> Result<AcquisitionType, RegisterError> {
    match raw.get(fields::ACQUISITION) {
        Some(value) => {
            AcquisitionType::parse(&value).ok_or(RegisterError::UnknownAcquisition(value))
        }
        None => default.ok_or(RegisterError::MissingAcquisition),
    }
}

/// Validate and persist a single animal record: the UI registration path.
///
/// Fail-closed: the consolidated field-error list is returned before any
/// write occurs, and nothing is written unless the whole record is valid.
pub fn register_animal(store: &mut dyn Store, raw: &RawRow) -> Result<Id, RegisterError> {
    let acquisition = acquisition_of(raw, None)?;
    let builder = RecordBuilder::new();

    let record = {
        let resolver = StoreResolver::new(&*store);
        builder.build(raw, acquisition, &resolver, &*store)
    }
    .map_err(|error| match error {
        BuildError::Invalid(errors) => RegisterError::Invalid(errors),
        BuildError::Store(error) => RegisterError::Store(error),
    })?;

    let id = store.insert_animal(&record)?;
    info!(id, code = %record.code, "registered animal");
    Ok(id)
}
