use std::fs::File;
use std::io;
use std::path::Path;

use fincafacil_core::{AcquisitionType, RawRow, RawValue, Store};

use crate::errors::ImportError;
use crate::reconciler::{BatchReconciler, BatchResult};

/// Read spreadsheet-shaped rows from CSV. Headers are normalized
/// (lower-cased, trimmed); numeric cells come back typed.
pub fn rows_from_reader<R: io::Read>(reader: R) -> Result<Vec<RawRow>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()?
        .iter()
        .map(|header| header.trim().to_lowercase())
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let mut row = RawRow::new();
        for (idx, header) in headers.iter().enumerate() {
            let cell = record.get(idx).unwrap_or_default();
            row.set(header, RawValue::from_cell(cell));
        }
        rows.push(row);
    }
    Ok(rows)
}

pub fn rows_from_path(path: impl AsRef<Path>) -> Result<Vec<RawRow>, ImportError> {
    let file = File::open(path)?;
    rows_from_reader(file)
}

/// Read a CSV source and reconcile it in one shot.
pub fn import_csv<R: io::Read>(
    store: &mut dyn Store,
    reader: R,
    default_acquisition: Option<AcquisitionType>,
) -> Result<BatchResult, ImportError> {
    let rows = rows_from_reader(reader)?;
    let result = BatchReconciler::new(default_acquisition).reconcile(store, &rows)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_normalized_and_cells_typed() {
        let csv = " Codigo ,FINCA,peso_nacimiento\nT001,Finca A,35\n";
        let rows = rows_from_reader(csv.as_bytes()).expect("parse csv");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("codigo").as_deref(), Some("T001"));
        assert_eq!(rows[0].get("finca").as_deref(), Some("Finca A"));
        assert_eq!(rows[0].get("peso_nacimiento").as_deref(), Some("35"));
    }

    #[test]
    fn short_records_read_as_blank_cells() {
        let csv = "codigo,finca\nT001\n";
        let rows = rows_from_reader(csv.as_bytes()).expect("parse csv");
        assert_eq!(rows[0].get("codigo").as_deref(), Some("T001"));
        assert!(rows[0].get("finca").is_none());
    }
}
