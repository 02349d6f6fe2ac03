use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::types::{CanonicalRecord, Id, RefKind, StoredAnimal};

/// A reference-table row as seen by the resolver. `scope` is the owning
/// farm id for farm-scoped kinds, `None` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRow {
    pub id: Id,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Id>,
}

/// One weight-history entry. Child rows are append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    pub weight_kg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// One sanitary-treatment entry. Child rows are append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentEntry {
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    pub product: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dose: Option<String>,
}

/// The narrow persistence contract the engine consumes.
///
/// The engine assumes a single active writer and performs no concurrency
/// control of its own; implementations are free to block. Writes take
/// `&mut self`, reads `&self`.
pub trait Store {
    /// Name lookup, optionally constrained to a parent scope. Exact
    /// case-sensitive match.
    fn find_id(
        &self,
        kind: RefKind,
        name: &str,
        scope: Option<Id>,
    ) -> Result<Option<Id>, StoreError>;

    /// Uniqueness probe for an animal code, excluding the record's own id
    /// when validating an update.
    fn exists_code(&self, code: &str, exclude_id: Option<Id>) -> Result<bool, StoreError>;

    /// Single-row write. The engine has already checked uniqueness, but the
    /// store is the final authority and fails on a violated constraint.
    fn insert_animal(&mut self, record: &CanonicalRecord) -> Result<Id, StoreError>;

    fn get_animal(&self, id: Id) -> Result<Option<StoredAnimal>, StoreError>;

    /// Lookup by code; powers parent references in import rows, where a
    /// calf names its dam by code.
    fn find_animal_by_code(&self, code: &str) -> Result<Option<StoredAnimal>, StoreError>;

    /// All rows of one reference table. Powers the batch-start snapshot.
    fn list_references(&self, kind: RefKind) -> Result<Vec<ReferenceRow>, StoreError>;

    fn append_weight(&mut self, animal_id: Id, entry: WeightEntry) -> Result<(), StoreError>;

    fn append_treatment(&mut self, animal_id: Id, entry: TreatmentEntry)
    -> Result<(), StoreError>;
}
