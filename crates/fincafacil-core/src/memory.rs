//! In-memory reference implementation of the [`Store`] contract, used by
//! the test suites and by embedders that do not bring their own
//! persistence.

use std::collections::BTreeMap;

use crate::error::StoreError;
use crate::store::{ReferenceRow, Store, TreatmentEntry, WeightEntry};
use crate::types::{CanonicalRecord, Id, RefKind, StoredAnimal};

#[derive(Debug, Default)]
pub struct MemoryStore {
    references: BTreeMap<RefKind, Vec<ReferenceRow>>,
    animals: BTreeMap<Id, StoredAnimal>,
    records: BTreeMap<Id, CanonicalRecord>,
    weights: BTreeMap<Id, Vec<WeightEntry>>,
    treatments: BTreeMap<Id, Vec<TreatmentEntry>>,
    next_id: Id,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed one reference row and return its assigned id.
    pub fn add_reference(&mut self, kind: RefKind, name: &str, scope: Option<Id>) -> Id {
        self.next_id += 1;
        let id = self.next_id;
        self.references.entry(kind).or_default().push(ReferenceRow {
            id,
            name: name.to_string(),
            scope,
        });
        id
    }

    /// Full canonical record for a persisted animal.
    pub fn record(&self, id: Id) -> Option<&CanonicalRecord> {
        self.records.get(&id)
    }

    pub fn animal_count(&self) -> usize {
        self.animals.len()
    }

    pub fn weights(&self, animal_id: Id) -> &[WeightEntry] {
        self.weights.get(&animal_id).map_or(&[], Vec::as_slice)
    }

    pub fn treatments(&self, animal_id: Id) -> &[TreatmentEntry] {
        self.treatments.get(&animal_id).map_or(&[], Vec::as_slice)
    }
}

impl Store for MemoryStore {
    fn find_id(
        &self,
        kind: RefKind,
        name: &str,
        scope: Option<Id>,
    ) -> Result<Option<Id>, StoreError> {
        if kind == RefKind::Animal {
            return Ok(self.find_animal_by_code(name)?.map(|animal| animal.id));
        }
        let Some(rows) = self.references.get(&kind) else {
            return Ok(None);
        };
        Ok(rows
            .iter()
            .find(|row| row.name == name && (scope.is_none() || row.scope == scope))
            .map(|row| row.id))
    }

    fn exists_code(&self, code: &str, exclude_id: Option<Id>) -> Result<bool, StoreError> {
        Ok(self
            .animals
            .values()
            .any(|animal| animal.code == code && Some(animal.id) != exclude_id))
    }

    fn insert_animal(&mut self, record: &CanonicalRecord) -> Result<Id, StoreError> {
        if self.exists_code(&record.code, None)? {
            return Err(StoreError::DuplicateCode(record.code.clone()));
        }
        self.next_id += 1;
        let id = self.next_id;
        self.animals.insert(
            id,
            StoredAnimal {
                id,
                code: record.code.clone(),
                sex: record.sex,
                farm_id: record.farm_id,
            },
        );
        self.records.insert(id, record.clone());
        Ok(id)
    }

    fn get_animal(&self, id: Id) -> Result<Option<StoredAnimal>, StoreError> {
        Ok(self.animals.get(&id).cloned())
    }

    fn find_animal_by_code(&self, code: &str) -> Result<Option<StoredAnimal>, StoreError> {
        Ok(self
            .animals
            .values()
            .find(|animal| animal.code == code)
            .cloned())
    }

    fn list_references(&self, kind: RefKind) -> Result<Vec<ReferenceRow>, StoreError> {
        Ok(self.references.get(&kind).cloned().unwrap_or_default())
    }

    fn append_weight(&mut self, animal_id: Id, entry: WeightEntry) -> Result<(), StoreError> {
        if !self.animals.contains_key(&animal_id) {
            return Err(StoreError::UnknownAnimal(animal_id));
        }
        self.weights.entry(animal_id).or_default().push(entry);
        Ok(())
    }

    fn append_treatment(
        &mut self,
        animal_id: Id,
        entry: TreatmentEntry,
    ) -> Result<(), StoreError> {
        if !self.animals.contains_key(&animal_id) {
            return Err(StoreError::UnknownAnimal(animal_id));
        }
        self.treatments.entry(animal_id).or_default().push(entry);
        Ok(())
    }
}
