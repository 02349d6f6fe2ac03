use std::collections::BTreeMap;

use fincafacil_core::{BreedRef, Id, RefKind, ReferenceRow, Store, StoreError};

use crate::display::parse_display;
use crate::error::ResolveError;
use crate::resolver::ResolveRefs;

/// Reference tables loaded once at batch start.
///
/// A bulk import is a one-shot offline operation; rows added to the store
/// mid-batch are intentionally invisible to the snapshot. Spreadsheet data
/// is hand-typed, so name matching here is two-pass: exact case-sensitive
/// first, then case-insensitive, before declaring the name not found.
#[derive(Debug, Clone)]
pub struct ReferenceSnapshot {
    tables: BTreeMap<RefKind, Vec<ReferenceRow>>,
}

impl ReferenceSnapshot {
    /// The reference tables a batch resolves against. Animals are excluded:
    /// parent references resolve live so later rows can see animals written
    /// earlier in the same batch.
    pub const KINDS: [RefKind; 8] = [
        RefKind::Farm,
        RefKind::Breed,
        RefKind::Pasture,
        RefKind::Lot,
        RefKind::Sector,
        RefKind::Vendor,
        RefKind::ProcurementSource,
        RefKind::BodyCondition,
    ];

    pub fn load(store: &dyn Store) -> Result<Self, StoreError> {
        let mut tables = BTreeMap::new();
        for kind in Self::KINDS {
            tables.insert(kind, store.list_references(kind)?);
        }
        Ok(Self { tables })
    }

    fn lookup(&self, kind: RefKind, name: &str, scope: Option<Id>) -> Option<Id> {
        let rows = self.tables.get(&kind)?;
        let in_scope =
            |row: &&ReferenceRow| scope.is_none() || row.scope == scope;
        if let Some(row) = rows.iter().filter(in_scope).find(|row| row.name == name) {
            return Some(row.id);
        }
        let folded = name.to_lowercase();
        rows.iter()
            .filter(in_scope)
            .find(|row| row.name.to_lowercase() == folded)
            .map(|row| row.id)
    }
}

impl ResolveRefs for ReferenceSnapshot {
    fn resolve(
        &self,
        kind: RefKind,
        input: &str,
        scope: Option<Id>,
    ) -> Result<Id, ResolveError> {
        let input = input.trim();
        if let Some((id, _name)) = parse_display(input) {
            return Ok(id);
        }
        let scope = if kind.is_farm_scoped() { scope } else { None };
        if let Some(id) = self.lookup(kind, input, scope) {
            return Ok(id);
        }
        if scope.is_some() && self.lookup(kind, input, None).is_some() {
            return Err(ResolveError::CrossScope {
                kind,
                name: input.to_string(),
            });
        }
        Err(ResolveError::NotFound {
            kind,
            name: input.to_string(),
        })
    }

    fn resolve_breed(&self, input: &str) -> Result<BreedRef, StoreError> {
        let input = input.trim();
        if let Some((id, _name)) = parse_display(input) {
            return Ok(BreedRef::Id(id));
        }
        match self.lookup(RefKind::Breed, input, None) {
            Some(id) => Ok(BreedRef::Id(id)),
            None => Ok(BreedRef::Legacy(input.to_string())),
        }
    }
}
