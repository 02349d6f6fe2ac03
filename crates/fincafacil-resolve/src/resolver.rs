use fincafacil_core::{BreedRef, Id, RefKind, Store, StoreError};

use crate::display::parse_display;
use crate::error::ResolveError;

/// Resolution strategy shared by the live and snapshot resolvers.
pub trait ResolveRefs {
    /// Map a display string (`"3 - Norte"`) or a bare name to an id.
    ///
    /// For farm-scoped kinds the lookup is filtered to exactly `scope`; a
    /// name that only exists under a different scope is a `CrossScope`
    /// failure, never a silent fallback to an unscoped match.
    fn resolve(&self, kind: RefKind, input: &str, scope: Option<Id>)
    -> Result<Id, ResolveError>;

    /// Breed lookup with the legacy compatibility path: a name with no
    /// matching row resolves to [`BreedRef::Legacy`] instead of failing.
    fn resolve_breed(&self, input: &str) -> Result<BreedRef, StoreError>;
}

/// Live resolver backed directly by the store. This is the single-record
/// (UI) path: exact, case-sensitive name matching.
pub struct StoreResolver<'a> {
    store: &'a dyn Store,
}

impl<'a> StoreResolver<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }
}

impl ResolveRefs for StoreResolver<'_> {
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
        if let Some(id) = self.store.find_id(kind, input, scope)? {
            return Ok(id);
        }
        if scope.is_some() && self.store.find_id(kind, input, None)?.is_some() {
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
        match self.store.find_id(RefKind::Breed, input, None)? {
            Some(id) => Ok(BreedRef::Id(id)),
            None => Ok(BreedRef::Legacy(input.to_string())),
        }
    }
}
