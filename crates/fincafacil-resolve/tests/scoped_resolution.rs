use fincafacil_core::{BreedRef, MemoryStore, RefKind, Store};
use fincafacil_resolve::{ReferenceSnapshot, ResolveError, ResolveRefs, StoreResolver};

fn seeded_store() -> (MemoryStore, i64, i64) {
    let mut store = MemoryStore::new();
    let farm_a = store.add_reference(RefKind::Farm, "Finca A", None);
    let farm_b = store.add_reference(RefKind::Farm, "Finca B", None);
    store.add_reference(RefKind::Pasture, "Norte", Some(farm_a));
    store.add_reference(RefKind::Pasture, "Norte", Some(farm_b));
    store.add_reference(RefKind::Pasture, "Sur", Some(farm_b));
    store.add_reference(RefKind::Breed, "Brahman", None);
    (store, farm_a, farm_b)
}

#[test]
fn scoped_lookup_matches_under_the_right_farm_only() {
    let (store, farm_a, farm_b) = seeded_store();
    let resolver = StoreResolver::new(&store);

    let norte_a = resolver
        .resolve(RefKind::Pasture, "Norte", Some(farm_a))
        .expect("Norte under farm A");
    let norte_b = resolver
        .resolve(RefKind::Pasture, "Norte", Some(farm_b))
        .expect("Norte under farm B");
    assert_ne!(norte_a, norte_b);
}

#[test]
fn a_name_under_another_farm_is_a_cross_scope_failure() {
    let (store, farm_a, _farm_b) = seeded_store();
    let resolver = StoreResolver::new(&store);

    // "Sur" only exists under farm B; resolving it under farm A must not
    // fall back to the unscoped match.
    let err = resolver
        .resolve(RefKind::Pasture, "Sur", Some(farm_a))
        .expect_err("cross-scope");
    assert!(matches!(err, ResolveError::CrossScope { .. }));

    let err = resolver
        .resolve(RefKind::Pasture, "Oeste", Some(farm_a))
        .expect_err("not found");
    assert!(matches!(err, ResolveError::NotFound { .. }));
}

#[test]
fn display_strings_trust_the_id_prefix() {
    let (store, farm_a, _farm_b) = seeded_store();
    let resolver = StoreResolver::new(&store);

    let id = resolver
        .resolve(RefKind::Farm, "3 - Finca El Prado", None)
        .expect("id prefix");
    assert_eq!(id, 3);

    // same shape works against the snapshot
    let snapshot = ReferenceSnapshot::load(&store).expect("load snapshot");
    let id = snapshot
        .resolve(RefKind::Pasture, "7 - Norte", Some(farm_a))
        .expect("id prefix");
    assert_eq!(id, 7);
}

#[test]
fn live_resolution_is_case_sensitive_but_the_snapshot_folds_case() {
    let (store, farm_a, _farm_b) = seeded_store();

    let resolver = StoreResolver::new(&store);
    let err = resolver
        .resolve(RefKind::Pasture, "norte", Some(farm_a))
        .expect_err("live path is exact");
    assert!(matches!(err, ResolveError::NotFound { .. }));

    let snapshot = ReferenceSnapshot::load(&store).expect("load snapshot");
    let folded = snapshot
        .resolve(RefKind::Pasture, "norte", Some(farm_a))
        .expect("snapshot folds case");
    let exact = snapshot
        .resolve(RefKind::Pasture, "Norte", Some(farm_a))
        .expect("exact still wins");
    assert_eq!(folded, exact);
}

#[test]
fn exact_match_wins_over_case_insensitive_in_the_snapshot() {
    let mut store = MemoryStore::new();
    let farm = store.add_reference(RefKind::Farm, "Finca A", None);
    let upper = store.add_reference(RefKind::Pasture, "NORTE", Some(farm));
    let mixed = store.add_reference(RefKind::Pasture, "Norte", Some(farm));

    let snapshot = ReferenceSnapshot::load(&store).expect("load snapshot");
    assert_eq!(
        snapshot.resolve(RefKind::Pasture, "Norte", Some(farm)).expect("exact"),
        mixed
    );
    assert_eq!(
        snapshot.resolve(RefKind::Pasture, "NORTE", Some(farm)).expect("exact"),
        upper
    );
}

#[test]
fn unknown_breeds_fall_back_to_the_legacy_text_path() {
    let (store, _farm_a, _farm_b) = seeded_store();
    let resolver = StoreResolver::new(&store);

    let brahman = store
        .find_id(RefKind::Breed, "Brahman", None)
        .expect("store ok")
        .expect("seeded breed");
    assert_eq!(
        resolver.resolve_breed("Brahman").expect("store ok"),
        BreedRef::Id(brahman)
    );
    assert_eq!(
        resolver.resolve_breed("Criolla de la región").expect("store ok"),
        BreedRef::Legacy("Criolla de la región".to_string())
    );

    let snapshot = ReferenceSnapshot::load(&store).expect("load snapshot");
    assert_eq!(
        snapshot.resolve_breed("brahman").expect("store ok"),
        BreedRef::Id(brahman),
        "snapshot breed lookup folds case before falling back"
    );
}

#[test]
fn snapshot_does_not_see_references_added_after_load() {
    let (mut store, farm_a, _farm_b) = seeded_store();
    let snapshot = ReferenceSnapshot::load(&store).expect("load snapshot");

    store.add_reference(RefKind::Pasture, "Nuevo", Some(farm_a));

    let err = snapshot
        .resolve(RefKind::Pasture, "Nuevo", Some(farm_a))
        .expect_err("snapshot is fixed at load time");
    assert!(matches!(err, ResolveError::NotFound { .. }));
}
