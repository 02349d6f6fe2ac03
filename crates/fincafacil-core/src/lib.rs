//! Core contracts for the FincaFácil registration engine.
//!
//! This crate defines the domain types, the raw-row input model, the
//! stateless field validators, and the store contract shared by the
//! resolver, register, and import crates.

pub mod error;
pub mod memory;
pub mod row;
pub mod store;
pub mod types;
pub mod validate;

pub use error::{FieldError, FieldErrorKind, StoreError};
pub use memory::MemoryStore;
pub use row::{RawRow, RawValue};
pub use store::{ReferenceRow, Store, TreatmentEntry, WeightEntry};
pub use types::{
    AcquisitionType, BreedRef, CanonicalRecord, Id, LifeStatus, RefKind, Sex, StoredAnimal,
};
pub use validate::{
    WeightCategory, parse_date, validate_code, validate_date, validate_email, validate_monetary,
    validate_phone, validate_weight,
};
