//! Animal registration: one pass from a raw input row to either a
//! validated [`fincafacil_core::CanonicalRecord`] or an accumulated list
//! of field-scoped errors, plus the single-record persistence entry point.

pub mod builder;
pub mod fields;
pub mod register;

pub use builder::{BuildError, RecordBuilder};
pub use register::{RegisterError, acquisition_of, register_animal};
