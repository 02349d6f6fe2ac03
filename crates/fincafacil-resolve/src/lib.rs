//! Reference resolution: human-facing display strings and bare names back
//! to canonical foreign-key ids, scoped by a parent farm where required.
//!
//! Two strategies implement the same [`ResolveRefs`] contract: a live
//! store-backed resolver for the single-record UI path, and a snapshot
//! loaded once per batch for spreadsheet import.

pub mod display;
pub mod error;
pub mod resolver;
pub mod snapshot;

pub use display::parse_display;
pub use error::ResolveError;
pub use resolver::{ResolveRefs, StoreResolver};
pub use snapshot::ReferenceSnapshot;
