// src/fellow/mod.rs
// =============================================================================
// Identity model for fetched members.
//
// - record: the Fellow itself and the attributes ensure() accepts
// - registry: idempotent upsert by identity, plus flatten()
// - collection: Fellows, the deduplicated result set every fetch returns
// =============================================================================

mod collection;
mod record;
mod registry;

pub use collection::Fellows;
pub use record::{Fellow, FellowAttributes, FellowId};
pub use registry::FellowRegistry;
