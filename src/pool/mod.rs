// src/pool/mod.rs
// =============================================================================
// Bounded concurrency for the fetch pipeline.
//
// The same primitive caps both fan-outs:
// - profile fetches for the members listed on a page
// - organization walks inside a multi-organization fetch
// =============================================================================

mod limiter;

pub use limiter::Limiter;
