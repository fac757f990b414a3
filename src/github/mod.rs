// src/github/mod.rs
// =============================================================================
// Everything that talks to GitHub.
//
// - transport: Request + the Transport trait, and the reqwest implementation
// - models: MemberRef / Profile and ApiResponse classification
// - options: QueryOptions and the per-page request
// - client: Getter, which owns a transport and a fellow registry
// - profile: Profile Fetcher
// - members: Organization Member Paginator + Multi-Organization Aggregator
// =============================================================================

mod client;
mod members;
mod models;
mod options;
mod profile;
mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::Getter;
pub use models::{ApiResponse, MemberRef, Profile};
pub use options::QueryOptions;
pub use transport::{HttpTransport, Request, Target, Transport, CLIENT_TAG};
