// src/lib.rs
// =============================================================================
// getmembers: fetch the public members of GitHub organizations as a
// deduplicated set of fellows.
//
// Typical use:
//
//     let getter = Getter::from_env()?;
//     let fellows = getter
//         .fetch_members_from_orgs(&["bevry", "browserstate"], QueryOptions::default(), None)
//         .await?;
//
// Modules:
// - github: transport, response shapes, and the fetch operations
// - fellow: identity records, the registry, and the Fellows result set
// - pool: the concurrency limiter
// - config: GITHUB_* environment configuration and credentials
// - error: the library's Error type
// - logging: tracing subscriber setup for the binary
// =============================================================================

pub mod config;
pub mod error;
pub mod fellow;
pub mod github;
pub mod logging;
pub mod pool;

pub use config::{Config, Credentials};
pub use error::{Error, Result};
pub use fellow::{Fellow, FellowAttributes, FellowId, FellowRegistry, Fellows};
pub use github::{Getter, MemberRef, Profile, QueryOptions};
