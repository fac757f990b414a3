// src/github/client.rs
// =============================================================================
// Getter: the entry point of the library.
//
// Holds the transport used for every request and the fellow registry every
// fetched profile is merged into. Reusing one Getter across calls keeps
// merging into the same registry; a fresh Getter starts from nothing.
//
// The fetch operations themselves live next to their helpers:
// - profile.rs: fetch_profile
// - members.rs: fetch_org_members, fetch_members_from_orgs
// =============================================================================

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::fellow::FellowRegistry;

use super::transport::{HttpTransport, Transport};

#[derive(Clone)]
pub struct Getter {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) registry: Arc<FellowRegistry>,
}

impl Getter {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new(config)?)))
    }

    // Configuration from GITHUB_* environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }

    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            registry: Arc::new(FellowRegistry::new()),
        }
    }

    /// Share a registry between getters so their results merge
    pub fn with_registry(mut self, registry: Arc<FellowRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn registry(&self) -> &Arc<FellowRegistry> {
        &self.registry
    }
}
