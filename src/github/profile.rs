// src/github/profile.rs
// =============================================================================
// Profile Fetcher: one GET of a member's `url`, classified as a profile or
// as a GitHub error. No retries.
// =============================================================================

use tracing::{debug, warn};

use crate::config::Credentials;
use crate::error::Result;
use crate::fellow::{Fellow, FellowAttributes};

use super::client::Getter;
use super::models::{ApiResponse, MemberRef, Profile};
use super::transport::Request;

impl Getter {
    // Fetches the full profile behind a member resource URL
    pub async fn fetch_profile(&self, url: &str, credentials: Option<&Credentials>) -> Result<Profile> {
        debug!(url, "fetching member profile");

        // The member's `url` is absolute, so no base path is applied
        let request = Request::url(url).with_credentials(credentials.cloned());
        let body = self.transport.get_json(&request).await?;

        // Log the failure here, where we still know which profile it was
        ApiResponse::<Profile>::from_json(body, "a profile")
            .into_result()
            .map_err(|e| {
                warn!(url, error = %e, "profile request failed");
                e
            })
    }

    // Listing entry -> profile -> fellow in the registry
    pub(crate) async fn resolve_member(
        &self,
        member: &MemberRef,
        credentials: Option<&Credentials>,
    ) -> Result<Fellow> {
        let profile = self.fetch_profile(&member.url, credentials).await?;
        // ensure() merges into an existing fellow when we have seen them before
        Ok(self.registry.ensure(FellowAttributes::from_profile(profile)))
    }
}
