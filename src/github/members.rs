// src/github/members.rs
// =============================================================================
// Organization Member Paginator and Multi-Organization Aggregator.
//
// How an organization is walked:
// 1. Fetch one page of GET /orgs/{org}/public_members
// 2. {message} -> Error::Api, not an array -> Error::MalformedResponse,
//    [] -> done
// 3. Fetch every listed member's profile concurrently under the profile
//    limiter and ensure a Fellow for each; wait for the whole page
// 4. Ask the PageRequest for the next page (full page + page limit), or stop
//
// Pages are strictly sequential per organization. Any failure (listing or
// profile) fails the whole organization, and with it the whole aggregate.
// =============================================================================

use tracing::{debug, info, warn};

use crate::config::Credentials;
use crate::error::{Error, Result};
use crate::fellow::Fellows;
use crate::pool::Limiter;

use super::client::Getter;
use super::models::{ApiResponse, MemberRef};
use super::options::{PageRequest, QueryOptions};
use super::transport::Request;

impl Getter {
    // Fetches every public member of one organization as fellows
    pub async fn fetch_org_members(
        &self,
        org: &str,
        options: QueryOptions,
        credentials: Option<&Credentials>,
    ) -> Result<Fellows> {
        let options = options.normalized();
        let profiles = Limiter::new(options.concurrency);
        self.walk_org(org, options, credentials, &profiles).await
    }

    // Fetches the members of several organizations, with people who belong to
    // more than one organization collapsed into a single fellow.
    //
    // Organizations run under one limiter and all their profile fetches share
    // another, both capped at `options.concurrency`.
    pub async fn fetch_members_from_orgs<S>(
        &self,
        orgs: &[S],
        options: QueryOptions,
        credentials: Option<&Credentials>,
    ) -> Result<Fellows>
    where
        S: AsRef<str>,
    {
        // Nothing to do, and nothing to request
        if orgs.is_empty() {
            return Ok(Fellows::new());
        }

        let options = options.normalized();

        // Two limiters: an org holding a permit must never wait on a permit
        // from the same pool for its own profiles
        let org_limiter = Limiter::new(options.concurrency);
        let profiles = Limiter::new(options.concurrency);

        // One walk per org; `?` bails out on the first failing org
        let per_org = org_limiter
            .run_all(
                orgs.iter()
                    .map(|org| self.walk_org(org.as_ref(), options, credentials, &profiles)),
            )
            .await?;

        // Same person in two orgs -> one fellow, with the latest details
        let fellows = self.registry.flatten(per_org);
        info!(orgs = orgs.len(), fellows = fellows.len(), "fetched members from organizations");
        Ok(fellows)
    }

    async fn walk_org(
        &self,
        org: &str,
        options: QueryOptions,
        credentials: Option<&Credentials>,
        profiles: &Limiter,
    ) -> Result<Fellows> {
        if org.trim().is_empty() {
            return Err(Error::InvalidInput("organization name must not be empty".to_string()));
        }

        let mut fellows = Fellows::new();
        let mut request = PageRequest::first(org, &options);

        // Pages go one after another; only profiles run concurrently
        loop {
            let members = self.fetch_member_page(&request, credentials).await?;
            let listed = members.len();
            debug!(org, page = request.page, listed, "fetched member page");

            // An empty page means we ran out of members
            if listed == 0 {
                break;
            }

            // Whole page must resolve before we ask for the next one
            let page_fellows = profiles
                .run_all(members.iter().map(|member| self.resolve_member(member, credentials)))
                .await?;
            fellows.extend(page_fellows);

            // Full page and under the page limit? keep going
            match request.next(&options, listed) {
                Some(next) => request = next,
                None => break,
            }
        }

        info!(org, fellows = fellows.len(), last_page = request.page, "fetched organization members");
        Ok(fellows)
    }

    async fn fetch_member_page(
        &self,
        page: &PageRequest<'_>,
        credentials: Option<&Credentials>,
    ) -> Result<Vec<MemberRef>> {
        let request =
            Request::path(page.pathname(), page.search_params()).with_credentials(credentials.cloned());
        let body = self.transport.get_json(&request).await?;

        // {message} -> Api error, anything but an array -> Malformed
        ApiResponse::<Vec<MemberRef>>::from_json(body, "an array of members")
            .into_result()
            .map_err(|e| {
                warn!(org = page.org, page = page.page, error = %e, "member listing failed");
                e
            })
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why `loop` + `match request.next(...)` instead of recursion?
//    - Each page gets a fresh PageRequest value; nothing grows on the stack
//    - async fns can't call themselves without boxing the future
//
// 2. Why pass `&Limiter` into walk_org?
//    - Every org of one call borrows the same profile limiter, so the cap
//      holds across all of them
//
// 3. Why `S: AsRef<str>`?
//    - Callers can pass string literals or owned Strings alike
// -----------------------------------------------------------------------------
