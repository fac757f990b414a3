// src/github/testing.rs
// =============================================================================
// In-memory Transport for tests. Serves canned JSON keyed by full URL,
// records every request, and can yield a few times per request so that
// concurrent fetches actually overlap and can be counted.
//
// Unknown URLs answer like GitHub does: { "message": "Not Found" }.
// =============================================================================

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};

use crate::config::Credentials;
use crate::error::Result;

use super::models::MemberRef;
use super::transport::{Request, Transport};

pub(crate) const API: &str = "https://api.github.com";

pub(crate) fn profile_url(login: &str) -> String {
    format!("{}/users/{}", API, login)
}

pub(crate) fn listing_url(org: &str, page: u32, size: u32) -> String {
    format!("{}/orgs/{}/public_members?page={}&per_page={}", API, org, page, size)
}

pub(crate) fn member_json(login: &str) -> Value {
    json!({
        "login": login,
        "id": login.len(),
        "url": profile_url(login),
        "html_url": format!("https://github.com/{}", login),
        "type": "User",
        "site_admin": false
    })
}

pub(crate) fn member(login: &str) -> MemberRef {
    serde_json::from_value(member_json(login)).expect("member fixture")
}

pub(crate) fn profile_json(login: &str) -> Value {
    json!({
        "login": login,
        "id": login.len(),
        "url": profile_url(login),
        "html_url": format!("https://github.com/{}", login),
        "name": format!("{} name", login),
        "company": null,
        "blog": "",
        "location": "Earth",
        "email": null,
        "hireable": null,
        "bio": null,
        "public_repos": 1,
        "public_gists": 0,
        "followers": 2,
        "following": 3,
        "created_at": "2011-01-25T18:44:36Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
}

// `count` logins like "bevry-0", "bevry-1", ...
pub(crate) fn logins(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{}-{}", prefix, i)).collect()
}

#[derive(Default)]
pub(crate) struct MockTransport {
    routes: Mutex<HashMap<String, Value>>,
    requests: Mutex<Vec<(String, Option<Credentials>)>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    yields: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    // Each request yields `yields` times before answering
    pub fn with_yields(yields: usize) -> Self {
        Self {
            yields,
            ..Self::default()
        }
    }

    pub fn add_route(&self, url: &str, body: Value) {
        self.routes.lock().insert(url.to_string(), body);
    }

    pub fn add_error(&self, url: &str, message: &str) {
        self.add_route(url, json!({ "message": message }));
    }

    pub fn add_profile(&self, login: &str) {
        self.add_route(&profile_url(login), profile_json(login));
    }

    // One listing page plus a profile for every member on it
    pub fn add_listing<S: AsRef<str>>(&self, org: &str, page: u32, size: u32, members: &[S]) {
        let body: Vec<Value> = members.iter().map(|m| member_json(m.as_ref())).collect();
        self.add_route(&listing_url(org, page, size), Value::Array(body));
        for login in members {
            self.add_profile(login.as_ref());
        }
    }

    // Pages numbered from 1
    pub fn add_org(&self, org: &str, size: u32, pages: &[Vec<String>]) {
        for (index, members) in pages.iter().enumerate() {
            self.add_listing(org, index as u32 + 1, size, members.as_slice());
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().iter().map(|(url, _)| url.clone()).collect()
    }

    pub fn credentials_seen(&self) -> Vec<Option<Credentials>> {
        self.requests.lock().iter().map(|(_, c)| c.clone()).collect()
    }

    pub fn count_matching(&self, needle: &str) -> usize {
        self.requests.lock().iter().filter(|(url, _)| url.contains(needle)).count()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get_json(&self, request: &Request) -> Result<Value> {
        let url = request.resolve(API)?.to_string();
        self.requests.lock().push((url.clone(), request.credentials.clone()));

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        for _ in 0..self.yields {
            tokio::task::yield_now().await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let body = self.routes.lock().get(&url).cloned();
        Ok(body.unwrap_or_else(|| json!({ "message": "Not Found" })))
    }
}
