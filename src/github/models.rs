// src/github/models.rs
// =============================================================================
// Shapes of the two GitHub endpoints we read:
// - GET /orgs/{org}/public_members   -> array of MemberRef
// - GET {member.url}                 -> Profile
// Either endpoint may instead answer with `{ "message": "..." }`.
//
// ApiResponse decides which of those we got, once, right after the body is
// parsed, so call sites only ever see a Result.
// =============================================================================

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

// One entry of an organization's public member listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRef {
    pub login: String,
    pub id: u64,
    /// API URL of the member's full profile
    pub url: String,
    pub html_url: String,
    #[serde(default)]
    pub node_id: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub site_admin: bool,
}

// A user's full public profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    pub id: u64,
    pub url: String,
    pub html_url: String,
    #[serde(default)]
    pub node_id: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub site_admin: bool,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub hireable: Option<bool>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub public_gists: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

// What a GitHub response body turned out to be
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Payload(T),
    ApiError(String),
    Malformed(String),
}

impl<T: DeserializeOwned> ApiResponse<T> {
    // Classifies a parsed body. `expected` names the payload for error messages,
    // e.g. "an array of members".
    pub fn from_json(body: Value, expected: &str) -> Self {
        if let Some(message) = body.get("message").and_then(Value::as_str) {
            return ApiResponse::ApiError(message.to_string());
        }

        match serde_json::from_value::<T>(body) {
            Ok(payload) => ApiResponse::Payload(payload),
            Err(e) => ApiResponse::Malformed(format!("response was not {}: {}", expected, e)),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            ApiResponse::Payload(payload) => Ok(payload),
            ApiResponse::ApiError(message) => Err(Error::Api(message)),
            ApiResponse::Malformed(reason) => Err(Error::MalformedResponse(reason)),
        }
    }
}
