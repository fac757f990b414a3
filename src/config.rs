// src/config.rs
// =============================================================================
// Configuration and credentials.
//
// Everything comes from environment variables (the binary loads a .env file
// first with dotenvy):
//   GITHUB_API                             API base URL
//   GITHUB_ACCESS_TOKEN / GITHUB_TOKEN     personal access token
//   GITHUB_CLIENT_ID + GITHUB_CLIENT_SECRET  OAuth app credentials
//
// A token wins over client id/secret. Empty values are treated as unset.
// =============================================================================

use crate::error::{Error, Result};

pub const DEFAULT_GITHUB_API: &str = "https://api.github.com";

// How requests authenticate against GitHub
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Sent as `Authorization: token <value>`
    Token(String),
    /// Sent as HTTP basic auth
    ClientSecret {
        client_id: String,
        client_secret: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub credentials: Option<Credentials>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_GITHUB_API.to_string(),
            credentials: None,
        }
    }
}

impl Config {
    // Reads the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Same rules as from_env, over any key -> value lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank variables count as unset
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_url = get("GITHUB_API").unwrap_or_else(|| DEFAULT_GITHUB_API.to_string());

        // A token wins; otherwise the client id/secret must come as a pair
        let token = get("GITHUB_ACCESS_TOKEN").or_else(|| get("GITHUB_TOKEN"));
        let credentials = match (token, get("GITHUB_CLIENT_ID"), get("GITHUB_CLIENT_SECRET")) {
            (Some(token), _, _) => Some(Credentials::Token(token)),
            (None, Some(client_id), Some(client_secret)) => Some(Credentials::ClientSecret {
                client_id,
                client_secret,
            }),
            (None, Some(_), None) => {
                return Err(Error::Config(
                    "GITHUB_CLIENT_ID is set but GITHUB_CLIENT_SECRET is missing".to_string(),
                ))
            }
            (None, None, Some(_)) => {
                return Err(Error::Config(
                    "GITHUB_CLIENT_SECRET is set but GITHUB_CLIENT_ID is missing".to_string(),
                ))
            }
            (None, None, None) => None,
        };

        Ok(Self {
            api_url,
            credentials,
        })
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }
}
