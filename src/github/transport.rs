// src/github/transport.rs
// =============================================================================
// The one capability the fetch pipeline needs from the outside world:
// "GET this, give me the parsed JSON body".
//
// - Request: either an absolute URL (a member's profile `url`) or an API path
//   plus query parameters, resolved against the configured GITHUB_API base
// - Transport: trait so tests can serve canned JSON without a network
// - HttpTransport: the reqwest implementation used in production
//
// The body is parsed even for non-2xx statuses: GitHub puts its error
// `message` in the body, and ApiResponse turns that into Error::Api.
// =============================================================================

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::{Config, Credentials};
use crate::error::Result;

/// Identifies this client to GitHub (sent as the User-Agent)
pub const CLIENT_TAG: &str = "getmembers";

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Url(String),
    Path {
        pathname: String,
        search_params: Vec<(String, String)>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub target: Target,
    pub client: String,
    /// Overrides the transport's configured credentials for this request
    pub credentials: Option<Credentials>,
}

impl Request {
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            target: Target::Url(url.into()),
            client: CLIENT_TAG.to_string(),
            credentials: None,
        }
    }

    pub fn path<K, V>(pathname: impl Into<String>, search_params: Vec<(K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            target: Target::Path {
                pathname: pathname.into(),
                search_params: search_params
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            },
            client: CLIENT_TAG.to_string(),
            credentials: None,
        }
    }

    pub fn with_credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    // Turns the target into a full URL.
    // The base may carry a path prefix (GitHub Enterprise uses /api/v3), which
    // is kept in front of the pathname.
    pub fn resolve(&self, api_url: &str) -> Result<Url> {
        match &self.target {
            Target::Url(url) => Ok(Url::parse(url)?),
            Target::Path {
                pathname,
                search_params,
            } => {
                let mut url = Url::parse(api_url)?;
                let path = format!(
                    "{}/{}",
                    url.path().trim_end_matches('/'),
                    pathname.trim_start_matches('/')
                );
                url.set_path(&path);
                if !search_params.is_empty() {
                    url.query_pairs_mut().extend_pairs(search_params.iter());
                }
                Ok(url)
            }
        }
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_json(&self, request: &Request) -> Result<Value>;
}

pub struct HttpTransport {
    client: Client,
    config: Config,
}

impl HttpTransport {
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    // Builds the reqwest request: client tag, accept header and auth.
    // Per-request credentials win over the configured ones.
    fn build_request(&self, request: &Request) -> Result<reqwest::Request> {
        let url = request.resolve(&self.config.api_url)?;

        // GitHub rejects requests without a User-Agent
        let builder = self
            .client
            .get(url)
            .header(USER_AGENT, request.client.as_str())
            .header(ACCEPT, GITHUB_ACCEPT);

        let builder = match request.credentials.as_ref().or(self.config.credentials.as_ref()) {
            Some(Credentials::Token(token)) => builder.header(AUTHORIZATION, format!("token {}", token)),
            Some(Credentials::ClientSecret {
                client_id,
                client_secret,
            }) => builder.basic_auth(client_id, Some(client_secret)),
            None => builder,
        };

        Ok(builder.build()?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, request: &Request) -> Result<Value> {
        let request = self.build_request(request)?;
        // Keep the URL for logging; execute() consumes the request
        let url = request.url().to_string();

        let response = self.client.execute(request).await?;
        debug!(%url, status = response.status().as_u16(), "github responded");

        // Error statuses still carry a JSON {message}, so parse every body
        let body = response.json::<Value>().await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(credentials: Option<Credentials>) -> HttpTransport {
        HttpTransport::new(Config {
            api_url: "https://api.github.com".to_string(),
            credentials,
        })
        .unwrap()
    }

    #[test]
    fn test_resolve_path_with_query() {
        let request = Request::path("/orgs/bevry/public_members", vec![("page", "2"), ("per_page", "100")]);
        let url = request.resolve("https://api.github.com").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/orgs/bevry/public_members?page=2&per_page=100"
        );
    }

    #[test]
    fn test_resolve_keeps_enterprise_prefix() {
        let request = Request::path("orgs/acme/public_members", Vec::<(String, String)>::new());
        let url = request.resolve("https://github.acme.com/api/v3/").unwrap();
        assert_eq!(url.as_str(), "https://github.acme.com/api/v3/orgs/acme/public_members");
    }

    #[test]
    fn test_resolve_absolute_url_ignores_base() {
        let request = Request::url("https://api.github.com/users/octocat");
        let url = request.resolve("https://github.acme.com/api/v3").unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/users/octocat");
    }

    #[test]
    fn test_resolve_invalid_url() {
        let request = Request::url("not a url");
        assert!(request.resolve("https://api.github.com").is_err());
    }

    #[test]
    fn test_client_tag_and_token_headers() {
        let http = transport(Some(Credentials::Token("abc".to_string())));
        let built = http
            .build_request(&Request::url("https://api.github.com/users/octocat"))
            .unwrap();
        assert_eq!(built.headers()[USER_AGENT], "getmembers");
        assert_eq!(built.headers()[ACCEPT], GITHUB_ACCEPT);
        assert_eq!(built.headers()[AUTHORIZATION], "token abc");
    }

    #[test]
    fn test_request_credentials_override_config() {
        let http = transport(Some(Credentials::Token("from-env".to_string())));
        let request = Request::url("https://api.github.com/users/octocat").with_credentials(Some(
            Credentials::ClientSecret {
                client_id: "id".to_string(),
                client_secret: "secret".to_string(),
            },
        ));
        let built = http.build_request(&request).unwrap();
        assert_eq!(built.headers()[AUTHORIZATION], "Basic aWQ6c2VjcmV0");
    }

    #[test]
    fn test_no_credentials_no_auth_header() {
        let http = transport(None);
        let built = http
            .build_request(&Request::url("https://api.github.com/users/octocat"))
            .unwrap();
        assert!(built.headers().get(AUTHORIZATION).is_none());
    }
}
