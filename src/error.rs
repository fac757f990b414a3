// src/error.rs
// =============================================================================
// Error type shared by every layer of the library.
//
// The fetch pipeline never retries and never recovers locally: whatever goes
// wrong surfaces to the caller of fetch_profile / fetch_org_members /
// fetch_members_from_orgs, and aborts the whole aggregate it was part of.
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display from attributes
// - #[from]: lets the ? operator convert reqwest/url errors automatically
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// GitHub answered with a `{ "message": ... }` body
    #[error("{0}")]
    Api(String),

    /// The body parsed as JSON but did not have the expected shape
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Caller passed something we refuse to send (e.g. an empty org name)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The request target could not be turned into a URL
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Network failure, or a body that was not JSON at all
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Incomplete GITHUB_* settings
    #[error("configuration error: {0}")]
    Config(String),

    #[error("concurrency limiter was closed")]
    LimiterClosed,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_message_verbatim() {
        let err = Error::Api("Not Found".to_string());
        assert_eq!(err.to_string(), "Not Found");
    }

    #[test]
    fn test_malformed_names_the_problem() {
        let err = Error::MalformedResponse("response was not an array of members".to_string());
        assert!(err.to_string().starts_with("malformed response: "));
        assert!(err.to_string().contains("not an array"));
    }
}
