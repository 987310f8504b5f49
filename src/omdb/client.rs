//! OMDb HTTP client
//!
//! One endpoint, one request per lookup:
//! `GET <base>/?apikey=<key>&t=<title>`
//!
//! ## Notes
//!
//! - The client is blocking. Each call holds the calling thread until the
//!   exchange completes; the transport's default timeout applies.
//! - The whole body is read before decoding. Responses are single small JSON
//!   objects, so there is nothing to stream.
//! - A `"Response": "False"` answer is still a successful lookup. Callers
//!   check [`Movie::is_found`].
//! - The request URL carries the API key, so transport errors are returned
//!   with the URL stripped.

use crate::config::{ApiKey, OmdbConfig};
use crate::error::{Error, Result};
use crate::omdb::Movie;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Longest slice of an error body kept in [`Error::UnexpectedStatus`]
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Build the lookup URL for `title`.
///
/// Both the key and the title are percent-encoded. A trailing `/` on the
/// base URL is tolerated.
pub fn request_url(base_url: &str, api_key: &str, title: &str) -> String {
    format!(
        "{}/?apikey={}&t={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(api_key),
        urlencoding::encode(title)
    )
}

/// OMDb API client
pub struct OmdbClient {
    http_client: reqwest::blocking::Client,
    api_key: ApiKey,
    base_url: String,
}

impl OmdbClient {
    /// Create a client from `config`.
    ///
    /// The client accepts gzip-compressed responses and identifies itself
    /// with [`USER_AGENT`]. Fails only if the HTTP client cannot be built.
    pub fn new(config: OmdbConfig) -> Result<Self> {
        let api_key = config.api_key();
        if api_key.is_empty() && ApiKey::from_var(api_key.var()).is_empty() {
            tracing::warn!(
                var = api_key.var(),
                "No OMDb API key configured - lookups will fail until one is set"
            );
        }

        let http_client = reqwest::blocking::Client::builder()
            .gzip(true)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http_client,
            api_key,
            base_url: config.base_url,
        })
    }

    /// Key holder used by this client
    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the API key and export it to the environment.
    ///
    /// See [`ApiKey::set`].
    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.api_key.set(key);
    }

    /// Look up a movie by title.
    ///
    /// Fails with [`Error::MissingApiKey`] before any request when no key is
    /// available. Transport failures, non-success statuses and undecodable
    /// bodies are returned as-is; nothing is retried.
    pub fn fetch_movie(&mut self, title: &str) -> Result<Movie> {
        let url = request_url(&self.base_url, self.api_key.ensure()?, title);

        tracing::debug!(title, base_url = %self.base_url, "Fetching movie from OMDb");

        let response = self
            .http_client
            .get(&url)
            .send()
            .map_err(|e| Error::Network(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let body = response
            .bytes()
            .map_err(|e| Error::Network(e.without_url()))?;
        let movie: Movie = serde_json::from_slice(&body)?;

        tracing::debug!(title, found = movie.is_found(), "Decoded OMDb response");
        Ok(movie)
    }
}

/// Look up a movie with a client configured from the environment.
///
/// Convenience for one-off lookups; build an [`OmdbClient`] to reuse the
/// connection pool.
pub fn fetch_movie(title: &str) -> Result<Movie> {
    OmdbClient::new(OmdbConfig::from_env())?.fetch_movie(title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{clear_env, env_lock};

    fn config(var: &str, key: &str) -> OmdbConfig {
        OmdbConfig {
            api_key: key.to_string(),
            api_key_var: var.to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
        }
    }

    #[test]
    fn test_client_creation() {
        let _env = env_lock();
        let client = OmdbClient::new(config("OMDB_MINDER_TEST_CLIENT", "test-key")).unwrap();
        assert_eq!(client.api_key().value(), "test-key");
        assert_eq!(client.base_url(), "http://127.0.0.1:9");
    }

    #[test]
    fn test_default_config_targets_public_api() {
        let _env = env_lock();
        let client = OmdbClient::new(OmdbConfig::default()).unwrap();
        assert_eq!(client.base_url(), "http://www.omdbapi.com");
        assert_eq!(client.api_key().var(), "OMDB_API_KEY");
    }

    #[test]
    fn test_request_url() {
        assert_eq!(
            request_url("http://www.omdbapi.com", "12345678", "Toy Story"),
            "http://www.omdbapi.com/?apikey=12345678&t=Toy%20Story"
        );
    }

    #[test]
    fn test_request_url_trailing_slash() {
        assert_eq!(
            request_url("http://localhost:8080/", "k", "Heat"),
            "http://localhost:8080/?apikey=k&t=Heat"
        );
    }

    #[test]
    fn test_request_url_escapes_query_characters() {
        let url = request_url("http://localhost", "a&b", "Fast & Furious?=1");
        assert_eq!(
            url,
            "http://localhost/?apikey=a%26b&t=Fast%20%26%20Furious%3F%3D1"
        );
    }

    #[test]
    fn test_set_api_key_exports_to_environment() {
        let _env = env_lock();
        let var = "OMDB_MINDER_TEST_CLIENT_SET";
        let mut client = OmdbClient::new(config(var, "")).unwrap();
        client.set_api_key("TESTER12");

        assert_eq!(client.api_key().value(), "TESTER12");
        assert_eq!(std::env::var(var).unwrap(), "TESTER12");
    }

    #[test]
    fn test_fetch_without_key_fails_before_request() {
        let _env = env_lock();
        let var = "OMDB_MINDER_TEST_CLIENT_NO_KEY";
        clear_env(var);
        let mut client = OmdbClient::new(config(var, "")).unwrap();

        match client.fetch_movie("Toy Story") {
            Err(Error::MissingApiKey { var: name }) => assert_eq!(name, var),
            other => panic!("expected MissingApiKey, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_key_var_uses_default() {
        let _env = env_lock();
        let client = OmdbClient::new(config("", "k")).unwrap();
        assert_eq!(client.api_key().var(), "OMDB_API_KEY");
    }

    #[test]
    fn test_user_agent_format() {
        assert!(USER_AGENT.starts_with("omdb-minder/"));
    }
}
