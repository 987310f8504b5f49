//! Crate-wide error type.
//!
//! Every fallible operation returns [`Result`]. Nothing is retried or
//! swallowed; each variant maps to one way a lookup can go wrong:
//!
//! - [`Error::MissingApiKey`]: no credential, raised before any request
//! - [`Error::Network`] / [`Error::UnexpectedStatus`]: the HTTP exchange failed
//! - [`Error::Decode`]: the body was not the expected JSON object
//! - [`Error::UnknownRatingSource`]: a rating lookup found no matching entry

/// Crate result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the OMDb client and record accessors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No API key held and none found in the environment
    #[error("No OMDb API key set - set the {var} environment variable to a valid key")]
    MissingApiKey { var: String },

    /// Transport-level failure (connection refused, DNS, timeout, body read)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// Response body is not a valid movie JSON object
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// No rating entry with this source name
    #[error("Invalid rating source provided: {0}")]
    UnknownRatingSource(String),
}
