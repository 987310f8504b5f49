//! API key holder and client configuration.
//!
//! The key is read from the environment at the composition root and then
//! owned by the client; there is no process-global credential. The variable
//! name is configurable so that several clients (or tests) can use
//! different variables side by side.
//!
//! Environment:
//! - `OMDB_API_KEY` - the provider API key
//! - `OMDB_BASE_URL` - optional endpoint override (defaults to the public API)

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable holding the OMDb API key
pub const API_KEY_VAR: &str = "OMDB_API_KEY";

/// Environment variable overriding the endpoint
pub const BASE_URL_VAR: &str = "OMDB_BASE_URL";

/// Public OMDb endpoint. Free tier allows 1000 requests per day.
pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com";

/// Read an environment variable, treating unset and non-UTF-8 as empty.
fn read_var(var: &str) -> String {
    std::env::var(var).unwrap_or_default()
}

/// Whether `var` can be handed to [`std::env::set_var`] without panicking
fn is_valid_var(var: &str) -> bool {
    !var.is_empty() && !var.contains(|c: char| c == '=' || c == '\0')
}

/// `var`, or `OMDB_API_KEY` when `var` is not a usable variable name.
fn checked_var(var: String) -> String {
    if is_valid_var(&var) {
        var
    } else {
        tracing::warn!(var = ?var, "Invalid API key variable name, using {}", API_KEY_VAR);
        API_KEY_VAR.to_string()
    }
}

// ============================================================================
// API Key
// ============================================================================

/// Holds the OMDb API key together with the environment variable it mirrors.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    var: String,
    value: String,
}

impl ApiKey {
    /// Initialise from `OMDB_API_KEY` (empty if unset)
    pub fn from_env() -> Self {
        Self::from_var(API_KEY_VAR)
    }

    /// Initialise from an arbitrary environment variable (empty if unset).
    ///
    /// An empty name, or one containing `=` or NUL, is replaced by
    /// `OMDB_API_KEY`.
    pub fn from_var(var: impl Into<String>) -> Self {
        let var = checked_var(var.into());
        let value = read_var(&var);
        Self { var, value }
    }

    /// Build a holder with an explicit value, bound to `var`.
    ///
    /// The environment is not touched until [`ApiKey::set`] is called.
    /// Invalid variable names fall back to `OMDB_API_KEY`, as in
    /// [`ApiKey::from_var`].
    pub fn new(var: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            var: checked_var(var.into()),
            value: value.into(),
        }
    }

    /// Name of the environment variable this key mirrors
    pub fn var(&self) -> &str {
        &self.var
    }

    /// Currently held value (may be empty)
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Store a new key and export it to the bound environment variable.
    ///
    /// The held value is re-read from the environment afterwards, so the
    /// two always agree. No validation is performed; the environment cannot
    /// hold NUL bytes, so the value is cut at the first one.
    pub fn set(&mut self, value: impl Into<String>) {
        let mut value = value.into();
        if let Some(nul) = value.find('\0') {
            value.truncate(nul);
        }
        // SAFETY: the key is configured once at startup, before any other
        // thread reads the environment.
        unsafe { std::env::set_var(&self.var, &value) };
        self.value = read_var(&self.var);
    }

    /// Check that a key is available.
    ///
    /// If the held value is empty, it is refreshed from the environment.
    /// Fails with [`Error::MissingApiKey`] when both are empty.
    pub fn ensure(&mut self) -> Result<&str> {
        if self.value.is_empty() {
            self.value = read_var(&self.var);
            if self.value.is_empty() {
                return Err(Error::MissingApiKey {
                    var: self.var.clone(),
                });
            }
        }
        Ok(&self.value)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKey")
            .field("var", &self.var)
            .field("value", &redact(&self.value))
            .finish()
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() { "<unset>" } else { "<redacted>" }
}

// ============================================================================
// Client Configuration
// ============================================================================

/// OMDb client configuration.
///
/// Serde-derived with defaults so a host application can embed it in its
/// own config file; missing fields fall back to [`OmdbConfig::default`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OmdbConfig {
    /// API key (empty = look it up in `api_key_var` on first use)
    pub api_key: String,

    /// Environment variable the key is read from and exported to
    pub api_key_var: String,

    /// Endpoint, without the query string
    pub base_url: String,
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_key_var: API_KEY_VAR.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl OmdbConfig {
    /// Load from `OMDB_API_KEY` and `OMDB_BASE_URL`
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_VAR)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            api_key: read_var(API_KEY_VAR),
            api_key_var: API_KEY_VAR.to_string(),
            base_url,
        }
    }

    /// Key holder built from this configuration
    pub fn api_key(&self) -> ApiKey {
        ApiKey::new(self.api_key_var.clone(), self.api_key.clone())
    }
}

impl fmt::Debug for OmdbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OmdbConfig")
            .field("api_key", &redact(&self.api_key))
            .field("api_key_var", &self.api_key_var)
            .field("base_url", &self.base_url)
            .finish()
    }
}
