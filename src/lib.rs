//! OMDb Minder - look up movie metadata on the OMDb web API.
//!
//! The crate is a thin blocking client over a single endpoint:
//! a title goes in, a [`Movie`] record comes out.
//!
//! # Architecture
//!
//! - **Config** (`config.rs`) - API key holder and client configuration
//! - **Errors** (`error.rs`) - One error enum for every failure the client can report
//! - **OMDb** (`omdb/`) - The record type, its accessors, and the HTTP client
//!
//! # Usage
//!
//! ```no_run
//! use omdb_minder::{OmdbClient, OmdbConfig};
//!
//! let mut client = OmdbClient::new(OmdbConfig::from_env())?;
//! let movie = client.fetch_movie("Toy Story")?;
//! print!("{}", movie.basic_info());
//! println!("Metacritic: {}", movie.rating_by_source("Metacritic")?);
//! # Ok::<(), omdb_minder::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod omdb;
#[cfg(test)]
mod test_utils;

pub use config::{ApiKey, OmdbConfig};
pub use error::{Error, Result};
pub use omdb::{Movie, OmdbClient, Rating, fetch_movie, rating_source};
