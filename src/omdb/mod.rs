//! OMDb integration - movie lookup by title.
//!
//! API docs: https://www.omdbapi.com
//!
//! - **Record** (`movie.rs`) - The decoded response and its accessors
//! - **Client** (`client.rs`) - Blocking HTTP client for the title endpoint

mod client;
mod movie;

pub use client::{OmdbClient, USER_AGENT, fetch_movie, request_url};
pub use movie::{Movie, NO_MOVIE, Rating, rating_source};
