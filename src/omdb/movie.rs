//! The movie record returned by OMDb, and its accessors.
//!
//! The record mirrors the provider's JSON object field for field. All values
//! stay strings exactly as the provider formats them ("714,261" votes,
//! "N/A" box office, "8.3/10" ratings); nothing is parsed into numbers.
//!
//! Example response:
//! ```json
//! {
//!   "Title": "Toy Story",
//!   "Year": "1995",
//!   "Genre": "Animation, Adventure, Comedy",
//!   "Ratings": [
//!     {"Source": "Internet Movie Database", "Value": "8.3/10"},
//!     {"Source": "Rotten Tomatoes", "Value": "100%"},
//!     {"Source": "Metacritic", "Value": "95/100"}
//!   ],
//!   "imdbID": "tt0114709",
//!   "Response": "True"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Returned by [`Movie::basic_info`] when the record holds no movie
pub const NO_MOVIE: &str = "No movie stored in this struct";

/// Rating sources OMDb commonly reports.
///
/// The list is open-ended; lookups are never validated against it.
pub mod rating_source {
    /// Ten-point scale, e.g. "8.3/10"
    pub const INTERNET_MOVIE_DATABASE: &str = "Internet Movie Database";
    /// Percentage, e.g. "100%"
    pub const ROTTEN_TOMATOES: &str = "Rotten Tomatoes";
    /// Out of a hundred, e.g. "95/100"
    pub const METACRITIC: &str = "Metacritic";
}

/// A movie as returned by the OMDb title lookup.
///
/// Fields absent from the payload decode as empty strings, so a
/// "not found" answer (`{"Response":"False","Error":"Movie not found!"}`)
/// still yields a record. Check [`Movie::is_found`] before trusting it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Movie {
    pub title: String,
    pub year: String,
    /// Rating classification, e.g. "G" or "PG-13"
    pub rated: String,
    pub released: String,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub writer: String,
    /// Comma-separated actor list
    pub actors: String,
    pub plot: String,
    pub language: String,
    pub country: String,
    pub awards: String,
    /// Poster image URL
    pub poster: String,
    pub ratings: Vec<Rating>,
    pub metascore: String,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    /// "movie", "series" or "episode"
    #[serde(rename = "Type")]
    pub media_type: String,
    #[serde(rename = "DVD")]
    pub dvd: String,
    pub box_office: String,
    pub production: String,
    pub website: String,
    /// Provider status flag, "True" or "False"
    pub response: String,
    /// Provider error message, only sent alongside `"Response": "False"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One entry of the `Ratings` list
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Rating {
    /// Who gave the rating, e.g. "Rotten Tomatoes"
    pub source: String,
    /// Rating in the source's own format
    pub value: String,
}

impl Movie {
    /// Whether the provider reported a match (`Response` is exactly "True")
    pub fn is_found(&self) -> bool {
        self.response == "True"
    }

    /// Title, genre and year as a short multi-line summary
    pub fn basic_info(&self) -> String {
        if self.is_found() {
            format!(
                "Movie: {}\nGenre: {}\nRelease Year: {}\n",
                self.title, self.genre, self.year
            )
        } else {
            NO_MOVIE.to_string()
        }
    }

    /// Rating reported by `source`.
    ///
    /// The match is exact and case-sensitive. Value formats differ per source:
    /// - Internet Movie Database: "9.7/10"
    /// - Rotten Tomatoes: "97%"
    /// - Metacritic: "97/100"
    pub fn rating_by_source(&self, source: &str) -> Result<&str> {
        self.ratings
            .iter()
            .find(|rating| rating.source == source)
            .map(|rating| rating.value.as_str())
            .ok_or_else(|| Error::UnknownRatingSource(source.to_string()))
    }
}

#[cfg(test)]
const TOY_STORY_JSON: &str = r#"{"Title":"Toy Story","Year":"1995","Rated":"G","Released":"22 Nov 1995","Runtime":"81 min","Genre":"Animation, Adventure, Comedy","Director":"John Lasseter","Writer":"John Lasseter (original story by), Pete Docter (original story by), Andrew Stanton (original story by), Joe Ranft (original story by), Joss Whedon (screenplay by), Andrew Stanton (screenplay by), Joel Cohen (screenplay by), Alec Sokolow (screenplay by)","Actors":"Tom Hanks, Tim Allen, Don Rickles, Jim Varney","Plot":"A cowboy doll is profoundly threatened and jealous when a new spaceman figure supplants him as top toy in a boy's room.","Language":"English","Country":"USA","Awards":"Nominated for 3 Oscars. Another 23 wins & 17 nominations.","Poster":"https://images-na.ssl-images-amazon.com/images/M/MV5BMDU2ZWJlMjktMTRhMy00ZTA5LWEzNDgtYmNmZTEwZTViZWJkXkEyXkFqcGdeQXVyNDQ2OTk4MzI@._V1_SX300.jpg","Ratings":[{"Source":"Internet Movie Database","Value":"8.3/10"},{"Source":"Rotten Tomatoes","Value":"100%"},{"Source":"Metacritic","Value":"95/100"}],"Metascore":"95","imdbRating":"8.3","imdbVotes":"714,261","imdbID":"tt0114709","Type":"movie","DVD":"20 Mar 2001","BoxOffice":"N/A","Production":"Buena Vista","Website":"http://www.disney.com/ToyStory","Response":"True"}"#;


// ============================================================================
// CONTRACT TESTS
// These verify the record matches what the real API returns.
// If these fail, the API has changed and the record needs updating.
// ============================================================================
