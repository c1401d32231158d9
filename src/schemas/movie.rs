use serde::{Deserialize, Serialize};
use std::fmt;

// Search hit as returned by the provider's title search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    #[serde(rename = "imdbID", default)]
    pub id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster_url: String,
}

// Full record for a single movie, fetched by id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieDetail {
    #[serde(rename = "imdbID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Poster")]
    pub poster_url: String,
    #[serde(rename = "Runtime")]
    pub runtime: String,
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    #[serde(rename = "Plot")]
    pub plot: String,
    #[serde(rename = "Actors")]
    pub actors: String,
    #[serde(rename = "Director")]
    pub director: String,
}

/// A personal rating between [`UserRating::MIN`] and [`UserRating::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct UserRating(u8);

impl UserRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Steps the rating by `delta`, clamping to the valid range.
    /// An unset rating steps from zero, so `+1` yields the minimum.
    pub fn step(current: Option<Self>, delta: i8) -> Self {
        let base = current.map_or(0, |r| r.0 as i16);
        let next = (base + delta as i16).clamp(Self::MIN as i16, Self::MAX as i16);
        Self(next as u8)
    }
}

impl fmt::Display for UserRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WatchedEntry {
    pub movie: MovieDetail,
    pub user_rating: UserRating,
}

impl WatchedEntry {
    pub fn new(movie: MovieDetail, user_rating: UserRating) -> Self {
        Self { movie, user_rating }
    }

    pub fn id(&self) -> &str {
        &self.movie.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_uses_provider_field_names() {
        let json = r#"{"Title":"Batman Begins","Year":"2005","imdbID":"tt0372784","Type":"movie","Poster":"https://example.com/p.jpg"}"#;
        let summary: MovieSummary = serde_json::from_str(json).unwrap();

        assert_eq!(summary.id, "tt0372784");
        assert_eq!(summary.title, "Batman Begins");
        assert_eq!(summary.year, "2005");
        assert_eq!(summary.poster_url, "https://example.com/p.jpg");
    }

    #[test]
    fn test_detail_missing_fields_default_to_empty() {
        let detail: MovieDetail =
            serde_json::from_str(r#"{"Title":"Heat","imdbID":"tt0113277"}"#).unwrap();

        assert_eq!(detail.title, "Heat");
        assert_eq!(detail.runtime, "");
        assert_eq!(detail.imdb_rating, "");
    }

    #[test]
    fn test_user_rating_bounds() {
        assert!(UserRating::new(0).is_none());
        assert!(UserRating::new(11).is_none());
        assert_eq!(UserRating::new(1).map(UserRating::get), Some(1));
        assert_eq!(UserRating::new(10).map(UserRating::get), Some(10));
    }

    #[test]
    fn test_user_rating_step_clamps() {
        assert_eq!(UserRating::step(None, 1).get(), 1);
        assert_eq!(UserRating::step(None, -1).get(), 1);
        let ten = UserRating::new(10);
        assert_eq!(UserRating::step(ten, 1).get(), 10);
        assert_eq!(UserRating::step(ten, -3).get(), 7);
    }
}
