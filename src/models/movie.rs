use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w200";

pub type MovieId = u64;

/// A movie as returned by the TMDB search and discover endpoints
///
/// Fields this crate does not interpret are kept in `extra` and passed
/// through unchanged when the movie is serialized again.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Push request for the detail screen of a single movie
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "screen")]
pub enum DetailRoute {
    MovieDetail { id: MovieId },
}

impl Movie {
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            overview: String::new(),
            poster_path: None,
            extra: Map::new(),
        }
    }

    /// Poster image URL at list-thumbnail size, if the movie has a poster
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|path| format!("{}{}", POSTER_BASE_URL, path))
    }

    pub fn detail_route(&self) -> DetailRoute {
        DetailRoute::MovieDetail { id: self.id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_movie_decodes() {
        let movie: Movie = serde_json::from_value(json!({ "id": 1, "title": "Batman" })).unwrap();

        assert_eq!(movie, Movie::new(1, "Batman"));
        assert_eq!(movie.poster_url(), None);
    }

    #[test]
    fn test_unknown_fields_pass_through() {
        let raw = json!({
            "id": 268,
            "title": "Batman",
            "overview": "The Dark Knight of Gotham City.",
            "poster_path": "/cij4dd21v2Rk2YtUQbV5kW69WB2.jpg",
            "release_date": "1989-06-23",
            "vote_average": 7.2
        });

        let movie: Movie = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(movie.extra["release_date"], "1989-06-23");
        assert_eq!(serde_json::to_value(&movie).unwrap(), raw);
    }

    #[test]
    fn test_missing_title_is_rejected() {
        assert!(serde_json::from_value::<Movie>(json!({ "id": 1 })).is_err());
    }

    #[test]
    fn test_poster_url() {
        let mut movie = Movie::new(1, "Batman");
        movie.poster_path = Some("/abc.jpg".to_string());

        assert_eq!(
            movie.poster_url().as_deref(),
            Some("https://image.tmdb.org/t/p/w200/abc.jpg")
        );
    }

    #[test]
    fn test_detail_route_serialization() {
        let route = Movie::new(414906, "The Batman").detail_route();
        assert_eq!(
            serde_json::to_value(route).unwrap(),
            json!({ "screen": "MovieDetail", "id": 414906 })
        );
    }
}
