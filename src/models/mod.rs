use serde::Deserialize;

pub mod genre;
pub mod movie;
pub mod search_state;

pub use genre::{Genre, GenreId, GenreOption};
pub use movie::{DetailRoute, Movie, MovieId};
pub use search_state::{ResultsView, SearchMode, SearchState};

// ============================================================================
// TMDB API envelope types
// ============================================================================

/// Raw response from `GET /genre/movie/list`
///
/// `genres` is optional so a body without it can be told apart from a
/// body that is not JSON at all.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiGenreList {
    #[serde(default)]
    pub genres: Option<Vec<Genre>>,
}

/// Raw response from `GET /search/movie` and `GET /discover/movie`
///
/// Only the first page is ever read.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMoviePage {
    pub results: Vec<Movie>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_genre_list_without_genres_field() {
        let list: ApiGenreList = serde_json::from_value(json!({ "status_code": 7 })).unwrap();
        assert!(list.genres.is_none());
    }

    #[test]
    fn test_movie_page_requires_results() {
        let page = serde_json::from_value::<ApiMoviePage>(json!({ "page": 1 }));
        assert!(page.is_err());
    }

    #[test]
    fn test_movie_page_ignores_paging_fields() {
        let page: ApiMoviePage = serde_json::from_value(json!({
            "page": 1,
            "total_pages": 12,
            "results": [{ "id": 1, "title": "Batman" }]
        }))
        .unwrap();

        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].title, "Batman");
    }
}
