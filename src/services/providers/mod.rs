/// Movie metadata provider abstraction
///
/// The search controller only talks to this trait, so it can be driven by the
/// TMDB client in production and by mocks or scripted fakes in tests.
use crate::{
    error::AppResult,
    models::{Genre, GenreId, Movie},
};

pub mod tmdb;

pub use tmdb::TmdbClient;

/// Trait for movie metadata providers
///
/// Each call is a single best-effort round trip: no retries, no caching and
/// no pagination beyond the first page.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieApi: Send + Sync {
    /// List every movie genre the provider knows about
    async fn fetch_genres(&self) -> AppResult<Vec<Genre>>;

    /// Search movies by free text
    async fn search_movies(&self, query: &str) -> AppResult<Vec<Movie>>;

    /// Discover movies belonging to a genre
    async fn discover_movies(&self, genre_id: GenreId) -> AppResult<Vec<Movie>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
