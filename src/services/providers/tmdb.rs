/// TMDB (The Movie Database) provider
///
/// API Flow:
/// 1. Genres: /genre/movie/list → `{ genres: [...] }`, loaded once per screen
/// 2. Text search: /search/movie?query=... → `{ results: [...] }`
/// 3. Genre filter: /discover/movie?with_genres=... → `{ results: [...] }`
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{ApiGenreList, ApiMoviePage, Genre, GenreId, Movie},
    services::providers::MovieApi,
};
use reqwest::{Client as HttpClient, Response};
use serde::de::DeserializeOwned;

#[derive(Clone)]
pub struct TmdbClient {
    http_client: HttpClient,
    access_token: String,
    api_url: String,
}

impl TmdbClient {
    pub fn new(access_token: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            access_token,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.tmdb_access_token.clone(), config.tmdb_api_url.clone())
    }

    /// Issues an authorized GET and fails with `failure` on a non-success status
    async fn get(&self, path: &str, query: &[(&str, &str)], failure: &str) -> AppResult<Response> {
        let url = format!("{}{}", self.api_url, path);
        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!(
                path = %path,
                status = %response.status(),
                provider = self.name(),
                "TMDB request rejected"
            );
            return Err(AppError::Fetch(failure.to_string()));
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| AppError::Decode(e.to_string()))
    }
}

#[async_trait::async_trait]
impl MovieApi for TmdbClient {
    async fn fetch_genres(&self) -> AppResult<Vec<Genre>> {
        let response = self
            .get("/genre/movie/list", &[], "Failed to fetch genres")
            .await?;
        let list: ApiGenreList = Self::decode(response).await?;
        let genres = list.genres.ok_or(AppError::GenresNotFound)?;

        tracing::info!(
            genres = genres.len(),
            provider = self.name(),
            "Genre list fetched"
        );

        Ok(genres)
    }

    async fn search_movies(&self, query: &str) -> AppResult<Vec<Movie>> {
        let response = self
            .get(
                "/search/movie",
                &[("query", query)],
                "Failed to fetch movies by search",
            )
            .await?;
        let page: ApiMoviePage = Self::decode(response).await?;

        tracing::info!(
            query = %query,
            results = page.results.len(),
            provider = self.name(),
            "Movie search completed"
        );

        Ok(page.results)
    }

    async fn discover_movies(&self, genre_id: GenreId) -> AppResult<Vec<Movie>> {
        let genre = genre_id.to_string();
        let response = self
            .get(
                "/discover/movie",
                &[("with_genres", genre.as_str())],
                "Failed to fetch movies by genre",
            )
            .await?;
        let page: ApiMoviePage = Self::decode(response).await?;

        tracing::info!(
            genre_id,
            results = page.results.len(),
            provider = self.name(),
            "Genre discovery completed"
        );

        Ok(page.results)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = TmdbClient::new("token".to_string(), "http://test.local/3/".to_string());
        assert_eq!(client.api_url, "http://test.local/3");
    }
}
