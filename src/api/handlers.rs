use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::models::{
    DetailRoute, GenreId, GenreOption, Movie, ResultsView, SearchMode, SearchState,
};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectGenreRequest {
    pub genre_id: Option<GenreId>,
}

/// A result row with everything the list item needs to render and navigate
#[derive(Debug, Serialize)]
pub struct MovieEntry {
    #[serde(flatten)]
    pub movie: Movie,
    pub poster_url: Option<String>,
    pub route: DetailRoute,
}

impl From<Movie> for MovieEntry {
    fn from(movie: Movie) -> Self {
        Self {
            poster_url: movie.poster_url(),
            route: movie.detail_route(),
            movie,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub query: String,
    pub selected_genre_id: Option<GenreId>,
    pub movies: Vec<MovieEntry>,
    pub loading: bool,
    pub search_active: bool,
    pub mode: SearchMode,
    pub view: &'static str,
    pub empty_message: Option<&'static str>,
}

impl From<SearchState> for StateResponse {
    fn from(state: SearchState) -> Self {
        let mode = state.mode();
        let results = state.results_view();
        let view = results.kind();
        let empty_message =
            matches!(results, ResultsView::Empty).then_some(ResultsView::EMPTY_MESSAGE);
        Self {
            query: state.query,
            selected_genre_id: state.selected_genre_id,
            movies: state.movies.into_iter().map(MovieEntry::from).collect(),
            loading: state.loading,
            search_active: state.search_active,
            mode,
            view,
            empty_message,
        }
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Current search screen snapshot
pub async fn get_state(State(state): State<AppState>) -> Json<StateResponse> {
    Json(StateResponse::from(state.controller.snapshot()))
}

/// Genre picker entries
pub async fn get_genres(State(state): State<AppState>) -> Json<Vec<GenreOption>> {
    Json(state.controller.genre_options())
}

/// Free-text input changed
pub async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> StatusCode {
    tracing::debug!(query = %request.query, "Search input received");
    state.controller.search(request.query);
    StatusCode::ACCEPTED
}

/// Genre picked, or `null` for all genres
pub async fn select_genre(
    State(state): State<AppState>,
    Json(request): Json<SelectGenreRequest>,
) -> AppResult<StatusCode> {
    if let Some(id) = request.genre_id {
        ensure_known_genre(&state, id)?;
    }
    state.controller.select_genre(request.genre_id);
    Ok(StatusCode::ACCEPTED)
}

/// Genre list item tapped
pub async fn toggle_genre(
    State(state): State<AppState>,
    Path(id): Path<GenreId>,
) -> AppResult<StatusCode> {
    ensure_known_genre(&state, id)?;
    state.controller.toggle_genre(id);
    Ok(StatusCode::ACCEPTED)
}

fn ensure_known_genre(state: &AppState, id: GenreId) -> AppResult<()> {
    if state.controller.genres().iter().any(|genre| genre.id == id) {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!("Unknown genre id {}", id)))
    }
}
