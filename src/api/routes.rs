use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;

/// Creates the rendering bridge router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Screen state
        .route("/state", get(handlers::get_state))
        .route("/genres", get(handlers::get_genres))
        // Callbacks
        .route("/search", post(handlers::search))
        .route("/genre", post(handlers::select_genre))
        .route("/genre/:id/toggle", post(handlers::toggle_genre))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
