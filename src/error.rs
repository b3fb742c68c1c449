use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Fetch(String),

    #[error("Genres not found in API response")]
    GenresNotFound,

    #[error("Malformed API response: {0}")]
    Decode(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Fetch(_)
            | AppError::GenresNotFound
            | AppError::Decode(_)
            | AppError::HttpClient(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_message_is_verbatim() {
        let err = AppError::Fetch("Failed to fetch genres".to_string());
        assert_eq!(err.to_string(), "Failed to fetch genres");
        assert_eq!(
            AppError::GenresNotFound.to_string(),
            "Genres not found in API response"
        );
    }

    #[test]
    fn test_status_mapping() {
        let response = AppError::InvalidInput("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::GenresNotFound.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
