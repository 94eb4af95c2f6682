use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to select timestamp from db: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Request-path failures surface the raw error message to the client.
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
