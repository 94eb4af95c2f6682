use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to get status from api: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("failed to parse status: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to render template: {0}")]
    Template(#[from] tera::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        // Request-path failures surface the raw error message to the client.
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
