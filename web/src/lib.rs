use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod templates;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::home::render_home))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
