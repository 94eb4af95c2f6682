use axum::{extract::State, response::Html};

use crate::client;
use crate::error::WebError;
use crate::state::AppState;
use crate::templates;

// GET / - fetch the current status from the api service and render it
pub async fn render_home(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let status = client::fetch_status(&state.http, &state.api_url).await?;
    let html = templates::render_status(&state.templates, &status)?;
    Ok(Html(html))
}
