use std::sync::Arc;

use tera::Tera;

/// Shared per-request dependencies: one HTTP client, the parsed template,
/// and the api service's URL.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub templates: Arc<Tera>,
    pub api_url: String,
}

impl AppState {
    pub fn new(templates: Tera, api_url: String) -> Self {
        AppState {
            http: reqwest::Client::new(),
            templates: Arc::new(templates),
            api_url,
        }
    }
}
