use std::path::PathBuf;

use crate::error::WebError;

const REQUIRED_VARS: [&str; 2] = ["API_HOST", "PORT"];

const DEFAULT_TEMPLATE_PATH: &str = "./index.html";

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Full URL of the api service's status route.
    pub api_host: String,
    pub port: u16,
    pub template_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, WebError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same aggregated-missing-key validation as the api crate.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, WebError> {
        let missing: Vec<&str> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|key| lookup(key).is_none_or(|value| value.is_empty()))
            .collect();

        if !missing.is_empty() {
            return Err(WebError::Config(format!(
                "missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        let port = lookup("PORT").unwrap();
        let port = port
            .parse()
            .map_err(|_| WebError::Config(format!("PORT is not a valid port number: {port:?}")))?;

        let template_path = lookup("TEMPLATE_PATH")
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_TEMPLATE_PATH.to_string());

        Ok(Config {
            api_host: lookup("API_HOST").unwrap(),
            port,
            template_path: PathBuf::from(template_path),
        })
    }
}
