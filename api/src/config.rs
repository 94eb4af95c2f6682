use sqlx::postgres::PgConnectOptions;

use crate::error::ApiError;

const REQUIRED_VARS: [&str; 6] = ["DB_USER", "DB_PASS", "DB_HOST", "DB_PORT", "DB_NAME", "PORT"];

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_user: String,
    pub db_pass: String,
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Validates that every required variable is present before parsing,
    /// so a misconfigured deployment reports all missing keys at once.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let missing: Vec<&str> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|key| lookup(key).is_none_or(|value| value.is_empty()))
            .collect();

        if !missing.is_empty() {
            return Err(ApiError::Config(format!(
                "missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        Ok(Config {
            db_user: lookup("DB_USER").unwrap(),
            db_pass: lookup("DB_PASS").unwrap(),
            db_host: lookup("DB_HOST").unwrap(),
            db_port: parse_port(&lookup("DB_PORT").unwrap(), "DB_PORT")?,
            db_name: lookup("DB_NAME").unwrap(),
            port: parse_port(&lookup("PORT").unwrap(), "PORT")?,
        })
    }

    /// Connection options assembled field by field, so passwords never need
    /// URL escaping.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_pass)
            .database(&self.db_name)
    }
}

fn parse_port(value: &str, key: &str) -> Result<u16, ApiError> {
    value
        .parse()
        .map_err(|_| ApiError::Config(format!("{key} is not a valid port number: {value:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full_env() -> HashMap<String, String> {
        env(&[
            ("DB_USER", "app"),
            ("DB_PASS", "secret"),
            ("DB_HOST", "localhost"),
            ("DB_PORT", "5432"),
            ("DB_NAME", "app"),
            ("PORT", "8080"),
        ])
    }

    #[test]
    fn parses_a_complete_environment() {
        let vars = full_env();
        let config = Config::from_lookup(|key| vars.get(key).cloned()).unwrap();

        assert_eq!(config.db_user, "app");
        assert_eq!(config.db_port, 5432);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn reports_all_missing_variables_at_once() {
        let mut vars = full_env();
        vars.remove("DB_PASS");
        vars.remove("PORT");

        let err = Config::from_lookup(|key| vars.get(key).cloned()).unwrap_err();
        let message = err.to_string();

        assert!(message.contains("DB_PASS"));
        assert!(message.contains("PORT"));
        assert!(!message.contains("DB_USER"));
    }

    #[test]
    fn treats_empty_values_as_missing() {
        let mut vars = full_env();
        vars.insert("DB_HOST".to_string(), String::new());

        let err = Config::from_lookup(|key| vars.get(key).cloned()).unwrap_err();
        assert!(err.to_string().contains("DB_HOST"));
    }

    #[test]
    fn rejects_a_malformed_port() {
        let mut vars = full_env();
        vars.insert("DB_PORT".to_string(), "not-a-port".to_string());

        let err = Config::from_lookup(|key| vars.get(key).cloned()).unwrap_err();
        assert!(err.to_string().contains("DB_PORT"));
    }
}
