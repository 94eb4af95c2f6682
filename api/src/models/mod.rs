use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const STATUS_MESSAGE: &str = "Hello, world!";

/// The payload returned on every request: a fixed greeting plus the
/// database's current time. Built fresh per request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Status {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Status {
            message: STATUS_MESSAGE.to_string(),
            timestamp,
        }
    }
}
