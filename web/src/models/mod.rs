use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The api service's payload: a greeting plus the database's current time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_the_wire_shape() {
        let status: Status = serde_json::from_str(
            r#"{"message":"Hello, world!","timestamp":"2026-08-31T01:02:03Z"}"#,
        )
        .unwrap();

        assert_eq!(status.message, "Hello, world!");
        assert_eq!(
            status.timestamp,
            "2026-08-31T01:02:03Z".parse::<DateTime<Utc>>().unwrap()
        );
    }
}
