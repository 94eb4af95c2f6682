use chrono::{DateTime, Utc};
use sqlx::postgres::PgPool;

/// Asks the database for its current time, scanning the single column.
pub async fn current_timestamp(pool: &PgPool) -> Result<DateTime<Utc>, sqlx::Error> {
    sqlx::query_scalar::<_, DateTime<Utc>>(r#"SELECT now() AS time"#)
        .fetch_one(pool)
        .await
}
