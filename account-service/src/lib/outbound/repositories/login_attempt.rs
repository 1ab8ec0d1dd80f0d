use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::auth::errors::LoginAttemptError;
use crate::domain::auth::models::LoginAttempt;
use crate::domain::auth::ports::LoginAttemptRepository;

/// Append-only audit log backed by the `login_attempts` table. Rows are
/// only ever inserted; nothing in the service updates or deletes them.
pub struct PostgresLoginAttemptRepository {
    pool: PgPool,
}

impl PostgresLoginAttemptRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoginAttemptRepository for PostgresLoginAttemptRepository {
    async fn record(&self, attempt: &LoginAttempt) -> Result<(), LoginAttemptError> {
        sqlx::query(
            r#"
            INSERT INTO login_attempts (email, success, timestamp, origin)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&attempt.email)
        .bind(attempt.success)
        .bind(attempt.timestamp)
        .bind(&attempt.origin)
        .execute(&self.pool)
        .await
        .map_err(|e| LoginAttemptError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
