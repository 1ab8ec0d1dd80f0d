use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::LoginAttemptError;
use crate::domain::auth::models::LoginAttempt;
use crate::domain::auth::models::Session;

/// Port for authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Authenticate a user and issue a bearer token.
    ///
    /// # Arguments
    /// * `email` - Email as submitted
    /// * `password` - Plaintext password
    /// * `origin` - Client address derived from the request, if any
    ///
    /// # Returns
    /// Session with the signed token and profile fields
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `UserNotFound` - Account deleted between validation and issuance
    /// * `Audit` - Attempt recording failed
    async fn login(
        &self,
        email: &str,
        password: &str,
        origin: Option<String>,
    ) -> Result<Session, AuthError>;
}

/// Append-only audit log of authentication attempts.
#[async_trait]
pub trait LoginAttemptRepository: Send + Sync + 'static {
    /// Append one attempt record.
    ///
    /// # Errors
    /// * `DatabaseError` - Insert failed; the caller propagates this
    async fn record(&self, attempt: &LoginAttempt) -> Result<(), LoginAttemptError>;
}
