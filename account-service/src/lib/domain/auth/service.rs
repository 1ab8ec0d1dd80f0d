use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::LoginAttempt;
use crate::domain::auth::models::Session;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::LoginAttemptRepository;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::user::ports::UserRepository;

/// Domain service orchestrating credential validation, attempt auditing,
/// and token issuance.
pub struct AuthService<UR, LR>
where
    UR: UserRepository,
    LR: LoginAttemptRepository,
{
    users: Arc<UR>,
    login_attempts: Arc<LR>,
    authenticator: Arc<Authenticator>,
    token_ttl_hours: i64,
}

impl<UR, LR> AuthService<UR, LR>
where
    UR: UserRepository,
    LR: LoginAttemptRepository,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `users` - User persistence implementation
    /// * `login_attempts` - Attempt audit log implementation
    /// * `authenticator` - Shared hashing/token coordinator
    /// * `token_ttl_hours` - Bearer token lifetime
    pub fn new(
        users: Arc<UR>,
        login_attempts: Arc<LR>,
        authenticator: Arc<Authenticator>,
        token_ttl_hours: i64,
    ) -> Self {
        Self {
            users,
            login_attempts,
            authenticator,
            token_ttl_hours,
        }
    }

    /// Validate a credential pair, recording the attempt unconditionally.
    ///
    /// The attempt row is written with the computed outcome before any
    /// failure is raised, so the audit log sees every attempt exactly once.
    /// A failure while recording propagates; it never turns a rejection
    /// into a success.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `Audit` - Attempt recording failed
    pub async fn validate_credentials(
        &self,
        email: &str,
        password: &str,
        origin: Option<String>,
    ) -> Result<User, AuthError> {
        // The lookup goes through the same normalization as registration;
        // a malformed address simply matches no user.
        let user = match EmailAddress::new(email.to_string()) {
            Ok(address) => self
                .users
                .find_by_email(address.as_str())
                .await
                .map_err(|e| AuthError::Database(e.to_string()))?,
            Err(_) => None,
        };

        let success = match &user {
            Some(user) => self
                .authenticator
                .verify_password(password, &user.password_hash)?,
            None => false,
        };

        let attempt = LoginAttempt::new(email, success, origin);
        self.login_attempts.record(&attempt).await?;

        match user {
            Some(user) if success => Ok(user),
            _ => {
                tracing::warn!(success, "Login rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}

#[async_trait]
impl<UR, LR> AuthServicePort for AuthService<UR, LR>
where
    UR: UserRepository,
    LR: LoginAttemptRepository,
{
    async fn login(
        &self,
        email: &str,
        password: &str,
        origin: Option<String>,
    ) -> Result<Session, AuthError> {
        let user = self.validate_credentials(email, password, origin).await?;

        // Re-fetch by id: the account may have been deleted between
        // validation and issuance.
        let user = self
            .users
            .find_by_id(&user.id)
            .await
            .map_err(|e| AuthError::Database(e.to_string()))?
            .ok_or(AuthError::UserNotFound)?;

        let claims = Claims::new(
            user.id,
            user.email.as_str(),
            user.role.as_str(),
            self.token_ttl_hours,
        );
        let access_token = self.authenticator.issue_token(&claims)?;

        tracing::info!(user_id = %user.id, "Login succeeded");

        Ok(Session {
            access_token,
            id: user.id,
            email: user.email.as_str().to_string(),
            name: user.name,
            role: user.role,
        })
    }
}
