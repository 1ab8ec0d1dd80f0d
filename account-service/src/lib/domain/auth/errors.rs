use auth::JwtError;
use auth::PasswordError;
use thiserror::Error;

/// Error for login-attempt recording operations
#[derive(Debug, Clone, Error)]
pub enum LoginAttemptError {
    #[error("Failed to record login attempt: {0}")]
    DatabaseError(String),
}

/// Top-level error for authentication operations
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The account vanished between credential validation and token
    /// issuance.
    #[error("User not found")]
    UserNotFound,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] JwtError),

    // Attempt recording is not allowed to be swallowed; its failures
    // surface through here.
    #[error(transparent)]
    Audit(#[from] LoginAttemptError),

    #[error("Database error: {0}")]
    Database(String),
}
