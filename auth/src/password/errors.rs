use thiserror::Error;

/// Error type for password hashing operations.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}

/// Error raised when a password fails the strength policy.
///
/// The message is the one surfaced to API callers on registration and reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "Password must be at least 8 characters long and include an uppercase letter, \
     a lowercase letter, a digit, and a special character"
)]
pub struct WeakPasswordError;
