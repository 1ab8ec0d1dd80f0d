use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::models::Role;
use crate::domain::user::models::UserId;

/// Audit record for one authentication attempt.
///
/// Exactly one attempt is recorded per call to the authentication service,
/// success or not, before any failure is signaled. The email is kept as
/// submitted so the audit trail shows what the caller actually sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginAttempt {
    pub email: String,
    pub success: bool,
    pub timestamp: DateTime<Utc>,
    pub origin: Option<String>,
}

impl LoginAttempt {
    /// Create an attempt record timestamped now.
    ///
    /// # Arguments
    /// * `email` - Email as submitted by the caller
    /// * `success` - Whether the credentials verified
    /// * `origin` - Client address, when one could be derived
    pub fn new(email: impl Into<String>, success: bool, origin: Option<String>) -> Self {
        Self {
            email: email.into(),
            success,
            timestamp: Utc::now(),
            origin,
        }
    }
}

/// Result of a successful login: the signed bearer token plus the profile
/// fields callers get back. The password hash is never part of this.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: Role,
}
