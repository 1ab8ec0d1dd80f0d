use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Access-token payload.
///
/// Carries the authenticated subject, email, and role plus the issuance and
/// expiry timestamps. Token validity is decided solely by signature and
/// expiry; no server-side session state backs these claims.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the user's unique identifier
    pub sub: String,

    /// Email of the authenticated user
    pub email: String,

    /// Role granted to the subject (`user` or `admin`)
    pub role: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for an authenticated user with a relative expiry.
    ///
    /// # Arguments
    /// * `sub` - Unique user identifier
    /// * `email` - User email address
    /// * `role` - Role name encoded in the token
    /// * `ttl_hours` - Hours until the token expires
    pub fn new(
        sub: impl ToString,
        email: impl Into<String>,
        role: impl Into<String>,
        ttl_hours: i64,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::hours(ttl_hours);

        Self {
            sub: sub.to_string(),
            email: email.into(),
            role: role.into(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_subject_and_role() {
        let claims = Claims::new("user123", "ana@test.com", "admin", 1);

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.email, "ana@test.com");
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn test_new_sets_relative_expiry() {
        let claims = Claims::new("user123", "ana@test.com", "user", 2);

        assert_eq!(claims.exp - claims.iat, 2 * 60 * 60);
    }
}
