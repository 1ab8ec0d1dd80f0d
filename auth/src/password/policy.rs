use super::errors::WeakPasswordError;

/// Password strength policy shared by registration and password reset.
///
/// A password passes when it is at least 8 characters long and contains at
/// least one lowercase letter, one uppercase letter, one digit, and one
/// symbol from a fixed punctuation set. Any violation rejects the password.
pub struct PasswordPolicy;

impl PasswordPolicy {
    const MIN_LENGTH: usize = 8;
    const SYMBOLS: &'static str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

    /// Validate a candidate password against the policy.
    ///
    /// # Errors
    /// * `WeakPasswordError` - One or more requirements not met
    pub fn validate(password: &str) -> Result<(), WeakPasswordError> {
        let long_enough = password.chars().count() >= Self::MIN_LENGTH;
        let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
        let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_symbol = password.chars().any(|c| Self::SYMBOLS.contains(c));

        if long_enough && has_lowercase && has_uppercase && has_digit && has_symbol {
            Ok(())
        } else {
            Err(WeakPasswordError)
        }
    }
}
