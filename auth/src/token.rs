use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::Rng;

/// Length of generated reset tokens in characters.
///
/// 32 alphanumeric characters carry roughly 190 bits of entropy, comfortably
/// above the 128-bit floor for an unguessable single-use credential.
const RESET_TOKEN_LENGTH: usize = 32;

/// Generate an opaque single-use password-reset token.
///
/// Sampled from the operating system CSPRNG; the token has no structure and
/// means nothing until the reset registry maps it to an email.
pub fn generate_reset_token() -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(RESET_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}
