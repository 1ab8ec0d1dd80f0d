//! Authentication primitives for the account service
//!
//! Groups the credential-handling building blocks behind one crate:
//! - Password hashing (Argon2id) and the password-strength policy
//! - JWT access-token issuance and validation (HS256)
//! - Single-use reset-token generation
//! - An `Authenticator` coordinating hashing and token handling
//!
//! The service defines its own domain ports and adapts these primitives;
//! nothing here touches storage or HTTP.
//!
//! # Examples
//!
//! ## Password hashing and policy
//! ```
//! use auth::password::{PasswordHasher, PasswordPolicy};
//!
//! PasswordPolicy::validate("Senha123!").unwrap();
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("Senha123!").unwrap();
//! assert!(hasher.verify("Senha123!", &hash).unwrap());
//! ```
//!
//! ## Access tokens
//! ```
//! use auth::{Claims, JwtHandler};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::new("user123", "ana@test.com", "admin", 1);
//! let token = handler.encode(&claims).unwrap();
//! let decoded = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub, "user123");
//! ```
//!
//! ## Coordinated flow
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//! let hash = auth.hash_password("Senha123!").unwrap();
//! assert!(auth.verify_password("Senha123!", &hash).unwrap());
//!
//! let token = auth
//!     .issue_token(&Claims::new("user123", "ana@test.com", "user", 1))
//!     .unwrap();
//! let claims = auth.verify_token(&token).unwrap();
//! assert_eq!(claims.email, "ana@test.com");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::PasswordPolicy;
pub use token::generate_reset_token;
