use async_trait::async_trait;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::PasswordResetRequest;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::ResetTokenStoreError;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Create a new user after policy and uniqueness checks.
    ///
    /// # Arguments
    /// * `command` - Validated command with name, email, password, and role
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `WeakPassword` - Password fails the strength policy
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Retrieve all users.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_users(&self) -> Result<Vec<User>, UserError>;

    /// Begin a password reset for an email address.
    ///
    /// Always returns the generic message; a token is present only when the
    /// email belongs to a registered user, so the response shape does not
    /// disclose which addresses exist.
    ///
    /// # Errors
    /// * `ResetTokenStore` - Token could not be stored
    /// * `DatabaseError` - Database operation failed
    async fn request_password_reset(&self, email: &str)
        -> Result<PasswordResetRequest, UserError>;

    /// Complete a password reset with a previously issued token.
    ///
    /// The token is consumed only on success; a weak replacement password
    /// leaves the token and the stored hash untouched.
    ///
    /// # Errors
    /// * `InvalidResetToken` - Token unknown or already used
    /// * `WeakPassword` - Replacement password fails the strength policy
    /// * `DatabaseError` - Database operation failed
    async fn reset_password(&self, token: &str, new_password: &str) -> Result<String, UserError>;
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// Uniqueness is enforced by the storage layer: a duplicate email
    /// surfaces as `EmailAlreadyExists`, never as a pre-check race.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by normalized email address.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Retrieve all users.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<User>, UserError>;

    /// Replace the stored password hash for an email address.
    ///
    /// Last write wins; updating an email with no matching user is a no-op.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn update_password_hash(&self, email: &str, password_hash: &str)
        -> Result<(), UserError>;
}

/// Ephemeral storage for single-use password-reset tokens.
///
/// Injected so the process-local map can be swapped for a shared cache in a
/// multi-process deployment. Implementations must be safe for concurrent
/// insert, lookup, and removal from in-flight requests.
#[async_trait]
pub trait ResetTokenStore: Send + Sync + 'static {
    /// Store a token for an email address.
    async fn insert(&self, token: String, email: String) -> Result<(), ResetTokenStoreError>;

    /// Look up the email a token authorizes, if any.
    async fn get(&self, token: &str) -> Result<Option<String>, ResetTokenStoreError>;

    /// Remove a token after use.
    async fn remove(&self, token: &str) -> Result<(), ResetTokenStoreError>;
}
