use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::PasswordPolicy;
use chrono::Utc;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::PasswordResetRequest;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::ResetTokenStore;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Generic response to a reset request; identical whether or not the email
/// is registered.
const RESET_REQUESTED_MESSAGE: &str = "If the email is registered, a reset token will be issued";

/// Domain service for registration, profile reads, and the password-reset
/// lifecycle. The reset registry is embedded here: no other component reads
/// or writes reset tokens.
pub struct UserService<UR, TS>
where
    UR: UserRepository,
    TS: ResetTokenStore,
{
    repository: Arc<UR>,
    reset_tokens: Arc<TS>,
    password_hasher: PasswordHasher,
}

impl<UR, TS> UserService<UR, TS>
where
    UR: UserRepository,
    TS: ResetTokenStore,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `reset_tokens` - Ephemeral reset-token store implementation
    pub fn new(repository: Arc<UR>, reset_tokens: Arc<TS>) -> Self {
        Self {
            repository,
            reset_tokens,
            password_hasher: PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR, TS> UserServicePort for UserService<UR, TS>
where
    UR: UserRepository,
    TS: ResetTokenStore,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        PasswordPolicy::validate(&command.password)?;

        let password_hash = self.password_hasher.hash(&command.password)?;

        let user = User {
            id: UserId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            role: command.role,
            created_at: Utc::now(),
        };

        // Duplicate emails surface from the storage layer's unique index,
        // not from a lookup-then-insert check.
        let created_user = self.repository.create(user).await?;

        tracing::info!(
            user_id = %created_user.id,
            role = %created_user.role,
            "User registered"
        );

        Ok(created_user)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    async fn request_password_reset(
        &self,
        email: &str,
    ) -> Result<PasswordResetRequest, UserError> {
        // A malformed address cannot belong to a registered user; answer it
        // the same way as an unknown one.
        let Ok(address) = EmailAddress::new(email.to_string()) else {
            return Ok(PasswordResetRequest {
                message: RESET_REQUESTED_MESSAGE.to_string(),
                token: None,
            });
        };

        let user = self.repository.find_by_email(address.as_str()).await?;

        let Some(user) = user else {
            // Same message, no token: the response shape does not reveal
            // whether the address is registered.
            return Ok(PasswordResetRequest {
                message: RESET_REQUESTED_MESSAGE.to_string(),
                token: None,
            });
        };

        let token = auth::generate_reset_token();
        self.reset_tokens
            .insert(token.clone(), user.email.as_str().to_string())
            .await?;

        tracing::info!(user_id = %user.id, "Password reset token issued");

        // The token belongs in an out-of-band channel; returning it here is
        // the mock delivery this service ships with.
        Ok(PasswordResetRequest {
            message: RESET_REQUESTED_MESSAGE.to_string(),
            token: Some(token),
        })
    }

    async fn reset_password(&self, token: &str, new_password: &str) -> Result<String, UserError> {
        let email = self
            .reset_tokens
            .get(token)
            .await?
            .ok_or(UserError::InvalidResetToken)?;

        // A weak replacement rejects before any mutation; the token stays
        // valid for a retry.
        PasswordPolicy::validate(new_password)?;

        let password_hash = self.password_hasher.hash(new_password)?;
        self.repository
            .update_password_hash(&email, &password_hash)
            .await?;

        // Single-use: consumed only once the new hash is stored.
        self.reset_tokens.remove(token).await?;

        tracing::info!("Password reset completed");

        Ok("Password reset successfully".to_string())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::Role;
    use crate::user::errors::ResetTokenStoreError;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
            async fn list_all(&self) -> Result<Vec<User>, UserError>;
            async fn update_password_hash(&self, email: &str, password_hash: &str) -> Result<(), UserError>;
        }
    }

    mock! {
        pub TestResetTokenStore {}

        #[async_trait]
        impl ResetTokenStore for TestResetTokenStore {
            async fn insert(&self, token: String, email: String) -> Result<(), ResetTokenStoreError>;
            async fn get(&self, token: &str) -> Result<Option<String>, ResetTokenStoreError>;
            async fn remove(&self, token: &str) -> Result<(), ResetTokenStoreError>;
        }
    }

    fn test_user(email: &str) -> User {
        User {
            id: UserId::new(),
            name: "Ana".to_string(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            role: Role::User,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut repository = MockTestUserRepository::new();
        let reset_tokens = MockTestResetTokenStore::new();

        repository
            .expect_create()
            .withf(|user| {
                user.email.as_str() == "ana@test.com"
                    && user.role == Role::User
                    && user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = UserService::new(Arc::new(repository), Arc::new(reset_tokens));

        let command = CreateUserCommand {
            name: "Ana".to_string(),
            email: EmailAddress::new("ANA@Test.com".to_string()).unwrap(),
            password: "Senha123!".to_string(),
            role: Role::User,
        };

        let user = service.create_user(command).await.unwrap();
        assert_eq!(user.email.as_str(), "ana@test.com");
        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_create_user_weak_password() {
        let mut repository = MockTestUserRepository::new();
        let reset_tokens = MockTestResetTokenStore::new();

        // Nothing persisted when the policy rejects
        repository.expect_create().times(0);

        let service = UserService::new(Arc::new(repository), Arc::new(reset_tokens));

        let command = CreateUserCommand {
            name: "Ana".to_string(),
            email: EmailAddress::new("ana@test.com".to_string()).unwrap(),
            password: "weak".to_string(),
            role: Role::User,
        };

        let result = service.create_user(command).await;
        assert!(matches!(result, Err(UserError::WeakPassword(_))));
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email() {
        let mut repository = MockTestUserRepository::new();
        let reset_tokens = MockTestResetTokenStore::new();

        repository.expect_create().times(1).returning(|user| {
            Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ))
        });

        let service = UserService::new(Arc::new(repository), Arc::new(reset_tokens));

        let command = CreateUserCommand {
            name: "Ana".to_string(),
            email: EmailAddress::new("ana@test.com".to_string()).unwrap(),
            password: "Senha123!".to_string(),
            role: Role::Admin,
        };

        let result = service.create_user(command).await;
        assert!(matches!(result, Err(UserError::EmailAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repository = MockTestUserRepository::new();
        let reset_tokens = MockTestResetTokenStore::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository), Arc::new(reset_tokens));

        let result = service.get_user(&UserId::new()).await;
        assert!(matches!(result, Err(UserError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_request_reset_unknown_email_returns_no_token() {
        let mut repository = MockTestUserRepository::new();
        let mut reset_tokens = MockTestResetTokenStore::new();

        repository
            .expect_find_by_email()
            .with(eq("ghost@test.com"))
            .times(1)
            .returning(|_| Ok(None));
        reset_tokens.expect_insert().times(0);

        let service = UserService::new(Arc::new(repository), Arc::new(reset_tokens));

        let response = service
            .request_password_reset("ghost@test.com")
            .await
            .unwrap();
        assert!(response.token.is_none());
        assert_eq!(response.message, RESET_REQUESTED_MESSAGE);
    }

    #[tokio::test]
    async fn test_request_reset_known_email_stores_token() {
        let mut repository = MockTestUserRepository::new();
        let mut reset_tokens = MockTestResetTokenStore::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(test_user("ana@test.com"))));
        reset_tokens
            .expect_insert()
            .withf(|token, email| !token.is_empty() && email == "ana@test.com")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = UserService::new(Arc::new(repository), Arc::new(reset_tokens));

        let response = service
            .request_password_reset("ana@test.com")
            .await
            .unwrap();
        assert!(response.token.is_some());
    }

    #[tokio::test]
    async fn test_reset_password_unknown_token() {
        let mut repository = MockTestUserRepository::new();
        let mut reset_tokens = MockTestResetTokenStore::new();

        reset_tokens.expect_get().times(1).returning(|_| Ok(None));
        repository.expect_update_password_hash().times(0);

        let service = UserService::new(Arc::new(repository), Arc::new(reset_tokens));

        let result = service.reset_password("bogus", "Senha123!").await;
        assert!(matches!(result, Err(UserError::InvalidResetToken)));
    }

    #[tokio::test]
    async fn test_reset_password_weak_password_keeps_token() {
        let mut repository = MockTestUserRepository::new();
        let mut reset_tokens = MockTestResetTokenStore::new();

        reset_tokens
            .expect_get()
            .times(1)
            .returning(|_| Ok(Some("ana@test.com".to_string())));
        // No mutation, no token consumption
        repository.expect_update_password_hash().times(0);
        reset_tokens.expect_remove().times(0);

        let service = UserService::new(Arc::new(repository), Arc::new(reset_tokens));

        let result = service.reset_password("token123", "weak").await;
        assert!(matches!(result, Err(UserError::WeakPassword(_))));
    }

    #[tokio::test]
    async fn test_reset_password_success_consumes_token() {
        let mut repository = MockTestUserRepository::new();
        let mut reset_tokens = MockTestResetTokenStore::new();

        reset_tokens
            .expect_get()
            .with(eq("token123"))
            .times(1)
            .returning(|_| Ok(Some("ana@test.com".to_string())));
        repository
            .expect_update_password_hash()
            .withf(|email, hash| email == "ana@test.com" && hash.starts_with("$argon2"))
            .times(1)
            .returning(|_, _| Ok(()));
        reset_tokens
            .expect_remove()
            .with(eq("token123"))
            .times(1)
            .returning(|_| Ok(()));

        let service = UserService::new(Arc::new(repository), Arc::new(reset_tokens));

        let message = service.reset_password("token123", "Nova123!").await.unwrap();
        assert_eq!(message, "Password reset successfully");
    }
}
