use std::net::SocketAddr;
use std::sync::Arc;

use account_service::domain::auth::errors::LoginAttemptError;
use account_service::domain::auth::models::LoginAttempt;
use account_service::domain::auth::ports::LoginAttemptRepository;
use account_service::domain::auth::service::AuthService;
use account_service::domain::user::service::UserService;
use account_service::inbound::http::router::create_router;
use account_service::outbound::reset_tokens::InMemoryResetTokenStore;
use account_service::user::errors::UserError;
use account_service::user::models::User;
use account_service::user::models::UserId;
use account_service::user::ports::UserRepository;
use async_trait::async_trait;
use auth::Authenticator;
use tokio::sync::Mutex;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// In-memory user store standing in for Postgres. Mimics the unique index
/// on email by rejecting duplicates at insert time.
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| u.id == *id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| u.email.as_str() == email).cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        Ok(self.users.lock().await.clone())
    }

    async fn update_password_hash(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<(), UserError> {
        let mut users = self.users.lock().await;
        if let Some(user) = users.iter_mut().find(|u| u.email.as_str() == email) {
            user.password_hash = password_hash.to_string();
        }
        Ok(())
    }
}

/// In-memory append-only attempt log, inspectable by tests.
pub struct InMemoryLoginAttemptRepository {
    attempts: Mutex<Vec<LoginAttempt>>,
}

impl InMemoryLoginAttemptRepository {
    pub fn new() -> Self {
        Self {
            attempts: Mutex::new(Vec::new()),
        }
    }

    pub async fn recorded(&self) -> Vec<LoginAttempt> {
        self.attempts.lock().await.clone()
    }
}

#[async_trait]
impl LoginAttemptRepository for InMemoryLoginAttemptRepository {
    async fn record(&self, attempt: &LoginAttempt) -> Result<(), LoginAttemptError> {
        self.attempts.lock().await.push(attempt.clone());
        Ok(())
    }
}

/// Test application serving the real router on a random loopback port with
/// in-memory adapters behind the domain services.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub authenticator: Arc<Authenticator>,
    pub login_attempts: Arc<InMemoryLoginAttemptRepository>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let users = Arc::new(InMemoryUserRepository::new());
        let login_attempts = Arc::new(InMemoryLoginAttemptRepository::new());
        let reset_tokens = Arc::new(InMemoryResetTokenStore::new());
        let authenticator = Arc::new(Authenticator::new(TEST_JWT_SECRET));

        let user_service = Arc::new(UserService::new(Arc::clone(&users), reset_tokens));
        let auth_service = Arc::new(AuthService::new(
            users,
            Arc::clone(&login_attempts),
            Arc::clone(&authenticator),
            1,
        ));

        let router = create_router(user_service, auth_service, Arc::clone(&authenticator));

        tokio::spawn(async move {
            axum::serve(
                listener,
                router.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            authenticator,
            login_attempts,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Register a user and return the response body's `data` object.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Option<&str>,
    ) -> serde_json::Value {
        let mut body = serde_json::json!({
            "name": name,
            "email": email,
            "password": password,
        });
        if let Some(role) = role {
            body["role"] = serde_json::json!(role);
        }

        let response = self
            .post("/user/register")
            .json(&body)
            .send()
            .await
            .expect("Failed to execute register request");
        assert_eq!(response.status().as_u16(), 201);

        let body: serde_json::Value = response.json().await.expect("Invalid register response");
        body["data"].clone()
    }

    /// Log in and return the access token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/auth/login")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute login request");
        assert_eq!(response.status().as_u16(), 201);

        let body: serde_json::Value = response.json().await.expect("Invalid login response");
        body["data"]["access_token"]
            .as_str()
            .expect("Missing access_token")
            .to_string()
    }
}
