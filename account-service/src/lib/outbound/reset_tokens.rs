use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::user::errors::ResetTokenStoreError;
use crate::user::ports::ResetTokenStore;

/// Process-local reset-token store.
///
/// Tokens live only as long as the process; a restart forgets every
/// outstanding reset. The mutex makes concurrent insert/lookup/removal from
/// in-flight requests safe. A multi-process deployment swaps this adapter
/// for one backed by a shared cache.
pub struct InMemoryResetTokenStore {
    tokens: Mutex<HashMap<String, String>>,
}

impl InMemoryResetTokenStore {
    pub fn new() -> Self {
        Self {
            tokens: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryResetTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResetTokenStore for InMemoryResetTokenStore {
    async fn insert(&self, token: String, email: String) -> Result<(), ResetTokenStoreError> {
        self.tokens.lock().await.insert(token, email);
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<String>, ResetTokenStoreError> {
        Ok(self.tokens.lock().await.get(token).cloned())
    }

    async fn remove(&self, token: &str) -> Result<(), ResetTokenStoreError> {
        self.tokens.lock().await.remove(token);
        Ok(())
    }
}
