//! API-key issuance.

use std::sync::Arc;

use uuid::Uuid;

use crate::keys::store::{ApiKeyStore, KeyStoreError};

/// Issues opaque API keys and records them in the store.
#[derive(Clone)]
pub struct ApiKeyIssuer {
    store: Arc<dyn ApiKeyStore>,
}

impl ApiKeyIssuer {
    pub fn new(store: Arc<dyn ApiKeyStore>) -> Self {
        Self { store }
    }

    /// Generate a fresh random key and persist it for `user_id`.
    ///
    /// If persistence fails the key is NOT returned: a token the caller
    /// cannot later validate against the store is worse than a retryable
    /// error.
    pub fn issue(&self, user_id: &str) -> Result<String, KeyStoreError> {
        let key = Uuid::new_v4().to_string();
        self.store.put(user_id, &key)?;
        tracing::info!(user_id = %user_id, "API key issued");
        Ok(key)
    }

    /// Generate a random key without persisting it.
    pub fn ephemeral(&self) -> String {
        Uuid::new_v4().to_string()
    }

    pub fn store(&self) -> &Arc<dyn ApiKeyStore> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::store::InMemoryKeyStore;

    #[test]
    fn test_issue_is_unique_per_call() {
        let issuer = ApiKeyIssuer::new(Arc::new(InMemoryKeyStore::new()));
        let first = issuer.issue("alice").unwrap();
        let second = issuer.issue("alice").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_issued_key_is_persisted() {
        let store = Arc::new(InMemoryKeyStore::new());
        let issuer = ApiKeyIssuer::new(store.clone());
        let key = issuer.issue("alice").unwrap();
        assert!(store.contains_key(&key));
    }

    #[test]
    fn test_failed_persistence_returns_no_key() {
        struct FailingStore;
        impl ApiKeyStore for FailingStore {
            fn put(&self, _: &str, _: &str) -> Result<(), KeyStoreError> {
                Err(KeyStoreError::WriteFailed("disk full".to_string()))
            }
            fn contains_key(&self, _: &str) -> bool {
                false
            }
            fn key_for_user(&self, _: &str) -> Option<String> {
                None
            }
        }

        let issuer = ApiKeyIssuer::new(Arc::new(FailingStore));
        assert!(issuer.issue("alice").is_err());
    }

    #[test]
    fn test_ephemeral_not_persisted() {
        let store = Arc::new(InMemoryKeyStore::new());
        let issuer = ApiKeyIssuer::new(store.clone());
        let key = issuer.ephemeral();
        assert!(!store.contains_key(&key));
    }
}
