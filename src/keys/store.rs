//! API-key persistence.
//!
//! # Design Decisions
//! - Persistence sits behind a trait so the in-process map can be swapped
//!   for a real key-value store without touching the issuer or the gate
//! - Lookups are by key value (the gate only sees the header) and by user
//!   id (re-issuance and support tooling)

use dashmap::DashMap;
use thiserror::Error;

/// Errors from the key persistence layer.
#[derive(Debug, Error)]
pub enum KeyStoreError {
    /// The backing store rejected or lost the write.
    #[error("Key store write failed: {0}")]
    WriteFailed(String),
}

/// Abstract persistence for issued API keys.
pub trait ApiKeyStore: Send + Sync {
    /// Persist `key` against `user_id`, replacing any previous key.
    fn put(&self, user_id: &str, key: &str) -> Result<(), KeyStoreError>;

    /// Whether `key` was ever issued and persisted.
    fn contains_key(&self, key: &str) -> bool;

    /// The key currently on record for `user_id`, if any.
    fn key_for_user(&self, user_id: &str) -> Option<String>;
}

/// In-process key store backed by concurrent maps.
///
/// Suitable for a single instance; a multi-instance deployment needs a
/// shared backing store behind the same trait.
#[derive(Debug, Default)]
pub struct InMemoryKeyStore {
    by_user: DashMap<String, String>,
    keys: DashMap<String, String>,
}

impl InMemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ApiKeyStore for InMemoryKeyStore {
    fn put(&self, user_id: &str, key: &str) -> Result<(), KeyStoreError> {
        if let Some(previous) = self.by_user.insert(user_id.to_string(), key.to_string()) {
            // A replaced key is no longer valid at the gate.
            self.keys.remove(&previous);
        }
        self.keys.insert(key.to_string(), user_id.to_string());
        Ok(())
    }

    fn contains_key(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }

    fn key_for_user(&self, user_id: &str) -> Option<String> {
        self.by_user.get(user_id).map(|k| k.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_and_lookup() {
        let store = InMemoryKeyStore::new();
        store.put("alice", "key-1").unwrap();

        assert!(store.contains_key("key-1"));
        assert_eq!(store.key_for_user("alice").as_deref(), Some("key-1"));
        assert!(!store.contains_key("key-2"));
        assert!(store.key_for_user("bob").is_none());
    }

    #[test]
    fn test_reissue_invalidates_previous_key() {
        let store = InMemoryKeyStore::new();
        store.put("alice", "key-1").unwrap();
        store.put("alice", "key-2").unwrap();

        assert!(!store.contains_key("key-1"));
        assert!(store.contains_key("key-2"));
        assert_eq!(store.key_for_user("alice").as_deref(), Some("key-2"));
    }
}
