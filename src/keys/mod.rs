//! API-key subsystem.
//!
//! # Data Flow
//! ```text
//! POST generateApiKey { userId }
//!     → issuer.rs (UUIDv4 token)
//!     → store.rs (persist against user id)
//!     → { apiKey }
//!
//! Inbound request with x-api-key header
//!     → http::middleware::api_key (gate)
//!     → store.rs (lookup by key value)
//! ```

pub mod handlers;
pub mod issuer;
pub mod store;

pub use issuer::ApiKeyIssuer;
pub use store::{ApiKeyStore, InMemoryKeyStore, KeyStoreError};
