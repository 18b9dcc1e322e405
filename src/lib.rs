//! Contract deploy gateway library.
//!
//! An HTTP façade over JSON-RPC contract deployment: accepts a compiled
//! artifact (ABI + bytecode) and a network name, deploys with a custodial
//! signing key, and returns the contract address and transaction hash.
//! Companion surfaces: API-key issuance and a header gate on the API prefix.

pub mod config;
pub mod deploy;
pub mod http;
pub mod keys;
pub mod lifecycle;
pub mod observability;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
