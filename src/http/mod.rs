//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, routing)
//!     → middleware/api_key.rs (gate on the API prefix)
//!     → deploy::handlers / keys::handlers
//!     → JSON response ({ message, error? } envelope on failure)
//! ```

pub mod middleware;
pub mod server;

pub use server::{AppState, HttpServer};
