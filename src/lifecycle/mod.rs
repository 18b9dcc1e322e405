//! Process lifecycle: startup ordering and graceful shutdown.

pub mod shutdown;

pub use shutdown::{signal_received, Shutdown};
