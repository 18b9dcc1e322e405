//! Contract deployment subsystem.
//!
//! # Data Flow
//! ```text
//! DeployRequest (artifact + network identifier)
//!     → artifact.rs (presence validation)
//!     → network.rs (identifier → RPC endpoint URL)
//!     → signer.rs (custodial key from environment)
//!     → deployer.rs (build, sign, broadcast, await receipt)
//!     → DeploymentOutcome (contract address + transaction hash)
//! ```
//!
//! # Security Constraints
//! - Private key ONLY from environment variables, read per request
//! - Never log private keys or artifact bytecode
//! - The broadcast is non-idempotent and never retried at this layer

pub mod artifact;
pub mod deployer;
pub mod handlers;
pub mod network;
pub mod signer;
pub mod types;

pub use artifact::{ContractArtifact, DeployRequest, ValidatedArtifact};
pub use deployer::{ContractDeployer, DeploymentBackend};
pub use network::Network;
pub use types::{DeployError, DeploymentOutcome};
