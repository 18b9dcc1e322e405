//! Custodial signing key handling.
//!
//! # Security
//! - The private key is loaded ONLY from an environment variable
//! - The key is read at call time, per request, never cached in config
//! - The key is never logged or serialized

use alloy::signers::local::PrivateKeySigner;

use crate::deploy::types::{DeployError, DeployResult};

/// Environment variable name for the custodial private key.
pub const PRIVATE_KEY_ENV_VAR: &str = "PRIVATE_KEY";

/// Parse a hex-encoded private key into a signer.
///
/// Accepts the key with or without a `0x` prefix. The error message never
/// echoes key material.
pub fn signer_from_private_key(private_key_hex: &str) -> DeployResult<PrivateKeySigner> {
    let key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);

    let signer: PrivateKeySigner = key_hex
        .parse()
        .map_err(|e| DeployError::Wallet(format!("Invalid private key format: {}", e)))?;

    tracing::debug!(address = %signer.address(), "Signer loaded");

    Ok(signer)
}

/// Load the custodial signer from the environment.
///
/// Absence of the variable is a deployment configuration problem, not a
/// per-request issue; the request fails but the process keeps serving.
pub fn signer_from_env() -> DeployResult<PrivateKeySigner> {
    let private_key = std::env::var(PRIVATE_KEY_ENV_VAR)
        .map_err(|_| DeployError::MissingCredential(PRIVATE_KEY_ENV_VAR))?;
    signer_from_private_key(&private_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Well-known test private key (Anvil's first account)
    const TEST_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_signer_from_private_key() {
        let signer = signer_from_private_key(TEST_PRIVATE_KEY).unwrap();
        assert_eq!(
            signer.address().to_string().to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn test_signer_with_0x_prefix() {
        let signer = signer_from_private_key(&format!("0x{}", TEST_PRIVATE_KEY)).unwrap();
        assert_eq!(
            signer.address().to_string().to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn test_invalid_private_key() {
        let err = signer_from_private_key("invalid_key").unwrap_err();
        assert!(err.to_string().contains("Invalid private key"));
        // The bad input must not leak into the error
        assert!(!err.to_string().contains("invalid_key"));
    }
}
