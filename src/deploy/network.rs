//! Network resolution.
//!
//! Maps a network identifier string to an RPC endpoint URL. The set of
//! supported networks is closed: an unknown identifier is rejected, never
//! guessed and never substituted with a default.

use std::str::FromStr;

use url::Url;

use crate::deploy::types::{DeployError, DeployResult};

/// Environment variable holding the Infura project identifier.
pub const INFURA_PROJECT_ID_ENV_VAR: &str = "INFURA_PROJECT_ID";

/// Supported target networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    EthSepolia,
    OpSepolia,
    ArbSepolia,
}

impl Network {
    /// All supported networks, for diagnostics and enumeration.
    pub const ALL: [Network; 3] = [Network::EthSepolia, Network::OpSepolia, Network::ArbSepolia];

    /// The identifier clients use on the wire.
    pub fn identifier(&self) -> &'static str {
        match self {
            Network::EthSepolia => "eth_sepolia",
            Network::OpSepolia => "op_sepolia",
            Network::ArbSepolia => "arb_sepolia",
        }
    }

    /// Infura hostname for this network.
    fn infura_host(&self) -> &'static str {
        match self {
            Network::EthSepolia => "sepolia.infura.io",
            Network::OpSepolia => "optimism-sepolia.infura.io",
            Network::ArbSepolia => "arbitrum-sepolia.infura.io",
        }
    }

    /// Build the RPC endpoint URL for this network with the given provider
    /// project id.
    pub fn rpc_url_with_project(&self, project_id: &str) -> DeployResult<Url> {
        let raw = format!("https://{}/v3/{}", self.infura_host(), project_id);
        raw.parse()
            .map_err(|e| DeployError::Submission(format!("Invalid RPC URL '{}': {}", raw, e)))
    }

    /// Build the RPC endpoint URL, reading the project id from the
    /// environment at call time.
    pub fn rpc_url(&self) -> DeployResult<Url> {
        let project_id = std::env::var(INFURA_PROJECT_ID_ENV_VAR)
            .map_err(|_| DeployError::MissingCredential(INFURA_PROJECT_ID_ENV_VAR))?;
        self.rpc_url_with_project(&project_id)
    }
}

impl FromStr for Network {
    type Err = DeployError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eth_sepolia" => Ok(Network::EthSepolia),
            "op_sepolia" => Ok(Network::OpSepolia),
            "arb_sepolia" => Ok(Network::ArbSepolia),
            other => Err(DeployError::UnsupportedNetwork(other.to_string())),
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_identifiers_parse() {
        for network in Network::ALL {
            let parsed: Network = network.identifier().parse().unwrap();
            assert_eq!(parsed, network);
        }
    }

    #[test]
    fn test_unknown_identifier_rejected() {
        for bad in ["goerli", "mainnet", "", "ETH_SEPOLIA", "eth-sepolia"] {
            let err = bad.parse::<Network>().unwrap_err();
            assert!(matches!(err, DeployError::UnsupportedNetwork(_)), "{bad}");
        }
    }

    #[test]
    fn test_rpc_url_templating() {
        let url = Network::EthSepolia
            .rpc_url_with_project("my-project")
            .unwrap();
        assert_eq!(url.as_str(), "https://sepolia.infura.io/v3/my-project");

        let url = Network::ArbSepolia.rpc_url_with_project("p").unwrap();
        assert_eq!(url.host_str(), Some("arbitrum-sepolia.infura.io"));
    }
}
