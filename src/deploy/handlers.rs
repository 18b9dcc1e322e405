//! HTTP handlers for the deployment endpoint.
//!
//! # Data Flow
//! ```text
//! POST body
//!     → artifact.rs (presence validation, 400 on failure)
//!     → network.rs (identifier → RPC URL, 400 on unknown network)
//!     → signer.rs (custodial key from env, 500 if absent)
//!     → deployer.rs (broadcast + receipt wait, 500 on failure)
//!     → { contractAddress, transactionHash }
//! ```
//!
//! Validation must fully pass before the chain is touched: an invalid
//! artifact or unknown network never reaches the deployment library.

use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::deploy::artifact::DeployRequest;
use crate::deploy::deployer::DeploymentBackend;
use crate::deploy::network::Network;
use crate::deploy::signer::signer_from_env;
use crate::deploy::types::{DeployError, DeploymentOutcome};
use crate::http::server::AppState;
use crate::observability::metrics;

impl IntoResponse for DeployError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            // Client input errors: the message alone, passed verbatim.
            DeployError::InvalidArtifact | DeployError::UnsupportedNetwork(_) => (
                StatusCode::BAD_REQUEST,
                json!({ "message": self.to_string() }),
            ),
            // Everything else is a server-side failure; keep the operator
            // diagnostic in a separate field.
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": "Deployment failed", "error": self.to_string() }),
            ),
        };
        (status, Json(body)).into_response()
    }
}

/// `GET deployContract` — liveness probe.
pub async fn deploy_probe() -> Json<serde_json::Value> {
    Json(json!({ "message": "Hello World working" }))
}

/// `POST deployContract` — validate, resolve, deploy, respond.
pub async fn deploy_contract(
    State(state): State<AppState>,
    payload: Result<Json<DeployRequest>, JsonRejection>,
) -> Response {
    let start = Instant::now();

    let response = handle_deploy(&state, payload).await;
    let response = match response {
        Ok(outcome) => Json(outcome).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Deployment request failed");
            e.into_response()
        }
    };

    metrics::record_request("deployContract", "POST", response.status().as_u16(), start);
    response
}

async fn handle_deploy(
    state: &AppState,
    payload: Result<Json<DeployRequest>, JsonRejection>,
) -> Result<DeploymentOutcome, DeployError> {
    // A body that does not even deserialize is treated the same as a
    // missing artifact.
    let Json(request) = payload.map_err(|_| DeployError::InvalidArtifact)?;

    let (artifact, network_id) = request.into_parts()?;
    let network: Network = network_id.parse()?;
    let rpc_url = network.rpc_url()?;
    let signer = signer_from_env()?;

    tracing::info!(
        network = %network,
        bytecode_len = artifact.bytecode.len(),
        abi_entries = artifact.abi.len(),
        "Deploying contract"
    );

    state.deployer.deploy(rpc_url, signer, &artifact).await
}
