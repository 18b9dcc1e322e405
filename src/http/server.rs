//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (tracing, timeout, request ID, API-key gate)
//! - Bind the server to a listener and serve until shutdown
//!
//! Each request is handled independently; the only state shared across
//! requests is the key store behind `ApiKeyIssuer`.

use std::sync::Arc;
use std::time::Duration;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::deploy::handlers::{deploy_contract, deploy_probe};
use crate::deploy::{ContractDeployer, DeploymentBackend};
use crate::http::middleware::api_key_gate;
use crate::keys::handlers::{generate_api_key, get_api_key};
use crate::keys::{ApiKeyIssuer, ApiKeyStore, InMemoryKeyStore};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub deployer: Arc<dyn DeploymentBackend>,
    pub issuer: ApiKeyIssuer,
}

/// HTTP server for the deploy gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and an
    /// in-process key store.
    pub fn new(config: GatewayConfig) -> Self {
        Self::with_store(config, Arc::new(InMemoryKeyStore::new()))
    }

    /// Create a server backed by an externally supplied key store.
    pub fn with_store(config: GatewayConfig, store: Arc<dyn ApiKeyStore>) -> Self {
        let deployer = Arc::new(ContractDeployer::new(Duration::from_secs(
            config.timeouts.receipt_wait_secs,
        )));
        Self::with_backend(config, store, deployer)
    }

    /// Create a server with both the key store and the deployment backend
    /// supplied by the caller.
    pub fn with_backend(
        config: GatewayConfig,
        store: Arc<dyn ApiKeyStore>,
        deployer: Arc<dyn DeploymentBackend>,
    ) -> Self {
        let issuer = ApiKeyIssuer::new(store);

        let state = AppState {
            config: Arc::new(config.clone()),
            deployer,
            issuer,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The API-key gate is attached to the nested `/api` router only;
    /// requests outside the prefix fall through to the plain 404 fallback
    /// untouched.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        let api = Router::new()
            .route("/deployContract", get(deploy_probe).post(deploy_contract))
            .route("/generateApiKey", post(generate_api_key))
            .route("/getApiKey", get(get_api_key))
            .layer(middleware::from_fn_with_state(state.clone(), api_key_gate))
            .with_state(state);

        Router::new()
            .nest("/api", api)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            gate_enabled = self.config.gate.enabled,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
