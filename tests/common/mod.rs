//! Shared helpers for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use deploy_gateway::config::GatewayConfig;
use deploy_gateway::deploy::DeploymentBackend;
use deploy_gateway::http::HttpServer;
use deploy_gateway::keys::{ApiKeyStore, InMemoryKeyStore};
use deploy_gateway::lifecycle::Shutdown;

/// Start a gateway on an ephemeral port and return its address plus the
/// shutdown handle keeping it alive.
pub async fn spawn_gateway(config: GatewayConfig) -> (SocketAddr, Shutdown) {
    spawn_server(HttpServer::new(config)).await
}

/// Start a gateway backed by the given key store.
pub async fn spawn_gateway_with_store(
    config: GatewayConfig,
    store: Arc<dyn ApiKeyStore>,
) -> (SocketAddr, Shutdown) {
    spawn_server(HttpServer::with_store(config, store)).await
}

/// Start a gateway with a caller-supplied deployment backend.
pub async fn spawn_gateway_with_backend(
    config: GatewayConfig,
    backend: Arc<dyn DeploymentBackend>,
) -> (SocketAddr, Shutdown) {
    let store = Arc::new(InMemoryKeyStore::new());
    spawn_server(HttpServer::with_backend(config, store, backend)).await
}

async fn spawn_server(server: HttpServer) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// A reqwest client that does not reuse pooled connections between tests.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
