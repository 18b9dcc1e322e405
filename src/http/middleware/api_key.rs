//! API-key gate middleware.
//!
//! Applies to every route under the API prefix:
//! - header absent → the request passes through unmodified, any path
//! - header present → the key is looked up in the store; unknown keys are
//!   rejected with 401
//! - gate disabled by config → pure passthrough
//!
//! Rejection therefore requires the header to be present AND the lookup to
//! fail; absence alone never blocks a request.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::http::server::AppState;

/// Header carrying the caller-supplied API key.
pub const X_API_KEY: &str = "x-api-key";

pub async fn api_key_gate(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !state.config.gate.enabled {
        return next.run(req).await;
    }

    let Some(value) = req.headers().get(X_API_KEY) else {
        return next.run(req).await;
    };

    let key = value.to_str().unwrap_or_default();
    if state.issuer.store().contains_key(key) {
        next.run(req).await
    } else {
        tracing::warn!(path = %req.uri().path(), "Rejected request with unknown API key");
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid API Key" })),
        )
            .into_response()
    }
}
