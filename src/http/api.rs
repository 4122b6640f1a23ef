//! JSON API.
//!
//! The echo endpoint returns its path parameter as `{"name": ...}`. It is
//! stateless and idempotent; the parameter is percent-decoded by the extractor.

use axum::{extract::Path, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EchoResponse {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// Routes nested under the configured mount path.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/{name}", get(echo))
}

pub async fn echo(Path(name): Path<String>) -> Json<EchoResponse> {
    tracing::debug!(name = %name, "Echo");
    Json(EchoResponse { name })
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
