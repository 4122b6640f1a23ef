//! Request concurrency limit.
//!
//! # Responsibilities
//! - Cap in-flight requests at `listener.max_connections`
//!
//! # Design Decisions
//! - Requests beyond the cap wait for a slot rather than being rejected
//! - The permit is held until the response is produced

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio::sync::Semaphore;

pub async fn limit_concurrency(
    State(slots): State<Arc<Semaphore>>,
    request: Request,
    next: Next,
) -> Response {
    let _permit = match slots.acquire().await {
        Ok(permit) => permit,
        Err(_) => {
            return (StatusCode::SERVICE_UNAVAILABLE, "Server shutting down").into_response();
        }
    };

    tracing::trace!(available = slots.available_permits(), "Request slot acquired");
    next.run(request).await
}
