//! Shared utilities for integration tests.

use std::net::SocketAddr;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, Response};
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceExt;

use page_shell::config::ShellConfig;
use page_shell::lifecycle::{bootstrap, Shutdown};

/// Start a real server on an ephemeral port. Dropping the returned
/// `Shutdown` does not stop it; call `trigger` for that.
#[allow(dead_code)]
pub async fn spawn_server(config: ShellConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = bootstrap(config).unwrap();
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}

/// In-process router for the given configuration.
#[allow(dead_code)]
pub fn router(config: ShellConfig) -> Router {
    bootstrap(config).unwrap().router()
}

/// Send one request through the router, returning the response and its body text.
#[allow(dead_code)]
pub async fn send(router: &Router, method: Method, uri: &str) -> (Response<Body>, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    (
        Response::from_parts(parts, Body::empty()),
        String::from_utf8(bytes.to_vec()).unwrap(),
    )
}

#[allow(dead_code)]
pub async fn get(router: &Router, uri: &str) -> (Response<Body>, String) {
    send(router, Method::GET, uri).await
}
