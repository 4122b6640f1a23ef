//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, limits, security headers)
//! - Mount the JSON API under its configured prefix, or at the root
//! - Hand every other path to the page renderer; client route paths are
//!   registered explicitly so they outrank a root-mounted `/{name}`
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{any, get},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, Semaphore};
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ShellConfig;
use crate::http::api;
use crate::http::pages::page_handler;
use crate::http::request::{request_id, MakeRequestUuidV4};
use crate::observability::metrics;
use crate::render::PageRenderer;
use crate::security::{headers, limits::limit_concurrency};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<PageRenderer>,
    pub config: Arc<ShellConfig>,
}

/// HTTP server for the page shell.
pub struct HttpServer {
    router: Router,
    state: AppState,
}

impl HttpServer {
    /// Create a server around an already built renderer.
    pub fn with_renderer(config: ShellConfig, renderer: Arc<PageRenderer>) -> Self {
        let state = AppState {
            renderer,
            config: Arc::new(config),
        };
        let router = Self::build_router(state.clone());
        Self { router, state }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(state: AppState) -> Router {
        let config = state.config.clone();

        let mut routes = Router::new().route("/health", get(api::health));
        for route in state.renderer.routes().iter() {
            routes = routes.route(&format!("/{}", route.path()), any(page_handler));
        }
        routes = if config.api.is_root() {
            routes.merge(api::router())
        } else {
            routes.nest(&config.api.mount_path, api::router())
        };

        let mut router = routes.fallback(page_handler).with_state(state);

        if let Some(dir) = &config.render.assets_dir {
            router = router.nest_service("/assets", ServeDir::new(dir));
        }

        if config.security.enable_headers {
            router = headers::apply_security_headers(router);
        }

        router.layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %req.method(),
                        path = %req.uri().path(),
                        request_id = %request_id(req)
                    )
                }))
                .layer(middleware::from_fn(track_metrics))
                // Time spent waiting for a permit counts against the request timeout.
                .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
                .layer(middleware::from_fn_with_state(
                    Arc::new(Semaphore::new(config.listener.max_connections)),
                    limit_concurrency,
                ))
                .layer(RequestBodyLimitLayer::new(config.security.max_body_size)),
        )
    }

    /// The fully layered router, for serving or in-process requests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn renderer(&self) -> &Arc<PageRenderer> {
        &self.state.renderer
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ShellConfig {
        &self.state.config
    }

    /// Run the server until `shutdown` fires, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            api = %self.state.config.api.mount_path,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let response = next.run(request).await;
    metrics::record_request(method.as_str(), response.status().as_u16(), start);
    response
}
