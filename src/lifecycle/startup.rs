//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the page renderer from validated configuration
//! - Prerender pages before traffic arrives
//! - Start the metrics exporter when enabled

use std::net::{AddrParseError, SocketAddr};
use std::sync::Arc;

use thiserror::Error;

use crate::config::ShellConfig;
use crate::http::HttpServer;
use crate::observability::metrics;
use crate::render::{PageRenderer, RenderError};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error("invalid metrics address '{address}': {source}")]
    MetricsAddress {
        address: String,
        #[source]
        source: AddrParseError,
    },
}

/// Prepare everything the server needs, in dependency order.
pub fn bootstrap(config: ShellConfig) -> Result<HttpServer, StartupError> {
    let renderer = Arc::new(PageRenderer::from_config(&config.render)?);

    for route in renderer.table().routes() {
        tracing::info!(
            path = %route.pattern,
            render_mode = %route.render_mode,
            "Render route"
        );
    }

    if config.render.prerender_on_startup {
        let count = renderer.prerender_all()?;
        tracing::info!(pages = count, "Prerendering complete");
    }

    if config.observability.metrics_enabled {
        let address = &config.observability.metrics_address;
        let addr = address
            .parse::<SocketAddr>()
            .map_err(|source| StartupError::MetricsAddress {
                address: address.clone(),
                source,
            })?;
        metrics::init_metrics(addr);
    }

    Ok(HttpServer::with_renderer(config, renderer))
}
