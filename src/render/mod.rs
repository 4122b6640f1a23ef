//! Rendering-mode selection and page production.
//!
//! # Data Flow
//! ```text
//! Request path
//!     → shell::ClientRoutes (which component, or 404)
//!     → routing::RenderTable (client / server / prerender)
//!     → renderer.rs
//!         client    → minimal shell + route manifest
//!         server    → navbar + component, rendered per request
//!         prerender → prerender.rs store (filled at startup or first hit)
//! ```

pub mod prerender;
pub mod renderer;

use thiserror::Error;

use crate::routing::RouteError;

pub use prerender::{write_prerendered, PrerenderStore};
pub use renderer::{PageRenderer, RenderedPage};

/// Errors produced while turning a path into markup.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no page at '{0}'")]
    NotFound(String),

    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid render table: {0}")]
    Route(#[from] RouteError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
