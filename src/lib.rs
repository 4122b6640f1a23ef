//! Page shell server library.
//!
//! A navbar-and-outlet page shell with a per-path render-mode table
//! (client, server, prerender) and a small JSON echo API.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod render;
pub mod routing;
pub mod security;
pub mod shell;

pub use config::schema::ShellConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use render::PageRenderer;
pub use routing::RenderMode;
