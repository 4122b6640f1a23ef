//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID assigned and propagated)
//!     → api.rs      GET {mount}/{name}  → {"name": ...}
//!     → pages.rs    GET anything else   → render::PageRenderer
//!     → response.rs (HTML response with render-mode header)
//!     → Send to client
//! ```

pub mod api;
pub mod pages;
pub mod request;
pub mod response;
pub mod server;

pub use api::EchoResponse;
pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
