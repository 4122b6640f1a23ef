//! Navigation shell.
//!
//! # Data Flow
//! ```text
//! Request path
//!     → routes.rs (client route table, first exact match)
//!     → component.rs (eager component, or lazy loader run once)
//!     → document.rs (navbar + outlet wrapped in the HTML document)
//! ```
//!
//! # Design Decisions
//! - The navbar is rendered on every page; only the outlet content changes
//! - No fallback in the client table: unknown paths are a plain 404
//! - Lazy components are materialised on first navigation and cached

pub mod component;
pub mod document;
pub mod navbar;
pub mod pages;
pub mod routes;

pub use component::Component;
pub use document::AppShell;
pub use navbar::{NavLink, Navbar};
pub use pages::{IndexPage, LoginPage};
pub use routes::{ClientRoute, ClientRoutes};
