//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → router.rs (render table lookup)
//!     → matcher.rs (evaluate path patterns)
//!     → Return: matched ServerRoute or NoMatch
//!
//! Table Compilation (at startup):
//!     ServerRouteConfig[]
//!     → Parse path patterns
//!     → Freeze as immutable RenderTable
//! ```
//!
//! # Design Decisions
//! - Table compiled at startup, immutable at runtime
//! - No regex in hot path (segment comparison only)
//! - Deterministic: same path always resolves to the same entry
//! - First match wins, in declaration order

pub mod matcher;
pub mod router;

pub use matcher::{PathPattern, RouteError, Segment};
pub use router::{RenderMode, RenderTable, ServerRoute};
