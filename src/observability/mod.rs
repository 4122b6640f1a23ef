//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging, JSON optional for machine parsing
//! - Request ID flows through request spans
//! - Metrics are cheap (no-ops until a recorder is installed)

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
