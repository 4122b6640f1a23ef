//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Outgoing response:
//!     → headers.rs (hardening headers)
//! Incoming request:
//!     → limits.rs (in-flight request cap)
//!     → body size limit (http::server middleware stack)
//! ```

pub mod headers;
pub mod limits;
