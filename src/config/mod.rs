//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ShellConfig (validated, immutable)
//!     → shared via Arc to all subsystems
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the render table never changes at runtime
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::ShellConfig;
pub use schema::{
    ApiConfig, ListenerConfig, LogFormat, ObservabilityConfig, RenderConfig, SecurityConfig,
    ServerRouteConfig, TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
