//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the shell server.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::RenderMode;

/// Root configuration for the page shell server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ShellConfig {
    /// Listener configuration (bind address, connection cap).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// JSON API settings.
    pub api: ApiConfig,

    /// Page rendering settings, including the render-mode table.
    pub render: RenderConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    #[serde(default)]
    pub security: SecurityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:4000").
    pub bind_address: String,

    /// Maximum concurrent in-flight requests (backpressure).
    pub max_connections: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:4000".to_string(),
            max_connections: 10_000,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// JSON API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Path the API router is nested under. "/" merges the echo route at the
    /// root; page paths such as `/login` still take precedence there.
    pub mount_path: String,
}

impl ApiConfig {
    /// Whether the API shares the root namespace with the pages.
    pub fn is_root(&self) -> bool {
        self.mount_path == "/"
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            mount_path: "/api".to_string(),
        }
    }
}

/// One entry of the server render-mode table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerRouteConfig {
    /// Path pattern, e.g. "login", "users/:id" or "**".
    pub path: String,

    /// How pages matching this path are produced.
    pub render_mode: RenderMode,
}

impl ServerRouteConfig {
    pub fn new(path: impl Into<String>, render_mode: RenderMode) -> Self {
        Self {
            path: path.into(),
            render_mode,
        }
    }
}

/// Page rendering configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Render-mode table, evaluated in declaration order.
    pub routes: Vec<ServerRouteConfig>,

    /// Document title prefix.
    pub title: String,

    /// Render every prerendered page before the listener starts.
    pub prerender_on_startup: bool,

    /// Directory served under `/assets`, if any.
    pub assets_dir: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            routes: default_server_routes(),
            title: "Page Shell".to_string(),
            prerender_on_startup: true,
            assets_dir: None,
        }
    }
}

/// The built-in render-mode table: the login page is rendered in the browser,
/// everything else is prerendered.
pub fn default_server_routes() -> Vec<ServerRouteConfig> {
    vec![
        ServerRouteConfig::new("login", RenderMode::Client),
        ServerRouteConfig::new("**", RenderMode::Prerender),
    ]
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9100".to_string(),
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Enable security headers.
    pub enable_headers: bool,
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
            max_body_size: 64 * 1024, // 64KB
        }
    }
}
