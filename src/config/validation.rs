//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the render table (unique paths, wildcard last, patterns parse)
//! - Validate value ranges (timeouts > 0, connection cap, addresses parse)
//! - Reject API mount paths the router cannot nest
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ShellConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;
use tokio::sync::Semaphore;

use crate::config::schema::ShellConfig;
use crate::routing::PathPattern;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("render route '{path}' is declared more than once")]
    DuplicatePath { path: String },

    #[error("wildcard route at position {index} must be the last entry")]
    WildcardNotLast { index: usize },

    #[error("render route '{path}' is invalid: {reason}")]
    InvalidPattern { path: String, reason: String },

    #[error("api mount path '{0}' must be '/' or start with '/' without a trailing '/' or empty segments")]
    InvalidMountPath(String),

    #[error("api mount path '{0}' must not contain ':', '*', '{{' or '}}' segments")]
    MountPathCapture(String),

    #[error("api mount path '{0}' collides with the assets directory mount")]
    MountPathAssets(String),

    #[error("listener.max_connections must be between 1 and {max}, got {value}")]
    InvalidMaxConnections { value: usize, max: usize },

    #[error("{field} '{value}' is not a valid socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,
}

/// Validate a parsed configuration, collecting every error found.
pub fn validate_config(config: &ShellConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let routes = &config.render.routes;
    let mut seen = HashSet::new();
    for (index, route) in routes.iter().enumerate() {
        let normalized = route.path.trim_matches('/');
        if !seen.insert(normalized) {
            errors.push(ValidationError::DuplicatePath {
                path: route.path.clone(),
            });
        }

        match PathPattern::parse(&route.path) {
            Ok(pattern) => {
                if pattern.is_wildcard() && index + 1 != routes.len() {
                    errors.push(ValidationError::WildcardNotLast { index });
                }
            }
            Err(e) => errors.push(ValidationError::InvalidPattern {
                path: route.path.clone(),
                reason: e.to_string(),
            }),
        }
    }

    let mount = &config.api.mount_path;
    if mount != "/" {
        if !mount.starts_with('/') || mount.ends_with('/') || mount.contains("//") {
            errors.push(ValidationError::InvalidMountPath(mount.clone()));
        }
        let capture = mount.split('/').any(|segment| {
            segment.starts_with(':')
                || segment.starts_with('*')
                || segment.contains('{')
                || segment.contains('}')
        });
        if capture {
            errors.push(ValidationError::MountPathCapture(mount.clone()));
        }
        if config.render.assets_dir.is_some() && mount == "/assets" {
            errors.push(ValidationError::MountPathAssets(mount.clone()));
        }
    }

    let max_connections = config.listener.max_connections;
    if !(1..=Semaphore::MAX_PERMITS).contains(&max_connections) {
        errors.push(ValidationError::InvalidMaxConnections {
            value: max_connections,
            max: Semaphore::MAX_PERMITS,
        });
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
