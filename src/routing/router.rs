//! Render-mode table lookup.
//!
//! # Responsibilities
//! - Store compiled server routes
//! - Resolve the render mode for a request path
//! - Return matched route or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (shared across requests without locks)
//! - O(n) scan in declaration order (tables are a handful of entries)
//! - Explicit NoMatch rather than silent default

use serde::{Deserialize, Serialize};

use crate::config::ServerRouteConfig;
use crate::routing::matcher::{PathPattern, RouteError};

/// How the markup for a page is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// The server returns a minimal shell and the browser renders.
    Client,
    /// The server renders full markup for every request.
    Server,
    /// Markup is generated once ahead of time and reused.
    Prerender,
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Client => "client",
            RenderMode::Server => "server",
            RenderMode::Prerender => "prerender",
        }
    }
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A compiled render-table entry.
#[derive(Debug, Clone)]
pub struct ServerRoute {
    pub pattern: PathPattern,
    pub render_mode: RenderMode,
}

/// The server render-mode table.
#[derive(Debug, Clone)]
pub struct RenderTable {
    routes: Vec<ServerRoute>,
}

impl RenderTable {
    /// Compile the table from configuration, preserving declaration order.
    pub fn from_config(configs: &[ServerRouteConfig]) -> Result<Self, RouteError> {
        let routes = configs
            .iter()
            .map(|c| {
                Ok(ServerRoute {
                    pattern: PathPattern::parse(&c.path)?,
                    render_mode: c.render_mode,
                })
            })
            .collect::<Result<Vec<_>, RouteError>>()?;

        tracing::debug!(routes = routes.len(), "Render table compiled");
        Ok(Self { routes })
    }

    /// Find the first entry matching `path`.
    pub fn resolve(&self, path: &str) -> Option<&ServerRoute> {
        self.routes.iter().find(|r| r.pattern.matches(path))
    }

    /// Render mode for `path`, if any entry matches.
    pub fn mode_for(&self, path: &str) -> Option<RenderMode> {
        self.resolve(path).map(|r| r.render_mode)
    }

    pub fn routes(&self) -> &[ServerRoute] {
        &self.routes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::default_server_routes;

    fn default_table() -> RenderTable {
        RenderTable::from_config(&default_server_routes()).unwrap()
    }

    #[test]
    fn test_login_is_client_rendered() {
        let table = default_table();
        assert_eq!(table.mode_for("/login"), Some(RenderMode::Client));
    }

    #[test]
    fn test_wildcard_covers_everything_else() {
        let table = default_table();
        for path in ["/", "/about", "/login/extra", "/LOGIN", "/a/b/c"] {
            let route = table.resolve(path).unwrap();
            assert!(route.pattern.is_wildcard(), "{path} should hit the fallback");
            assert_eq!(route.render_mode, RenderMode::Prerender);
        }
    }

    #[test]
    fn test_first_match_wins() {
        let table = RenderTable::from_config(&[
            ServerRouteConfig::new("users/:id", RenderMode::Server),
            ServerRouteConfig::new("users/me", RenderMode::Client),
        ])
        .unwrap();

        assert_eq!(table.mode_for("/users/me"), Some(RenderMode::Server));
    }

    #[test]
    fn test_no_match_without_fallback() {
        let table =
            RenderTable::from_config(&[ServerRouteConfig::new("login", RenderMode::Server)])
                .unwrap();
        assert!(table.resolve("/other").is_none());
    }

    #[test]
    fn test_invalid_entry_fails_compilation() {
        let err = RenderTable::from_config(&[ServerRouteConfig::new("**/x", RenderMode::Server)])
            .unwrap_err();
        assert_eq!(err, RouteError::CatchAllNotFinal("**/x".into()));
    }
}
