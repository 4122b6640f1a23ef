//! Page renderer.
//!
//! # Responsibilities
//! - Resolve the client route and the render mode for a path
//! - Produce the client shell, a per-request render, or prerendered markup
//! - Prerender every eligible page ahead of traffic
//!
//! # Design Decisions
//! - The client shell does not depend on the path, so it is built once
//! - Paths without a render-table entry are rendered on the server

use std::sync::Arc;

use crate::config::RenderConfig;
use crate::observability::metrics;
use crate::render::{PrerenderStore, RenderError};
use crate::routing::{RenderMode, RenderTable};
use crate::shell::{AppShell, ClientRoute, ClientRoutes, Navbar};

/// Mode used when no render-table entry matches.
pub const FALLBACK_MODE: RenderMode = RenderMode::Server;

/// Markup produced for one request.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Normalized route path, e.g. "/" or "/login".
    pub path: String,
    pub mode: RenderMode,
    pub html: Arc<str>,
}

/// Combines the render table, the client routes and the root view.
pub struct PageRenderer {
    table: RenderTable,
    routes: ClientRoutes,
    shell: AppShell,
    store: PrerenderStore,
    client_shell: Arc<str>,
}

impl PageRenderer {
    pub fn new(table: RenderTable, routes: ClientRoutes, shell: AppShell) -> Result<Self, RenderError> {
        let client_shell = Arc::from(shell.client_shell(&routes.manifest())?);
        Ok(Self {
            table,
            routes,
            shell,
            store: PrerenderStore::new(),
            client_shell,
        })
    }

    /// Build the renderer for the built-in pages from configuration.
    pub fn from_config(config: &RenderConfig) -> Result<Self, RenderError> {
        let table = RenderTable::from_config(&config.routes)?;
        let routes = ClientRoutes::default_routes();
        let navbar = Navbar::new(config.title.clone(), routes.nav_links());
        let shell = AppShell::new(config.title.clone(), navbar);
        Self::new(table, routes, shell)
    }

    pub fn table(&self) -> &RenderTable {
        &self.table
    }

    pub fn routes(&self) -> &ClientRoutes {
        &self.routes
    }

    pub fn store(&self) -> &PrerenderStore {
        &self.store
    }

    /// Render mode applied to `path`.
    pub fn mode_for(&self, path: &str) -> RenderMode {
        self.table.mode_for(path).unwrap_or(FALLBACK_MODE)
    }

    /// Produce the markup for `path`.
    pub fn render(&self, path: &str) -> Result<RenderedPage, RenderError> {
        let route = self
            .routes
            .find(path)
            .ok_or_else(|| RenderError::NotFound(path.to_string()))?;
        let mode = self.mode_for(path);

        let html = match mode {
            RenderMode::Client => self.client_shell.clone(),
            RenderMode::Server => self.render_route(route, mode)?,
            RenderMode::Prerender => match self.store.get(route.path()) {
                Some(html) => html,
                None => {
                    tracing::debug!(path = %path, "Prerendered page missing, rendering now");
                    let html = self.render_route(route, mode)?;
                    self.store.insert(route.path(), html)
                }
            },
        };

        metrics::record_render(mode);
        Ok(RenderedPage {
            path: format!("/{}", route.path()),
            mode,
            html,
        })
    }

    /// Client routes whose render mode is `prerender`.
    pub fn prerender_targets(&self) -> Vec<&ClientRoute> {
        self.routes
            .iter()
            .filter(|r| self.mode_for(r.path()) == RenderMode::Prerender)
            .collect()
    }

    /// Render and store every prerender target. Returns the number of pages stored.
    pub fn prerender_all(&self) -> Result<usize, RenderError> {
        let targets = self.prerender_targets();
        for route in &targets {
            let html = self.render_route(route, RenderMode::Prerender)?;
            self.store.insert(route.path(), html);
            tracing::info!(path = %format!("/{}", route.path()), "Page prerendered");
        }
        Ok(targets.len())
    }

    fn render_route(&self, route: &ClientRoute, mode: RenderMode) -> Result<Arc<str>, RenderError> {
        let component = route.component();
        let html = self.shell.render_page(route.path(), component.as_ref(), mode)?;
        Ok(Arc::from(html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerRouteConfig;

    fn renderer(routes: Vec<ServerRouteConfig>) -> PageRenderer {
        let config = RenderConfig {
            routes,
            ..RenderConfig::default()
        };
        PageRenderer::from_config(&config).unwrap()
    }

    #[test]
    fn test_default_table_modes() {
        let renderer = PageRenderer::from_config(&RenderConfig::default()).unwrap();
        assert_eq!(renderer.mode_for("/login"), RenderMode::Client);
        assert_eq!(renderer.mode_for("/"), RenderMode::Prerender);
        assert_eq!(renderer.mode_for("/anything/else"), RenderMode::Prerender);
    }

    #[test]
    fn test_client_mode_serves_shell_without_loading() {
        let renderer = PageRenderer::from_config(&RenderConfig::default()).unwrap();
        let page = renderer.render("/login").unwrap();

        assert_eq!(page.mode, RenderMode::Client);
        assert!(page.html.contains("id=\"app-routes\""));
        assert!(!page.html.contains("page-login"));
        assert!(!renderer.routes().find("login").unwrap().is_loaded());
    }

    #[test]
    fn test_server_mode_renders_each_request() {
        let renderer = renderer(vec![ServerRouteConfig::new("**", RenderMode::Server)]);
        let first = renderer.render("/login").unwrap();
        let second = renderer.render("/login").unwrap();

        assert_eq!(first.mode, RenderMode::Server);
        assert!(first.html.contains("page-login"));
        assert!(first.html.contains("<nav class=\"navbar\">"));
        assert!(!Arc::ptr_eq(&first.html, &second.html));
        assert_eq!(renderer.routes().find("login").unwrap().load_count(), 1);
        assert!(renderer.store().is_empty());
    }

    #[test]
    fn test_prerender_reuses_stored_markup() {
        let renderer = PageRenderer::from_config(&RenderConfig::default()).unwrap();
        assert_eq!(renderer.prerender_all().unwrap(), 1);

        let first = renderer.render("/").unwrap();
        let second = renderer.render("/").unwrap();
        assert_eq!(first.mode, RenderMode::Prerender);
        assert!(first.html.contains("page-index"));
        assert!(Arc::ptr_eq(&first.html, &second.html));
    }

    #[test]
    fn test_prerender_on_first_hit_when_not_warmed() {
        let renderer = PageRenderer::from_config(&RenderConfig::default()).unwrap();
        assert!(renderer.store().get("").is_none());

        let page = renderer.render("/").unwrap();
        assert_eq!(renderer.store().get("").as_deref(), Some(&*page.html));
    }

    #[test]
    fn test_unknown_page_is_not_found() {
        let renderer = PageRenderer::from_config(&RenderConfig::default()).unwrap();
        assert!(matches!(
            renderer.render("/missing"),
            Err(RenderError::NotFound(p)) if p == "/missing"
        ));
    }

    #[test]
    fn test_unmatched_path_falls_back_to_server() {
        let renderer = renderer(vec![ServerRouteConfig::new("login", RenderMode::Client)]);
        let page = renderer.render("/").unwrap();
        assert_eq!(page.mode, FALLBACK_MODE);
        assert!(page.html.contains("page-index"));
    }
}
