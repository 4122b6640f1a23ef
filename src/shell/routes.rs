//! Client route table.
//!
//! # Responsibilities
//! - Map URL paths to outlet components, first exact match in declaration order
//! - Materialise lazy components on first navigation, exactly once
//!
//! # Design Decisions
//! - Paths compare without leading/trailing slashes
//! - Loader runs under `OnceLock`, so concurrent first visits still load once

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use serde::Serialize;

use crate::observability::metrics;
use crate::shell::{Component, IndexPage, LoginPage};

type Loader = Box<dyn Fn() -> Arc<dyn Component> + Send + Sync>;

enum RouteComponent {
    Eager(Arc<dyn Component>),
    Lazy {
        loader: Loader,
        cell: OnceLock<Arc<dyn Component>>,
        loads: AtomicUsize,
    },
}

/// A client route: a path and the component rendered in the outlet for it.
pub struct ClientRoute {
    path: String,
    label: String,
    component: RouteComponent,
}

/// Entry of the route manifest handed to the browser in client mode.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ManifestEntry {
    pub path: String,
    pub lazy: bool,
}

impl ClientRoute {
    /// A route whose component ships with the shell.
    pub fn eager(
        path: impl Into<String>,
        label: impl Into<String>,
        component: Arc<dyn Component>,
    ) -> Self {
        Self {
            path: normalize(&path.into()),
            label: label.into(),
            component: RouteComponent::Eager(component),
        }
    }

    /// A route whose component is produced by `loader` on first use.
    pub fn lazy<F>(path: impl Into<String>, label: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> Arc<dyn Component> + Send + Sync + 'static,
    {
        Self {
            path: normalize(&path.into()),
            label: label.into(),
            component: RouteComponent::Lazy {
                loader: Box::new(loader),
                cell: OnceLock::new(),
                loads: AtomicUsize::new(0),
            },
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self.component, RouteComponent::Lazy { .. })
    }

    /// Whether the component is available without running a loader.
    pub fn is_loaded(&self) -> bool {
        match &self.component {
            RouteComponent::Eager(_) => true,
            RouteComponent::Lazy { cell, .. } => cell.get().is_some(),
        }
    }

    /// How many times the loader has run (0 or 1; always 0 for eager routes).
    pub fn load_count(&self) -> usize {
        match &self.component {
            RouteComponent::Eager(_) => 0,
            RouteComponent::Lazy { loads, .. } => loads.load(Ordering::Acquire),
        }
    }

    /// The outlet component, loading it first if needed.
    pub fn component(&self) -> Arc<dyn Component> {
        match &self.component {
            RouteComponent::Eager(component) => component.clone(),
            RouteComponent::Lazy {
                loader,
                cell,
                loads,
            } => cell
                .get_or_init(|| {
                    loads.fetch_add(1, Ordering::AcqRel);
                    let component = loader();
                    tracing::info!(
                        path = %self.path,
                        component = component.name(),
                        "Lazy route loaded"
                    );
                    metrics::record_lazy_load(&self.path);
                    component
                })
                .clone(),
        }
    }
}

/// Ordered client route table.
pub struct ClientRoutes {
    routes: Vec<ClientRoute>,
}

impl ClientRoutes {
    pub fn new(routes: Vec<ClientRoute>) -> Self {
        Self { routes }
    }

    /// Index page eager at `/`, login page lazy at `/login`.
    pub fn default_routes() -> Self {
        Self::new(vec![
            ClientRoute::eager("", "Home", Arc::new(IndexPage::default())),
            ClientRoute::lazy("login", "Login", || Arc::new(LoginPage) as Arc<dyn Component>),
        ])
    }

    /// First route whose path equals `path`.
    pub fn find(&self, path: &str) -> Option<&ClientRoute> {
        let path = normalize(path);
        self.routes.iter().find(|r| r.path == path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClientRoute> {
        self.routes.iter()
    }

    /// `(path, label)` pairs for the navbar.
    pub fn nav_links(&self) -> Vec<(String, String)> {
        self.routes
            .iter()
            .map(|r| (r.path.clone(), r.label.clone()))
            .collect()
    }

    /// Route list the browser needs to render on its own.
    pub fn manifest(&self) -> Vec<ManifestEntry> {
        self.routes
            .iter()
            .map(|r| ManifestEntry {
                path: format!("/{}", r.path),
                lazy: r.is_lazy(),
            })
            .collect()
    }
}

impl Default for ClientRoutes {
    fn default() -> Self {
        Self::default_routes()
    }
}

fn normalize(path: &str) -> String {
    path.trim_matches('/').to_string()
}
