//! Prerendered page storage and the build-time export.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;

use crate::render::{PageRenderer, RenderError};

/// Write-once map from route path to prerendered markup.
#[derive(Debug, Default)]
pub struct PrerenderStore {
    pages: DashMap<String, Arc<str>>,
}

impl PrerenderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<Arc<str>> {
        self.pages
            .get(path.trim_matches('/'))
            .map(|entry| entry.value().clone())
    }

    /// Store `html` unless the page already exists; returns the stored markup.
    pub fn insert(&self, path: &str, html: Arc<str>) -> Arc<str> {
        self.pages
            .entry(path.trim_matches('/').to_string())
            .or_insert(html)
            .value()
            .clone()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Prerender every eligible page and write it under `out_dir` as
/// `<route>/index.html`. Returns the written file paths.
pub fn write_prerendered(renderer: &PageRenderer, out_dir: &Path) -> Result<Vec<PathBuf>, RenderError> {
    renderer.prerender_all()?;

    let mut written = Vec::new();
    for route in renderer.prerender_targets() {
        let Some(html) = renderer.store().get(route.path()) else {
            continue;
        };

        let dir = if route.path().is_empty() {
            out_dir.to_path_buf()
        } else {
            out_dir.join(route.path())
        };
        fs::create_dir_all(&dir)?;

        let file = dir.join("index.html");
        fs::write(&file, html.as_bytes())?;
        tracing::info!(file = %file.display(), "Prerendered page written");
        written.push(file);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RenderConfig, ServerRouteConfig};
    use crate::routing::RenderMode;

    #[test]
    fn test_first_insert_wins() {
        let store = PrerenderStore::new();
        let first = store.insert("/", Arc::from("one"));
        let second = store.insert("", Arc::from("two"));

        assert_eq!(&*first, "one");
        assert_eq!(&*second, "one");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_concurrent_inserts_keep_one_page() {
        let store = Arc::new(PrerenderStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || store.insert("login", Arc::from(format!("page {i}"))))
            })
            .collect();

        let stored: Vec<Arc<str>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(store.len(), 1);
        let kept = store.get("/login").unwrap();
        assert!(stored.iter().all(|html| *html == kept));
    }

    #[test]
    fn test_write_prerendered_files() {
        let out = tempfile::tempdir().unwrap();
        let config = RenderConfig {
            routes: vec![ServerRouteConfig::new("**", RenderMode::Prerender)],
            ..RenderConfig::default()
        };
        let renderer = PageRenderer::from_config(&config).unwrap();

        let files = write_prerendered(&renderer, out.path()).unwrap();
        assert_eq!(
            files,
            vec![
                out.path().join("index.html"),
                out.path().join("login").join("index.html"),
            ]
        );

        let login = fs::read_to_string(out.path().join("login/index.html")).unwrap();
        assert!(login.contains("page-login"));
    }

    #[test]
    fn test_client_pages_are_not_written() {
        let out = tempfile::tempdir().unwrap();
        let renderer = PageRenderer::from_config(&RenderConfig::default()).unwrap();

        let files = write_prerendered(&renderer, out.path()).unwrap();
        assert_eq!(files, vec![out.path().join("index.html")]);
        assert!(!out.path().join("login").exists());
    }
}
