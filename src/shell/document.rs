//! Root view: navbar plus outlet, wrapped in the HTML document.

use askama::Template;

use crate::render::RenderError;
use crate::routing::RenderMode;
use crate::shell::{Component, Navbar};
use crate::shell::routes::ManifestEntry;

#[derive(Template)]
#[template(path = "layout.html")]
struct LayoutTemplate<'a> {
    title: &'a str,
    mode: &'a str,
    navbar: &'a str,
    content: &'a str,
}

#[derive(Template)]
#[template(path = "client_shell.html")]
struct ClientShellTemplate<'a> {
    title: &'a str,
    manifest: &'a str,
}

/// The application root view.
#[derive(Debug, Clone)]
pub struct AppShell {
    title: String,
    navbar: Navbar,
}

impl AppShell {
    pub fn new(title: impl Into<String>, navbar: Navbar) -> Self {
        Self {
            title: title.into(),
            navbar,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Full markup for `component` shown at `path`.
    pub fn render_page(
        &self,
        path: &str,
        component: &dyn Component,
        mode: RenderMode,
    ) -> Result<String, RenderError> {
        let navbar = self.navbar.render(path)?;
        let content = component.render()?;
        let title = format!("{} | {}", component.title(), self.title);

        let template = LayoutTemplate {
            title: &title,
            mode: mode.as_str(),
            navbar: &navbar,
            content: &content,
        };
        Ok(template.render()?)
    }

    /// Minimal document the browser boots from in client mode.
    pub fn client_shell(&self, manifest: &[ManifestEntry]) -> Result<String, RenderError> {
        // Keep the JSON from closing the surrounding script element.
        let manifest = serde_json::to_string(manifest)?.replace("</", "<\\/");
        let template = ClientShellTemplate {
            title: &self.title,
            manifest: &manifest,
        };
        Ok(template.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{ClientRoutes, IndexPage};

    fn shell() -> AppShell {
        let routes = ClientRoutes::default_routes();
        AppShell::new("Test App", Navbar::new("Test App", routes.nav_links()))
    }

    #[test]
    fn test_page_has_navbar_and_outlet() {
        let html = shell()
            .render_page("/", &IndexPage::default(), RenderMode::Server)
            .unwrap();

        assert!(html.contains("<nav class=\"navbar\">"));
        assert!(html.contains("<main class=\"outlet\">"));
        assert!(html.contains("page-index"));
        assert!(html.contains("<title>Home | Test App</title>"));
        assert!(html.contains("data-render-mode=\"server\""));
    }

    #[test]
    fn test_client_shell_is_empty_root_with_manifest() {
        let routes = ClientRoutes::default_routes();
        let html = shell().client_shell(&routes.manifest()).unwrap();

        assert!(html.contains("<app-root data-render-mode=\"client\"></app-root>"));
        assert!(html.contains(r#"{"path":"/login","lazy":true}"#));
        assert!(!html.contains("page-index"));
    }
}
