//! Persistent header rendered above the outlet.

use askama::Template;

use crate::render::RenderError;

/// One navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub label: String,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "navbar.html")]
struct NavbarTemplate<'a> {
    brand: &'a str,
    links: Vec<NavLink>,
}

/// The navbar, built once from the client route table.
#[derive(Debug, Clone)]
pub struct Navbar {
    brand: String,
    links: Vec<(String, String)>,
}

impl Navbar {
    /// `links` are `(path, label)` pairs; paths are relative to the site root.
    pub fn new(brand: impl Into<String>, links: Vec<(String, String)>) -> Self {
        Self {
            brand: brand.into(),
            links,
        }
    }

    /// Links with the entry for `current_path` marked active.
    pub fn links_for(&self, current_path: &str) -> Vec<NavLink> {
        let current = current_path.trim_matches('/');
        self.links
            .iter()
            .map(|(path, label)| NavLink {
                href: format!("/{}", path.trim_matches('/')),
                label: label.clone(),
                active: path.trim_matches('/') == current,
            })
            .collect()
    }

    /// Render the navbar for a page at `current_path`.
    pub fn render(&self, current_path: &str) -> Result<String, RenderError> {
        let template = NavbarTemplate {
            brand: &self.brand,
            links: self.links_for(current_path),
        };
        Ok(template.render()?)
    }
}
