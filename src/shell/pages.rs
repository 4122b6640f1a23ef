//! Built-in pages.

use askama::Template;

use crate::render::RenderError;
use crate::shell::Component;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    heading: &'a str,
    intro: &'a str,
}

/// Landing page, loaded eagerly with the shell.
#[derive(Debug, Clone)]
pub struct IndexPage {
    heading: String,
    intro: String,
}

impl Default for IndexPage {
    fn default() -> Self {
        Self {
            heading: "Welcome".to_string(),
            intro: "Pick a destination from the navigation bar.".to_string(),
        }
    }
}

impl Component for IndexPage {
    fn name(&self) -> &'static str {
        "index"
    }

    fn title(&self) -> &str {
        "Home"
    }

    fn render(&self) -> Result<String, RenderError> {
        let template = IndexTemplate {
            heading: &self.heading,
            intro: &self.intro,
        };
        Ok(template.render()?)
    }
}

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate<'a> {
    heading: &'a str,
}

/// Sign-in page, loaded on first navigation.
#[derive(Debug, Clone, Default)]
pub struct LoginPage;

impl Component for LoginPage {
    fn name(&self) -> &'static str {
        "login"
    }

    fn title(&self) -> &str {
        "Login"
    }

    fn render(&self) -> Result<String, RenderError> {
        Ok(LoginTemplate { heading: "Sign in" }.render()?)
    }
}
