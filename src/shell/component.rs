//! The component abstraction rendered into the outlet.

use crate::render::RenderError;

/// A page that can be placed in the router outlet.
pub trait Component: Send + Sync {
    /// Stable identifier used in logs and metrics.
    fn name(&self) -> &'static str;

    /// Page title, combined with the application title in the document head.
    fn title(&self) -> &str;

    /// Render the page body markup.
    fn render(&self) -> Result<String, RenderError>;
}
