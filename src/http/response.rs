//! Page response construction.
//!
//! # Responsibilities
//! - Turn rendered pages into HTML responses
//! - Tag each page with the render mode that produced it
//! - Map render errors to status codes

use axum::{
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::render::{RenderError, RenderedPage};
use crate::routing::RenderMode;

pub const X_RENDER_MODE: HeaderName = HeaderName::from_static("x-render-mode");

fn cache_control(mode: RenderMode) -> &'static str {
    match mode {
        RenderMode::Server => "no-store",
        RenderMode::Client | RenderMode::Prerender => "no-cache",
    }
}

pub fn page_response(page: RenderedPage) -> Response {
    let mut response = Html(page.html.to_string()).into_response();
    let headers = response.headers_mut();
    headers.insert(X_RENDER_MODE, HeaderValue::from_static(page.mode.as_str()));
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(cache_control(page.mode)),
    );
    response
}

pub fn error_response(error: &RenderError) -> Response {
    match error {
        RenderError::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found").into_response(),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response(),
    }
}
