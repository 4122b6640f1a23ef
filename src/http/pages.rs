//! Page handler: every path not claimed by the API is a page request.

use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use percent_encoding::percent_decode_str;

use crate::http::response::{error_response, page_response};
use crate::http::server::AppState;
use crate::render::RenderError;

pub async fn page_handler(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, "GET, HEAD")],
            "Method Not Allowed",
        )
            .into_response();
    }

    let Ok(path) = percent_decode_str(uri.path()).decode_utf8() else {
        tracing::debug!(path = %uri.path(), "Page path is not valid UTF-8");
        return error_response(&RenderError::NotFound(uri.path().to_string()));
    };
    match state.renderer.render(&path) {
        Ok(page) => {
            tracing::debug!(path = %page.path, mode = %page.mode, "Page rendered");
            page_response(page)
        }
        Err(e) => {
            if matches!(e, RenderError::NotFound(_)) {
                tracing::debug!(path = %path, "No page matched");
            } else {
                tracing::error!(path = %path, error = %e, "Page render failed");
            }
            error_response(&e)
        }
    }
}
