//! Page routing and render-mode tests, driven through the in-process router.

use axum::http::{header, Method, StatusCode};
use page_shell::config::{ServerRouteConfig, ShellConfig};
use page_shell::lifecycle::bootstrap;
use page_shell::RenderMode;

mod common;

fn config_with_routes(routes: Vec<ServerRouteConfig>) -> ShellConfig {
    let mut config = ShellConfig::default();
    config.render.routes = routes;
    config
}

#[tokio::test]
async fn test_index_renders_navbar_and_index_page() {
    let router = common::router(ShellConfig::default());
    let (response, body) = common::get(&router, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-render-mode"], "prerender");
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert!(body.contains("<nav class=\"navbar\">"));
    assert!(body.contains("page-index"));
}

#[tokio::test]
async fn test_login_defaults_to_client_shell() {
    let server = bootstrap(ShellConfig::default()).unwrap();
    let router = server.router();
    let (response, body) = common::get(&router, "/login").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-render-mode"], "client");
    assert!(body.contains("id=\"app-routes\""));
    assert!(!body.contains("page-login"));

    let login = server.renderer().routes().find("/login").unwrap();
    assert!(!login.is_loaded());
}

#[tokio::test]
async fn test_server_rendered_login_loads_once() {
    let server = bootstrap(config_with_routes(vec![
        ServerRouteConfig::new("login", RenderMode::Server),
        ServerRouteConfig::new("**", RenderMode::Prerender),
    ]))
    .unwrap();
    let router = server.router();
    let login = server.renderer().routes().find("/login").unwrap();
    assert!(!login.is_loaded());

    for _ in 0..3 {
        let (response, body) = common::get(&router, "/login").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-render-mode"], "server");
        assert!(body.contains("<nav class=\"navbar\">"));
        assert!(body.contains("page-login"));
    }

    assert_eq!(login.load_count(), 1);
}

#[tokio::test]
async fn test_wildcard_applies_to_everything_but_login() {
    let server = bootstrap(ShellConfig::default()).unwrap();
    let renderer = server.renderer();

    assert_eq!(renderer.mode_for("/login"), RenderMode::Client);
    for path in ["/", "/index", "/login2", "/a/login", "/api"] {
        assert_eq!(renderer.mode_for(path), RenderMode::Prerender, "{path}");
    }
}

#[tokio::test]
async fn test_unknown_page_is_not_found() {
    let router = common::router(ShellConfig::default());

    let (response, body) = common::get(&router, "/register").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body, "Not Found");
}

#[tokio::test]
async fn test_pages_only_accept_get_and_head() {
    let router = common::router(ShellConfig::default());

    let (response, _) = common::send(&router, Method::HEAD, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-render-mode"], "prerender");

    let (response, _) = common::send(&router, Method::POST, "/login").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers()[header::ALLOW], "GET, HEAD");
}

#[tokio::test]
async fn test_security_headers_toggle() {
    let router = common::router(ShellConfig::default());
    let (response, _) = common::get(&router, "/").await;
    assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(response.headers()[header::X_FRAME_OPTIONS], "DENY");

    let mut config = ShellConfig::default();
    config.security.enable_headers = false;
    let router = common::router(config);
    let (response, _) = common::get(&router, "/").await;
    assert!(!response.headers().contains_key(header::X_CONTENT_TYPE_OPTIONS));
}

#[tokio::test]
async fn test_health_endpoint() {
    let router = common::router(ShellConfig::default());
    let (response, body) = common::get(&router, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_assets_directory_is_served() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("app.css"), "body { margin: 0; }").unwrap();

    let mut config = ShellConfig::default();
    config.render.assets_dir = Some(dir.path().display().to_string());
    let router = common::router(config);

    let (response, body) = common::get(&router, "/assets/app.css").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body, "body { margin: 0; }");
}

#[tokio::test]
async fn test_encoded_page_path_is_decoded() {
    let router = common::router(ShellConfig::default());

    let (response, body) = common::get(&router, "/log%69n").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-render-mode"], "client");
    assert!(body.contains("id=\"app-routes\""));

    let (response, _) = common::get(&router, "/%FF").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
