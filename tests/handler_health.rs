mod common;

use axum_test::TestServer;
use serde_json::Value;
use store_redirect::config::RedirectTargets;

#[tokio::test]
async fn test_health_ok_with_full_config() {
    let server = TestServer::new(common::test_app(common::test_targets())).unwrap();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["checks"]["targets"]["status"], "ok");
}

#[tokio::test]
async fn test_health_ok_without_store_targets() {
    let targets = RedirectTargets {
        app_store_url: String::new(),
        play_store_url: String::new(),
        fallback_url: common::FALLBACK_URL.to_string(),
    };
    let server = TestServer::new(common::test_app(targets)).unwrap();

    let response = server.get("/health").await;

    // Store targets are optional; only the fallback is required
    assert_eq!(response.status_code(), 200);
}

#[tokio::test]
async fn test_health_degraded_without_fallback() {
    let targets = RedirectTargets {
        app_store_url: common::APP_STORE_URL.to_string(),
        play_store_url: common::PLAY_STORE_URL.to_string(),
        fallback_url: String::new(),
    };
    let server = TestServer::new(common::test_app(targets)).unwrap();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["targets"]["status"], "error");
}
