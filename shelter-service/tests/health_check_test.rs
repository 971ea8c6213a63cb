mod common;

use common::TestApp;

#[tokio::test]
async fn root_returns_message() {
    let app = TestApp::spawn().await;

    let body = app.get_json("/").await;
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;

    let body = app.get_json("/health").await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "shelter-service");
}

#[tokio::test]
async fn readiness_check_reaches_database() {
    let app = TestApp::spawn().await;

    let body = app.get_json("/ready").await;
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn metrics_endpoint_returns_prometheus_format() {
    let app = TestApp::spawn().await;
    app.get("/animals").await;

    let response = app.get("/metrics").await;
    assert!(response.status().is_success());

    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .expect("Invalid content-type")
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    let body = response.text().await.expect("Failed to get response body");
    assert!(body.contains("shelter_db_query_duration_seconds"));
}

#[tokio::test]
async fn responses_carry_request_id_and_open_cors() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(app.url("/health"))
        .header("origin", "https://frontend.example")
        .header("x-request-id", "req-42")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(
        response.headers().get("x-request-id").map(|v| v.to_str().unwrap()),
        Some("req-42")
    );
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .map(|v| v.to_str().unwrap()),
        Some("*")
    );
}

#[tokio::test]
async fn request_id_is_minted_when_absent() {
    let app = TestApp::spawn().await;

    let response = app.get("/health").await;
    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Missing x-request-id header")
        .to_str()
        .unwrap();
    assert_eq!(request_id.len(), 36);
}
