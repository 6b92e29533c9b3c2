mod common;

use common::TestApp;

#[tokio::test]
async fn health_check_reports_collection_sizes() {
    let app = TestApp::spawn().await;
    app.create_lesson("Graphs", "BFS").await;

    let response = app.get("/health").await;
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "course-service");
    assert_eq!(body["lessons"], 1);
    assert_eq!(body["modules"], 0);
}

#[tokio::test]
async fn readiness_check_returns_ok() {
    let app = TestApp::spawn().await;

    let response = app.get("/ready").await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn metrics_endpoint_exports_prometheus_text() {
    let app = TestApp::spawn().await;
    app.create_lesson("Graphs", "BFS").await;

    let response = app.get("/metrics").await;
    assert_eq!(response.status().as_u16(), 200);

    let body = response.text().await.unwrap();
    assert!(body.contains("http_requests_total"));
    assert!(body.contains("lessons_generated_total"));
    assert!(body.contains("/api/lessons"));
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .header("x-request-id", "trace-me-42")
        .send()
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "trace-me-42");
}

#[tokio::test]
async fn index_page_is_served() {
    let app = TestApp::spawn().await;

    let response = app.get("/").await;
    assert_eq!(response.status().as_u16(), 200);
    assert!(response.text().await.unwrap().contains("CourseGPT"));

    let script = app.get("/static/app.js").await;
    assert_eq!(script.status().as_u16(), 200);

    let missing = app.get("/static/does-not-exist.js").await;
    assert_eq!(missing.status().as_u16(), 404);
}

#[tokio::test]
async fn cors_preflight_is_allowed() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/api/lessons", app.address),
        )
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert!(response
        .headers()
        .contains_key("access-control-allow-origin"));
}
