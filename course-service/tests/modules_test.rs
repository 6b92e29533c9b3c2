mod common;

use common::TestApp;
use serde_json::{json, Value};

#[tokio::test]
async fn create_module_with_title_only_uses_defaults() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json("/api/modules", &json!({ "title": "Intro to Graphs" }))
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let module: Value = response.json().await.unwrap();
    assert_eq!(module["title"], "Intro to Graphs");
    assert_eq!(module["difficulty"], "beginner");
    assert_eq!(module["estimated_time"], "1 hour");
    assert_eq!(module["lessons"], json!([]));
    assert_eq!(module["prerequisites"], json!([]));
    assert!(!module["id"].as_str().unwrap().is_empty());

    let listed: Vec<Value> = app.get("/api/modules").await.json().await.unwrap();
    assert_eq!(listed, vec![module]);
}

#[tokio::test]
async fn create_module_keeps_supplied_fields() {
    let app = TestApp::spawn().await;
    let lesson = app.create_lesson("Graphs", "BFS").await;

    let response = app
        .post_json(
            "/api/modules",
            &json!({
                "title": "Module: Graphs",
                "lessons": [lesson["id"]],
                "prerequisites": ["Arrays"],
                "difficulty": "advanced",
                "estimated_time": "3 hours"
            }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let module: Value = response.json().await.unwrap();
    assert_eq!(module["lessons"], json!([lesson["id"]]));
    assert_eq!(module["prerequisites"], json!(["Arrays"]));
    assert_eq!(module["difficulty"], "advanced");
    assert_eq!(module["estimated_time"], "3 hours");
}

#[tokio::test]
async fn create_module_requires_title() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json("/api/modules", &json!({ "lessons": ["abc"] }))
        .await;
    assert_eq!(response.status().as_u16(), 400);

    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "Missing module title");

    let listed: Vec<Value> = app.get("/api/modules").await.json().await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn create_module_rejects_unknown_difficulty() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json(
            "/api/modules",
            &json!({ "title": "Graphs", "difficulty": "expert" }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn modules_do_not_call_the_model() {
    let app = TestApp::spawn().await;

    app.post_json("/api/modules", &json!({ "title": "A" }))
        .await;
    app.post_json("/api/modules", &json!({ "title": "B" }))
        .await;

    let listed: Vec<Value> = app.get("/api/modules").await.json().await.unwrap();
    let titles: Vec<&str> = listed.iter().map(|m| m["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["A", "B"]);
    assert_eq!(app.provider.calls(), 0);
}
