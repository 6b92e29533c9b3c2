//! Test helper module for course-service integration tests.
//!
//! Every app runs on a random port with a mock text provider, so no API key or
//! network access is needed.

#![allow(dead_code)]

use course_service::config::{
    default_static_dir, CourseConfig, GoogleConfig, ModelConfig, StaticConfig,
};
use course_service::services::init_metrics;
use course_service::services::providers::mock::MockTextProvider;
use course_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;

/// A model reply in the shape the generation prompt asks for.
pub const MODEL_REPLY: &str = r#"Here you go:
```json
{
    "title": "Graph Traversal with Breadth-First Search",
    "description": "BFS visits a graph level by level. It finds shortest paths in unweighted graphs.",
    "learning_outcomes": [
        "Describe the BFS visiting order",
        "Implement BFS with a queue",
        "Compute unweighted shortest paths",
        "Compare BFS with DFS"
    ],
    "key_concepts": [
        {"term": "Queue", "definition": "FIFO container driving the frontier.", "example": "VecDeque"},
        {"term": "Visited set", "definition": "Prevents revisiting nodes.", "example": "HashSet<NodeId>"},
        {"term": "Level", "definition": "Distance in edges from the source.", "example": "dist[v] = dist[u] + 1"}
    ],
    "activities": [
        {"type": "Quiz", "description": "Order the visits.", "resources": "https://visualgo.net/en/dfsbfs"},
        {"type": "Exercise", "description": "Implement BFS on a grid."},
        {"type": "Discussion", "description": "When is DFS preferable?", "resources": null},
        {"type": "Project", "description": "Route finder for a subway map.", "resources": "N/A"}
    ]
}
```"#;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub provider: Arc<MockTextProvider>,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn an app whose model always returns [`MODEL_REPLY`].
    pub async fn spawn() -> Self {
        Self::spawn_with(MockTextProvider::responding(MODEL_REPLY)).await
    }

    /// Spawn an app whose model call always fails.
    pub async fn spawn_failing() -> Self {
        Self::spawn_with(MockTextProvider::failing()).await
    }

    pub async fn spawn_with(provider: MockTextProvider) -> Self {
        init_metrics();

        let config = CourseConfig {
            common: CoreConfig {
                host: IpAddr::V4(Ipv4Addr::LOCALHOST),
                port: 0, // Random port
            },
            google: GoogleConfig {
                api_key: None,
                api_base: "http://127.0.0.1:9".to_string(),
            },
            models: ModelConfig {
                text_model: "mock-model".to_string(),
                request_timeout_secs: 5,
                temperature: None,
            },
            static_files: StaticConfig {
                dir: default_static_dir(),
            },
        };

        let provider = Arc::new(provider);
        let app = Application::build_with_provider(config, provider.clone())
            .await
            .expect("Failed to build application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            let _ = app.run_until_stopped().await;
        });

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        wait_until_healthy(&client, &address).await;

        Self {
            address,
            port,
            provider,
            client,
        }
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn put_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .put(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// POST a lesson and return the created body.
    pub async fn create_lesson(&self, topic: &str, concept: &str) -> serde_json::Value {
        let response = self
            .post_json(
                "/api/lessons",
                &serde_json::json!({ "topic": topic, "concept": concept }),
            )
            .await;
        assert_eq!(response.status().as_u16(), 201);
        response.json().await.expect("Failed to parse lesson")
    }
}

async fn wait_until_healthy(client: &reqwest::Client, address: &str) {
    for _ in 0..50 {
        if let Ok(response) = client.get(format!("{}/health", address)).send().await {
            if response.status().is_success() {
                return;
            }
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("Server at {} never became healthy", address);
}
