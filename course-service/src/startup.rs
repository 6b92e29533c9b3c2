//! Application startup and lifecycle management.

use crate::config::CourseConfig;
use crate::handlers::{
    health::{health_check, metrics_endpoint, readiness_check},
    lessons::{create_lesson, list_lessons, update_lesson},
    modules::{create_module, list_modules},
};
use crate::middleware::metrics_middleware;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::{GenerationParams, TextProvider};
use crate::services::{CourseStore, LessonGenerator};
use axum::{
    middleware::from_fn,
    routing::{get, put},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{request_id_middleware, security_headers_middleware};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: CourseConfig,
    pub store: Arc<CourseStore>,
    pub generator: Arc<LessonGenerator>,
}

impl AppState {
    pub fn new(config: CourseConfig, provider: Arc<dyn TextProvider>) -> Self {
        let params = GenerationParams {
            temperature: config.models.temperature,
            max_tokens: None,
        };

        Self {
            config,
            store: Arc::new(CourseStore::new()),
            generator: Arc::new(LessonGenerator::new(provider, params)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_files.dir.clone();

    let api = Router::new()
        .route("/api/lessons", get(list_lessons).post(create_lesson))
        .route("/api/lessons/:id", put(update_lesson))
        .route("/api/modules", get(list_modules).post(create_module))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics_endpoint))
        .route_layer(from_fn(metrics_middleware));

    api.route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(&static_dir))
        .layer(from_fn(security_headers_middleware))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the Gemini provider described by `config`.
    pub async fn build(config: CourseConfig) -> Result<Self, AppError> {
        let gemini_config = GeminiConfig {
            api_key: config.google.api_key.clone(),
            model: config.models.text_model.clone(),
            api_base: config.google.api_base.clone(),
            timeout: config.models.request_timeout(),
        };
        let provider = GeminiTextProvider::new(gemini_config).map_err(|e| {
            tracing::error!("Failed to create Gemini HTTP client: {}", e);
            AppError::InternalError(anyhow::Error::new(e))
        })?;

        tracing::info!(
            model = %config.models.text_model,
            "Initialized Gemini text provider"
        );

        let provider: Arc<dyn TextProvider> = Arc::new(provider);

        // Probe in the background; an unreachable model only means fallbacks
        let probe = provider.clone();
        tokio::spawn(async move {
            match probe.health_check().await {
                Ok(()) => tracing::info!(provider = probe.name(), "Text provider reachable"),
                Err(e) => tracing::warn!(
                    provider = probe.name(),
                    error = %e,
                    "Text provider unavailable, lessons will use the fallback template"
                ),
            }
        });

        Self::build_with_provider(config, provider).await
    }

    /// Build the application around an explicit provider (used by tests).
    pub async fn build_with_provider(
        config: CourseConfig,
        provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        let addr = config.common.socket_addr();
        // port 0 = random port for testing
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Course service: HTTP on port {}", port);

        Ok(Self {
            port,
            listener,
            state: AppState::new(config, provider),
        })
    }

    /// Get the HTTP port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get a handle to the in-memory store.
    pub fn store(&self) -> Arc<CourseStore> {
        self.state.store.clone()
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.run_until(std::future::pending()).await
    }

    /// Run until `shutdown` resolves, then drain in-flight requests.
    pub async fn run_until<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                std::io::Error::other(format!("HTTP server error: {}", e))
            })
    }
}
