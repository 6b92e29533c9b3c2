//! Course Service entry point.

use course_service::config::CourseConfig;
use course_service::services::init_metrics;
use course_service::startup::Application;

use service_core::observability::init_tracing;
use tokio::signal;

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Tracing first so config errors are logged
    let otlp_endpoint = std::env::var("OTLP_ENDPOINT").ok();
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    init_tracing("course-service", &log_level, otlp_endpoint.as_deref());

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        otlp_enabled = otlp_endpoint.is_some(),
        "Starting course-service"
    );

    init_metrics();

    let config = CourseConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    // Never log the API key itself
    tracing::info!(
        http_port = %config.common.port,
        text_model = %config.models.text_model,
        api_key_configured = config.google.api_key.is_some(),
        static_dir = %config.static_files.dir.display(),
        "Configuration loaded"
    );

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to build application");
        std::io::Error::other(format!("Application build error: {}", e))
    })?;

    app.run_until(shutdown_signal()).await?;

    tracing::info!("Service shutdown complete");
    Ok(())
}
