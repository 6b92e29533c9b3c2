//! Prometheus metrics for course-service.

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};
use std::sync::{Once, OnceLock};

static INIT: Once = Once::new();

// Global registry
pub static REGISTRY: OnceLock<Registry> = OnceLock::new();

// HTTP metrics
pub static HTTP_REQUESTS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static HTTP_REQUEST_DURATION_SECONDS: OnceLock<HistogramVec> = OnceLock::new();

// Generation metrics
pub static LESSONS_GENERATED_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static GENAI_PROVIDER_LATENCY_SECONDS: OnceLock<HistogramVec> = OnceLock::new();
pub static GENAI_PROVIDER_ERRORS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

// Store metrics
pub static COURSE_ITEMS_CREATED_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Initialize all metrics. Safe to call more than once; only the first call
/// registers anything.
pub fn init_metrics() {
    INIT.call_once(register_metrics);
}

fn register_metrics() {
    let registry = Registry::new();

    let http_requests_total = IntCounterVec::new(
        Opts::new("http_requests_total", "Total number of HTTP requests"),
        &["method", "path", "status"],
    )
    .expect("Failed to create http_requests_total metric");

    let http_request_duration = HistogramVec::new(
        HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![0.005, 0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["method", "path"],
    )
    .expect("Failed to create http_request_duration_seconds metric");

    // outcome: generated, fallback
    let lessons_generated = IntCounterVec::new(
        Opts::new("lessons_generated_total", "Total lessons produced"),
        &["outcome"],
    )
    .expect("Failed to create lessons_generated_total metric");

    let provider_latency = HistogramVec::new(
        HistogramOpts::new(
            "genai_provider_latency_seconds",
            "AI provider API latency in seconds",
        )
        .buckets(vec![0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0, 60.0, 120.0]),
        &["provider", "model"],
    )
    .expect("Failed to create genai_provider_latency_seconds metric");

    let provider_errors = IntCounterVec::new(
        Opts::new("genai_provider_errors_total", "Total AI provider errors"),
        &["provider", "error_type"],
    )
    .expect("Failed to create genai_provider_errors_total metric");

    let items_created = IntCounterVec::new(
        Opts::new("course_items_created_total", "Total lessons and modules stored"),
        &["collection"],
    )
    .expect("Failed to create course_items_created_total metric");

    registry
        .register(Box::new(http_requests_total.clone()))
        .expect("Failed to register http_requests_total");
    registry
        .register(Box::new(http_request_duration.clone()))
        .expect("Failed to register http_request_duration_seconds");
    registry
        .register(Box::new(lessons_generated.clone()))
        .expect("Failed to register lessons_generated_total");
    registry
        .register(Box::new(provider_latency.clone()))
        .expect("Failed to register genai_provider_latency_seconds");
    registry
        .register(Box::new(provider_errors.clone()))
        .expect("Failed to register genai_provider_errors_total");
    registry
        .register(Box::new(items_created.clone()))
        .expect("Failed to register course_items_created_total");

    let _ = REGISTRY.set(registry);
    let _ = HTTP_REQUESTS_TOTAL.set(http_requests_total);
    let _ = HTTP_REQUEST_DURATION_SECONDS.set(http_request_duration);
    let _ = LESSONS_GENERATED_TOTAL.set(lessons_generated);
    let _ = GENAI_PROVIDER_LATENCY_SECONDS.set(provider_latency);
    let _ = GENAI_PROVIDER_ERRORS_TOTAL.set(provider_errors);
    let _ = COURSE_ITEMS_CREATED_TOTAL.set(items_created);

    tracing::info!("Prometheus metrics initialized");
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();

    let registry = match REGISTRY.get() {
        Some(r) => r,
        None => {
            tracing::error!("Metrics registry not initialized");
            return "# Metrics registry not initialized\n".to_string();
        }
    };

    let metric_families = registry.gather();

    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return format!("# Failed to encode metrics: {}\n", e);
    }

    match String::from_utf8(buffer) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Failed to convert metrics to UTF-8");
            format!("# Failed to convert metrics to UTF-8: {}\n", e)
        }
    }
}

/// Record a completed HTTP request.
pub fn record_http_request(method: &str, path: &str, status: &str, duration_secs: f64) {
    if let Some(counter) = HTTP_REQUESTS_TOTAL.get() {
        counter.with_label_values(&[method, path, status]).inc();
    }
    if let Some(histogram) = HTTP_REQUEST_DURATION_SECONDS.get() {
        histogram
            .with_label_values(&[method, path])
            .observe(duration_secs);
    }
}

/// Record which path produced a lesson.
pub fn record_lesson_outcome(outcome: &str) {
    if let Some(counter) = LESSONS_GENERATED_TOTAL.get() {
        counter.with_label_values(&[outcome]).inc();
    }
}

/// Record provider latency.
pub fn record_provider_latency(provider: &str, model: &str, duration_secs: f64) {
    if let Some(histogram) = GENAI_PROVIDER_LATENCY_SECONDS.get() {
        histogram
            .with_label_values(&[provider, model])
            .observe(duration_secs);
    }
}

/// Record a provider error.
pub fn record_provider_error(provider: &str, error_type: &str) {
    if let Some(counter) = GENAI_PROVIDER_ERRORS_TOTAL.get() {
        counter.with_label_values(&[provider, error_type]).inc();
    }
}

/// Record an append to one of the collections.
pub fn record_item_created(collection: &str) {
    if let Some(counter) = COURSE_ITEMS_CREATED_TOTAL.get() {
        counter.with_label_values(&[collection]).inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent_and_exports_counters() {
        init_metrics();
        init_metrics();

        record_lesson_outcome("fallback");
        record_item_created("modules");

        let text = get_metrics();
        assert!(text.contains("lessons_generated_total"));
        assert!(text.contains("course_items_created_total"));
    }
}
