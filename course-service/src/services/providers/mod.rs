//! Text generation providers.
//!
//! The lesson generator only needs `generate(prompt) -> text`; this trait keeps
//! it independent of any vendor SDK so tests can swap in [`mock`].

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Provider returned no text")]
    EmptyResponse,
}

impl ProviderError {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::NotConfigured(_) => "not_configured",
            ProviderError::ApiError(_) => "api_error",
            ProviderError::RateLimited => "rate_limited",
            ProviderError::ContentFiltered => "content_filtered",
            ProviderError::NetworkError(_) => "network_error",
            ProviderError::EmptyResponse => "empty_response",
        }
    }
}

/// Result of a provider call.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub text: String,

    /// Input tokens consumed, when the provider reports them.
    pub input_tokens: i32,

    /// Output tokens generated, when the provider reports them.
    pub output_tokens: i32,
}

/// Generation parameters for AI requests.
#[derive(Debug, Clone, Default)]
pub struct GenerationParams {
    /// Temperature (0.0 - 2.0).
    pub temperature: Option<f32>,

    /// Maximum output tokens.
    pub max_tokens: Option<i32>,
}

#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Provider name for logs and metrics.
    fn name(&self) -> &'static str;

    /// Model identifier for logs and metrics.
    fn model(&self) -> &str;

    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError>;

    async fn health_check(&self) -> Result<(), ProviderError>;
}
