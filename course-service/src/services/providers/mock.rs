//! Mock provider implementation for testing.

use super::{GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

enum MockBehavior {
    Respond(String),
    Fail,
}

/// Mock text provider: answers every prompt with the same canned text, or
/// fails every call.
pub struct MockTextProvider {
    behavior: MockBehavior,
    calls: AtomicUsize,
}

impl MockTextProvider {
    pub fn responding(text: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Respond(text.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            behavior: MockBehavior::Fail,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `generate` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn generate(
        &self,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Respond(text) => Ok(ProviderResponse {
                text: text.clone(),
                input_tokens: prompt.len() as i32 / 4,
                output_tokens: text.len() as i32 / 4,
            }),
            MockBehavior::Fail => Err(ProviderError::NetworkError(
                "Mock text provider configured to fail".to_string(),
            )),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Respond(_) => Ok(()),
            MockBehavior::Fail => Err(ProviderError::NotConfigured(
                "Mock text provider configured to fail".to_string(),
            )),
        }
    }
}
