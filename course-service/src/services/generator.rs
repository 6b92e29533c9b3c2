//! Lesson generation with a deterministic fallback.
//!
//! [`LessonGenerator::generate`] never fails: any provider, parse or schema
//! error is absorbed and replaced by [`fallback_lesson`]. The outcome stays
//! tagged so callers and tests can tell which path ran.

use crate::models::{Activity, KeyConcept, Lesson, LessonContent, NO_RESOURCES};
use crate::services::fenced::extract_json_block;
use crate::services::metrics;
use crate::services::providers::{GenerationParams, ProviderError, TextProvider};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use validator::Validate;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Invalid lesson JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Lesson does not match schema: {0}")]
    Schema(#[from] validator::ValidationErrors),
}

/// Which path produced the lesson.
#[derive(Debug, Clone)]
pub enum GenerationOutcome {
    Generated(Lesson),
    FallbackUsed { lesson: Lesson, reason: String },
}

impl GenerationOutcome {
    pub fn lesson(&self) -> &Lesson {
        match self {
            GenerationOutcome::Generated(lesson) => lesson,
            GenerationOutcome::FallbackUsed { lesson, .. } => lesson,
        }
    }

    pub fn into_lesson(self) -> Lesson {
        match self {
            GenerationOutcome::Generated(lesson) => lesson,
            GenerationOutcome::FallbackUsed { lesson, .. } => lesson,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, GenerationOutcome::FallbackUsed { .. })
    }

    fn label(&self) -> &'static str {
        if self.is_fallback() {
            "fallback"
        } else {
            "generated"
        }
    }
}

pub struct LessonGenerator {
    provider: Arc<dyn TextProvider>,
    params: GenerationParams,
}

impl LessonGenerator {
    pub fn new(provider: Arc<dyn TextProvider>, params: GenerationParams) -> Self {
        Self { provider, params }
    }

    #[tracing::instrument(skip(self), fields(provider = self.provider.name()))]
    pub async fn generate(&self, topic: &str, concept: &str) -> GenerationOutcome {
        let outcome = match self.try_generate(topic, concept).await {
            Ok(lesson) => {
                tracing::info!(lesson_id = %lesson.id, "Generated lesson from model output");
                GenerationOutcome::Generated(lesson)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Lesson generation failed, using fallback template");
                GenerationOutcome::FallbackUsed {
                    lesson: fallback_lesson(topic, concept),
                    reason: e.to_string(),
                }
            }
        };

        metrics::record_lesson_outcome(outcome.label());
        outcome
    }

    async fn try_generate(&self, topic: &str, concept: &str) -> Result<Lesson, GenerationError> {
        let prompt = build_prompt(topic, concept);
        let started = Instant::now();

        let result = self.provider.generate(&prompt, &self.params).await;

        metrics::record_provider_latency(
            self.provider.name(),
            self.provider.model(),
            started.elapsed().as_secs_f64(),
        );

        let response = result.map_err(|e| {
            metrics::record_provider_error(self.provider.name(), e.kind());
            e
        })?;

        tracing::debug!(
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            "Model responded"
        );

        parse_lesson(&response.text)
    }
}

/// Parse raw model output into a lesson with a fresh id.
pub fn parse_lesson(text: &str) -> Result<Lesson, GenerationError> {
    let block = extract_json_block(text);
    if !block.found {
        tracing::debug!("No fenced JSON block in model output, parsing whole text");
    }

    let content: LessonContent = serde_json::from_str(block.payload.trim())?;
    content.validate()?;

    Ok(Lesson::new(content))
}

pub fn build_prompt(topic: &str, concept: &str) -> String {
    format!(
        r#"Create a detailed and structured educational lesson for the topic '{topic}' focusing on the concept '{concept}'.
The lesson should be formatted as JSON with the following structure:
{{
    "title": "Lesson title",
    "description": "A detailed lesson description (at least 2-3 sentences)",
    "learning_outcomes": ["Outcome 1", "Outcome 2", "Outcome 3", "Outcome 4"],
    "key_concepts": [
        {{"term": "Term 1", "definition": "Detailed definition (2-3 sentences)", "example": "Example 1"}},
        {{"term": "Term 2", "definition": "Detailed definition (2-3 sentences)", "example": "Example 2"}},
        {{"term": "Term 3", "definition": "Detailed definition (2-3 sentences)", "example": "Example 3"}}
    ],
    "activities": [
        {{"type": "Activity type 1", "description": "Detailed activity description (2-3 sentences)", "resources": "Optional resource link or reference"}},
        {{"type": "Activity type 2", "description": "Detailed activity description (2-3 sentences)", "resources": "Optional resource link or reference"}},
        {{"type": "Activity type 3", "description": "Detailed activity description (2-3 sentences)", "resources": "Optional resource link or reference"}},
        {{"type": "Activity type 4", "description": "Detailed activity description (2-3 sentences)", "resources": "Optional resource link or reference"}}
    ]
}}
Ensure the content is engaging, pedagogically sound, and suitable for beginners. Include practical examples and resources where applicable.
Return the response wrapped in ```json
and
```."#
    )
}

/// Template lesson used whenever generation fails.
pub fn fallback_lesson(topic: &str, concept: &str) -> Lesson {
    let activity = |activity_type: &str, description: String| Activity {
        activity_type: activity_type.to_string(),
        description,
        resources: NO_RESOURCES.to_string(),
    };

    Lesson::new(LessonContent {
        title: format!("Introduction to {}", topic),
        description: format!(
            "This lesson introduces the fundamentals of {}, focusing on {}. It provides a \
             comprehensive overview for beginners, with practical examples and activities to \
             reinforce learning.",
            topic, concept
        ),
        learning_outcomes: vec![
            format!("Understand the core principles of {}", topic),
            format!("Apply {} in real-world scenarios", concept),
            format!("Identify key components of {}", topic),
            "Develop foundational skills for further exploration".to_string(),
        ],
        key_concepts: vec![
            KeyConcept {
                term: format!("{} Basics", topic),
                definition: format!(
                    "The core principles of {}, including its history and applications.",
                    topic
                ),
                example: format!("Using {} to solve a simple problem.", topic),
            },
            KeyConcept {
                term: concept.to_string(),
                definition: format!(
                    "A key aspect of {} that involves understanding its mechanics and usage.",
                    topic
                ),
                example: format!("Applying {} in a beginner-level project.", concept),
            },
            KeyConcept {
                term: format!("Advanced {}", topic),
                definition: format!(
                    "More complex aspects of {} that build on the basics.",
                    topic
                ),
                example: format!("Extending {} knowledge to a real-world case study.", topic),
            },
        ],
        activities: vec![
            activity(
                "Quiz",
                format!(
                    "A multiple-choice quiz to test understanding of {}. Includes 5 questions \
                     with feedback.",
                    topic
                ),
            ),
            activity(
                "Example",
                format!(
                    "A practical example of using {} in a real-world scenario. Follow the steps \
                     to complete the task.",
                    concept
                ),
            ),
            activity(
                "Discussion",
                format!(
                    "Discuss how {} can be applied in different fields. Share your thoughts \
                     with peers.",
                    topic
                ),
            ),
            activity(
                "Project",
                format!(
                    "Create a small project using {}. Document your process and results.",
                    concept
                ),
            ),
        ],
    })
}
