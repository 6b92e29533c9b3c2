//! Lesson model and the field-level merge used by updates.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Placeholder for an activity with no linked resource.
pub const NO_RESOURCES: &str = "N/A";

/// A term the lesson teaches, with a definition and a worked example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyConcept {
    pub term: String,
    pub definition: String,
    pub example: String,
}

/// A learning activity (quiz, discussion, project, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type")]
    pub activity_type: String,
    pub description: String,
    #[serde(
        default = "default_resources",
        deserialize_with = "resources_or_placeholder"
    )]
    pub resources: String,
}

fn default_resources() -> String {
    NO_RESOURCES.to_string()
}

fn resources_or_placeholder<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_resources))
}

/// Lesson body without an identity.
///
/// This is the shape the model is asked to produce. Arity is checked with
/// [`Validate`] so a well-formed but short reply is still rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LessonContent {
    pub title: String,
    pub description: String,
    #[validate(length(equal = 4, message = "expected 4 learning outcomes"))]
    pub learning_outcomes: Vec<String>,
    #[validate(length(equal = 3, message = "expected 3 key concepts"))]
    pub key_concepts: Vec<KeyConcept>,
    #[validate(length(equal = 4, message = "expected 4 activities"))]
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub description: String,
    pub learning_outcomes: Vec<String>,
    pub key_concepts: Vec<KeyConcept>,
    pub activities: Vec<Activity>,
}

impl Lesson {
    /// Give `content` a fresh identity.
    pub fn new(content: LessonContent) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: content.title,
            description: content.description,
            learning_outcomes: content.learning_outcomes,
            key_concepts: content.key_concepts,
            activities: content.activities,
        }
    }

    /// Replace every field present in `patch`, keep the rest. `id` never changes.
    pub fn merge(&mut self, patch: LessonPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(learning_outcomes) = patch.learning_outcomes {
            self.learning_outcomes = learning_outcomes;
        }
        if let Some(key_concepts) = patch.key_concepts {
            self.key_concepts = key_concepts;
        }
        if let Some(activities) = patch.activities {
            self.activities = activities;
        }
    }
}

/// Partial lesson used by `PUT /api/lessons/{id}`.
///
/// Unknown keys (including `id`) are ignored; `null` counts as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LessonPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub learning_outcomes: Option<Vec<String>>,
    pub key_concepts: Option<Vec<KeyConcept>>,
    pub activities: Option<Vec<Activity>>,
}
