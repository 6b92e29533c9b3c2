use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub const DEFAULT_ESTIMATED_TIME: &str = "1 hour";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "beginner"),
            Difficulty::Intermediate => write!(f, "intermediate"),
            Difficulty::Advanced => write!(f, "advanced"),
        }
    }
}

/// A named group of lessons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    pub title: String,
    /// Lesson ids. Not checked against the lesson collection.
    pub lessons: Vec<String>,
    pub prerequisites: Vec<String>,
    pub difficulty: Difficulty,
    pub estimated_time: String,
}

impl Module {
    pub fn new(
        title: String,
        lessons: Option<Vec<String>>,
        prerequisites: Option<Vec<String>>,
        difficulty: Option<Difficulty>,
        estimated_time: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            lessons: lessons.unwrap_or_default(),
            prerequisites: prerequisites.unwrap_or_default(),
            difficulty: difficulty.unwrap_or_default(),
            estimated_time: estimated_time.unwrap_or_else(|| DEFAULT_ESTIMATED_TIME.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_only_title_given() {
        let module = Module::new("Intro to Graphs".to_string(), None, None, None, None);

        assert!(!module.id.is_empty());
        assert_eq!(module.difficulty, Difficulty::Beginner);
        assert_eq!(module.estimated_time, "1 hour");
        assert!(module.lessons.is_empty());
        assert!(module.prerequisites.is_empty());
    }

    #[test]
    fn test_difficulty_wire_format() {
        let json = serde_json::to_value(Difficulty::Intermediate).unwrap();
        assert_eq!(json, "intermediate");

        let parsed: Difficulty = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(parsed, Difficulty::Advanced);
        assert_eq!(parsed.to_string(), "advanced");

        assert!(serde_json::from_str::<Difficulty>("\"expert\"").is_err());
    }
}
