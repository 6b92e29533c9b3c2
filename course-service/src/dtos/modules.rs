use crate::models::{Difficulty, Module};
use serde::Deserialize;
use validator::Validate;

/// Body of `POST /api/modules`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateModuleRequest {
    #[validate(required(message = "Missing module title"))]
    pub title: Option<String>,
    pub lessons: Option<Vec<String>>,
    pub prerequisites: Option<Vec<String>>,
    pub difficulty: Option<Difficulty>,
    pub estimated_time: Option<String>,
}

impl CreateModuleRequest {
    /// Build the module, filling defaults. `None` when the title is missing.
    pub fn into_module(self) -> Option<Module> {
        let title = self.title?;
        Some(Module::new(
            title,
            self.lessons,
            self.prerequisites,
            self.difficulty,
            self.estimated_time,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_only_gets_defaults() {
        let request: CreateModuleRequest =
            serde_json::from_str(r#"{"title": "Intro to Graphs"}"#).unwrap();
        assert!(request.validate().is_ok());

        let module = request.into_module().unwrap();
        assert_eq!(module.title, "Intro to Graphs");
        assert_eq!(module.difficulty, Difficulty::Beginner);
        assert_eq!(module.estimated_time, "1 hour");
        assert!(module.lessons.is_empty());
        assert!(module.prerequisites.is_empty());
    }

    #[test]
    fn test_supplied_fields_are_kept() {
        let request: CreateModuleRequest = serde_json::from_str(
            r#"{
                "title": "Trees",
                "lessons": ["l1", "l2"],
                "prerequisites": ["m0"],
                "difficulty": "advanced",
                "estimated_time": "3 hours"
            }"#,
        )
        .unwrap();

        let module = request.into_module().unwrap();
        assert_eq!(module.lessons, vec!["l1", "l2"]);
        assert_eq!(module.prerequisites, vec!["m0"]);
        assert_eq!(module.difficulty, Difficulty::Advanced);
        assert_eq!(module.estimated_time, "3 hours");
    }

    #[test]
    fn test_missing_title_fails_validation() {
        let request: CreateModuleRequest =
            serde_json::from_str(r#"{"lessons": ["l1"]}"#).unwrap();
        assert!(request.validate().is_err());
        assert!(request.into_module().is_none());
    }
}
