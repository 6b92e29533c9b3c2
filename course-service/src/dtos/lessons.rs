use serde::Deserialize;
use validator::Validate;

/// Body of `POST /api/lessons`.
///
/// Both fields are optional at the serde level so a missing key reaches
/// validation and is reported as a 400 rather than a JSON rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLessonRequest {
    #[validate(required(message = "Missing topic or concept"))]
    pub topic: Option<String>,
    #[validate(required(message = "Missing topic or concept"))]
    pub concept: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> CreateLessonRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_both_fields_present() {
        assert!(parse(r#"{"topic": "Rust", "concept": "Traits"}"#)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_missing_either_field_fails() {
        assert!(parse(r#"{"topic": "Rust"}"#).validate().is_err());
        assert!(parse(r#"{"concept": "Traits"}"#).validate().is_err());
        assert!(parse(r#"{"topic": null, "concept": "Traits"}"#)
            .validate()
            .is_err());
        assert!(parse("{}").validate().is_err());
    }
}
