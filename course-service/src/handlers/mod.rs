//! HTTP handlers for course-service.

pub mod health;
pub mod lessons;
pub mod modules;

use service_core::error::AppError;
use validator::ValidationErrors;

/// Turn request validation failures into a 400 carrying the first message.
pub(crate) fn bad_request(errors: ValidationErrors) -> AppError {
    let message = errors
        .field_errors()
        .into_values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string());

    AppError::BadRequest(anyhow::anyhow!(message))
}
