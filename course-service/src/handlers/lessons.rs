use crate::dtos::CreateLessonRequest;
use crate::handlers::bad_request;
use crate::models::{Lesson, LessonPatch};
use crate::services::metrics;
use crate::startup::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use service_core::error::AppError;
use validator::Validate;

#[tracing::instrument(skip(state, payload))]
pub async fn create_lesson(
    State(state): State<AppState>,
    payload: Result<Json<CreateLessonRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Lesson>), AppError> {
    let Json(request) = payload?;
    request.validate().map_err(bad_request)?;

    let (Some(topic), Some(concept)) = (request.topic, request.concept) else {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Missing topic or concept"
        )));
    };

    let outcome = state.generator.generate(&topic, &concept).await;
    let lesson = state.store.insert_lesson(outcome.into_lesson()).await;
    metrics::record_item_created("lessons");

    tracing::info!(lesson_id = %lesson.id, topic = %topic, "Lesson created");

    Ok((StatusCode::CREATED, Json(lesson)))
}

pub async fn list_lessons(State(state): State<AppState>) -> Json<Vec<Lesson>> {
    Json(state.store.list_lessons().await)
}

#[tracing::instrument(skip(state, payload))]
pub async fn update_lesson(
    State(state): State<AppState>,
    Path(lesson_id): Path<String>,
    payload: Result<Json<LessonPatch>, JsonRejection>,
) -> Result<Json<Lesson>, AppError> {
    let Json(patch) = payload?;

    let lesson = state
        .store
        .update_lesson(&lesson_id, patch)
        .await
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Lesson not found")))?;

    tracing::info!(lesson_id = %lesson.id, "Lesson updated");

    Ok(Json(lesson))
}
