use crate::dtos::CreateModuleRequest;
use crate::handlers::bad_request;
use crate::models::Module;
use crate::services::metrics;
use crate::startup::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use service_core::error::AppError;
use validator::Validate;

#[tracing::instrument(skip(state, payload))]
pub async fn create_module(
    State(state): State<AppState>,
    payload: Result<Json<CreateModuleRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Module>), AppError> {
    let Json(request) = payload?;
    request.validate().map_err(bad_request)?;

    let module = request
        .into_module()
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("Missing module title")))?;
    let module = state.store.insert_module(module).await;
    metrics::record_item_created("modules");

    tracing::info!(
        module_id = %module.id,
        difficulty = %module.difficulty,
        "Module created"
    );

    Ok((StatusCode::CREATED, Json(module)))
}

pub async fn list_modules(State(state): State<AppState>) -> Json<Vec<Module>> {
    Json(state.store.list_modules().await)
}
