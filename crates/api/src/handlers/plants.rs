//! Handlers for the plant CRUD endpoints.
//!
//! Reads require any authenticated caller; create, update, and delete
//! require the admin role. All error paths surface through [`AppError`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use planttracker_core::error::CoreError;
use planttracker_core::plant::{CreatePlantRequest, PlantResponse, UpdatePlantRequest};
use planttracker_core::types::PlantId;
use planttracker_core::validation::{validate_create, validate_update};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::state::AppState;

/// Parse a path id. Rejects malformed UUIDs and the nil UUID with 400
/// before the service layer is reached.
fn parse_plant_id(raw: &str) -> Result<PlantId, AppError> {
    let id = Uuid::parse_str(raw)
        .map_err(|_| AppError::BadRequest(format!("Invalid plant id format: {raw}")))?;

    if id.is_nil() {
        return Err(AppError::BadRequest(
            "Plant id cannot be the nil UUID".into(),
        ));
    }

    Ok(id)
}

/// GET /v1/plants
///
/// List every stored plant. An empty store maps to 404, not an empty list.
pub async fn get_all_plants(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PlantResponse>>> {
    let plants = state.service.get_all_plants(&state.pool).await?;

    if plants.is_empty() {
        return Err(AppError::NotFound("No plants were found".into()));
    }

    Ok(Json(plants))
}

/// GET /v1/plants/{id}
pub async fn get_plant_by_id(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<PlantResponse>> {
    let id = parse_plant_id(&id)?;

    let plant = state
        .service
        .get_plant_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Plant",
            id,
        }))?;

    Ok(Json(plant))
}

/// PUT /v1/plants
///
/// Create a plant. Returns 201 with the server-generated id.
pub async fn create_plant(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(request): AppJson<CreatePlantRequest>,
) -> AppResult<(StatusCode, Json<String>)> {
    validate_create(&request)?;

    let id = state.service.create_plant(&state.pool, &request).await?;

    tracing::info!(
        plant_id = %id,
        common_name = %request.common_name,
        user_id = %admin.user_id,
        "Plant created",
    );

    Ok((StatusCode::CREATED, Json(id.to_string())))
}

/// PATCH /v1/plants/{id}
///
/// Field-level merge-update: fields left out of the payload (or sent empty,
/// for strings) keep their stored values. Returns the merged plant.
pub async fn update_plant(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(request): AppJson<UpdatePlantRequest>,
) -> AppResult<Json<PlantResponse>> {
    let id = parse_plant_id(&id)?;
    validate_update(&request)?;

    let plant = state
        .service
        .update_plant(&state.pool, id, &request)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Plant",
            id,
        }))?;

    tracing::info!(plant_id = %id, user_id = %admin.user_id, "Plant updated");

    Ok(Json(plant))
}

/// DELETE /v1/plants/{id}
///
/// Hard delete. Idempotent: deleting a missing id still returns 204.
pub async fn delete_plant(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_plant_id(&id)?;

    state.service.delete_plant(&state.pool, id).await?;

    tracing::info!(plant_id = %id, user_id = %admin.user_id, "Plant deleted");

    Ok(StatusCode::NO_CONTENT)
}
