//! Handlers for the `/campers` resource.
//!
//! List and mutation responses carry the flat `{id, name, age}` shape; only
//! the single-camper GET nests signups and their activities. An `{id}` that
//! is not an integer is answered like an unknown one.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use camp_db::models::camper::{Camper, CamperDetail, NewCamper, UpdateCamper};
use camp_db::repositories::CamperRepo;
use serde::Deserialize;

use crate::error::{parse_id, AppError, AppResult};
use crate::state::AppState;

/// Request body for creating a camper. Missing fields fail validation.
#[derive(Debug, Deserialize)]
pub struct CreateCamperRequest {
    pub name: Option<String>,
    pub age: Option<i64>,
}

/// GET /campers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Camper>>> {
    let campers = CamperRepo::list(&state.pool).await?;
    tracing::debug!(count = campers.len(), "Listed campers");
    Ok(Json(campers))
}

/// POST /campers
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCamperRequest>,
) -> AppResult<(StatusCode, Json<Camper>)> {
    let new_camper = NewCamper::new(input.name, input.age)?;
    let camper = CamperRepo::create(&state.pool, &new_camper).await?;
    tracing::info!(camper_id = camper.id, "Camper created");
    Ok((StatusCode::CREATED, Json(camper)))
}

/// GET /campers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<CamperDetail>> {
    let id = parse_id("Camper", &raw_id)?;
    let camper = CamperRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Camper", id))?;
    Ok(Json(camper))
}

/// PATCH /campers/{id}
///
/// Applies `name` and/or `age` when present in the body. Responds `202
/// Accepted` with the updated camper.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(input): Json<UpdateCamper>,
) -> AppResult<(StatusCode, Json<Camper>)> {
    let id = parse_id("Camper", &raw_id)?;
    let mut camper = CamperRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Camper", id))?;

    camper.apply(input)?;

    let camper = CamperRepo::update(&state.pool, &camper)
        .await?
        .ok_or(AppError::not_found("Camper", id))?;
    tracing::info!(camper_id = id, "Camper updated");
    Ok((StatusCode::ACCEPTED, Json(camper)))
}
