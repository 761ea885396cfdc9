//! Handlers for the `/activities` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use camp_db::models::activity::Activity;
use camp_db::repositories::ActivityRepo;

use crate::error::{parse_id, AppError, AppResult};
use crate::state::AppState;

/// GET /activities
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Activity>>> {
    let activities = ActivityRepo::list(&state.pool).await?;
    tracing::debug!(count = activities.len(), "Listed activities");
    Ok(Json(activities))
}

/// DELETE /activities/{id}
///
/// Removes the activity and every signup referencing it.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id("Activity", &raw_id)?;
    let signups = ActivityRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Activity", id))?;
    tracing::info!(activity_id = id, signups, "Activity deleted");
    Ok(StatusCode::NO_CONTENT)
}
