//! Handlers for the `/signups` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use camp_core::error::CoreError;
use camp_core::types::DbId;
use camp_db::models::signup::{NewSignup, SignupDetail};
use camp_db::repositories::SignupRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Request body for creating a signup. Missing fields fail validation.
#[derive(Debug, Deserialize)]
pub struct CreateSignupRequest {
    pub camper_id: Option<DbId>,
    pub activity_id: Option<DbId>,
    pub time: Option<i64>,
}

/// POST /signups
///
/// A reference to a camper or activity that does not exist is reported as a
/// validation failure, not a 404.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSignupRequest>,
) -> AppResult<(StatusCode, Json<SignupDetail>)> {
    let new_signup = NewSignup::new(input.camper_id, input.activity_id, input.time)?;
    let signup = SignupRepo::create(&state.pool, &new_signup)
        .await?
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "camper {} or activity {} does not exist",
                new_signup.camper_id, new_signup.activity_id
            ))
        })?;
    tracing::info!(
        signup_id = signup.signup.id,
        camper_id = signup.camper.id,
        activity_id = signup.activity.id,
        "Signup created"
    );
    Ok((StatusCode::CREATED, Json(signup)))
}
