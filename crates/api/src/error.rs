use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use camp_core::error::CoreError;
use camp_core::types::DbId;
use serde_json::json;

/// Fixed body returned for every validation failure, whatever field failed.
pub const VALIDATION_ERRORS: &str = "validation errors";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`sqlx::Error`] for storage
/// failures. Implements [`IntoResponse`] to produce the JSON error shapes
/// clients rely on.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `camp_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A path id that cannot name any row (not an integer, or out of range).
    /// Reported exactly like a missing row.
    #[error("Invalid {entity} id: {raw}")]
    InvalidId { entity: &'static str, raw: String },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Shorthand for a missing row of the given entity type.
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        AppError::Core(CoreError::NotFound { entity, id })
    }
}

/// Parse a raw `{id}` path segment for `entity`.
///
/// Anything that is not an `i64` yields [`AppError::InvalidId`], which
/// responds 404 like an id with no matching row.
pub fn parse_id(entity: &'static str, raw: &str) -> AppResult<DbId> {
    raw.parse().map_err(|_| AppError::InvalidId {
        entity,
        raw: raw.to_string(),
    })
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id, "Entity not found");
                (
                    StatusCode::NOT_FOUND,
                    json!({ "error": format!("{entity} not found") }),
                )
            }
            AppError::InvalidId { entity, raw } => {
                tracing::debug!(entity, raw = %raw, "Unparseable id in path");
                (
                    StatusCode::NOT_FOUND,
                    json!({ "error": format!("{entity} not found") }),
                )
            }
            AppError::Core(CoreError::Validation(msg)) => {
                tracing::debug!(reason = %msg, "Rejected invalid input");
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "errors": [VALIDATION_ERRORS] }),
                )
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "An internal error occurred" }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_any_i64() {
        assert_eq!(parse_id("Camper", "42").unwrap(), 42);
        assert_eq!(parse_id("Camper", "-1").unwrap(), -1);
    }

    #[test]
    fn parse_id_rejects_non_integers_and_overflow() {
        for raw in ["abc", "1.5", "", "99999999999999999999"] {
            let err = parse_id("Activity", raw).unwrap_err();
            assert!(
                matches!(err, AppError::InvalidId { entity: "Activity", .. }),
                "{raw:?} should be an invalid id, got {err:?}"
            );
        }
    }

    #[test]
    fn invalid_id_responds_like_missing_row() {
        let response = parse_id("Camper", "abc").unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
