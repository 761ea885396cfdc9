//! Signup entity model, DTOs, and nested read views.
//!
//! A signup joins one camper to one activity at an hour of the day
//! (`0..=23`). Signups are never updated after insert.

use camp_core::error::CoreError;
use camp_core::types::DbId;
use camp_core::validation;
use serde::Serialize;
use sqlx::FromRow;
use validator::Validate;

use crate::models::activity::Activity;
use crate::models::camper::Camper;

/// A signup row from the `signups` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Signup {
    pub id: DbId,
    pub time: i64,
    pub camper_id: DbId,
    pub activity_id: DbId,
}

/// A validated signup that has not been inserted yet.
///
/// The referenced camper and activity are checked for existence at insert
/// time, inside the same transaction as the write.
#[derive(Debug, Clone, Validate)]
pub struct NewSignup {
    pub camper_id: DbId,
    pub activity_id: DbId,
    #[validate(range(min = 0, max = 23))]
    pub time: i64,
}

impl NewSignup {
    pub fn new(
        camper_id: Option<DbId>,
        activity_id: Option<DbId>,
        time: Option<i64>,
    ) -> Result<Self, CoreError> {
        let signup = Self {
            camper_id: validation::required(camper_id, "camper_id")?,
            activity_id: validation::required(activity_id, "activity_id")?,
            time: validation::required(time, "time")?,
        };
        validation::check(&signup)?;
        Ok(signup)
    }
}

/// A signup nested under its camper, carrying the activity it points at.
#[derive(Debug, Clone, Serialize)]
pub struct SignupWithActivity {
    #[serde(flatten)]
    pub signup: Signup,
    pub activity: Activity,
}

/// Flat join row backing [`SignupWithActivity`].
#[derive(Debug, FromRow)]
pub(crate) struct SignupActivityRow {
    pub id: DbId,
    pub time: i64,
    pub camper_id: DbId,
    pub activity_id: DbId,
    pub activity_name: String,
    pub activity_difficulty: i64,
}

impl From<SignupActivityRow> for SignupWithActivity {
    fn from(row: SignupActivityRow) -> Self {
        Self {
            signup: Signup {
                id: row.id,
                time: row.time,
                camper_id: row.camper_id,
                activity_id: row.activity_id,
            },
            activity: Activity {
                id: row.activity_id,
                name: row.activity_name,
                difficulty: row.activity_difficulty,
            },
        }
    }
}

/// Full read view of a signup with both parents.
#[derive(Debug, Clone, Serialize)]
pub struct SignupDetail {
    #[serde(flatten)]
    pub signup: Signup,
    pub camper: Camper,
    pub activity: Activity,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn accepts_hour_bounds() {
        assert!(NewSignup::new(Some(1), Some(1), Some(0)).is_ok());
        assert!(NewSignup::new(Some(1), Some(1), Some(23)).is_ok());
    }

    #[test]
    fn rejects_hour_outside_day() {
        assert_matches!(
            NewSignup::new(Some(1), Some(1), Some(24)),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            NewSignup::new(Some(1), Some(1), Some(-1)),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn rejects_missing_references() {
        assert_matches!(
            NewSignup::new(None, Some(1), Some(9)),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            NewSignup::new(Some(1), None, Some(9)),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn nested_view_flattens_signup_fields() {
        let view = SignupWithActivity::from(SignupActivityRow {
            id: 4,
            time: 9,
            camper_id: 2,
            activity_id: 3,
            activity_name: "Archery".to_string(),
            activity_difficulty: 2,
        });
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 4,
                "time": 9,
                "camper_id": 2,
                "activity_id": 3,
                "activity": {"id": 3, "name": "Archery", "difficulty": 2},
            })
        );
    }
}
