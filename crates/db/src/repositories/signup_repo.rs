//! Repository for the `signups` table.

use camp_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::activity::Activity;
use crate::models::camper::Camper;
use crate::models::signup::{
    NewSignup, Signup, SignupActivityRow, SignupDetail, SignupWithActivity,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, time, camper_id, activity_id";

/// Provides insert and read operations for signups.
pub struct SignupRepo;

impl SignupRepo {
    /// Insert a signup after confirming both referenced rows exist.
    ///
    /// The existence checks and the insert share one transaction. Returns
    /// `None` (and writes nothing) if either the camper or the activity is
    /// missing.
    pub async fn create(
        pool: &SqlitePool,
        input: &NewSignup,
    ) -> Result<Option<SignupDetail>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let camper = sqlx::query_as::<_, Camper>("SELECT id, name, age FROM campers WHERE id = ?")
            .bind(input.camper_id)
            .fetch_optional(&mut *tx)
            .await?;
        let activity = sqlx::query_as::<_, Activity>(
            "SELECT id, name, difficulty FROM activities WHERE id = ?",
        )
        .bind(input.activity_id)
        .fetch_optional(&mut *tx)
        .await?;

        let (Some(camper), Some(activity)) = (camper, activity) else {
            tx.rollback().await?;
            return Ok(None);
        };

        let query = format!(
            "INSERT INTO signups (time, camper_id, activity_id)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        let signup = sqlx::query_as::<_, Signup>(&query)
            .bind(input.time)
            .bind(input.camper_id)
            .bind(input.activity_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(SignupDetail {
            signup,
            camper,
            activity,
        }))
    }

    /// Find a signup by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Signup>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM signups WHERE id = ?");
        sqlx::query_as::<_, Signup>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a camper's signups with their activities, earliest hour first.
    pub async fn list_for_camper_with_activity(
        pool: &SqlitePool,
        camper_id: DbId,
    ) -> Result<Vec<SignupWithActivity>, sqlx::Error> {
        let rows = sqlx::query_as::<_, SignupActivityRow>(
            "SELECT s.id, s.time, s.camper_id, s.activity_id,
                    a.name AS activity_name, a.difficulty AS activity_difficulty
             FROM signups s
             JOIN activities a ON a.id = s.activity_id
             WHERE s.camper_id = ?
             ORDER BY s.time ASC, s.id ASC",
        )
        .bind(camper_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(SignupWithActivity::from).collect())
    }

    /// Total number of signups.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM signups")
            .fetch_one(pool)
            .await
    }
}
