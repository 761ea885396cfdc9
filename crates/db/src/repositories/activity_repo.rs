//! Repository for the `activities` table.

use camp_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::activity::{Activity, NewActivity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, difficulty";

/// Provides CRUD operations for activities.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Insert a new activity, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &NewActivity) -> Result<Activity, sqlx::Error> {
        let query = format!(
            "INSERT INTO activities (name, difficulty)
             VALUES (?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(&input.name)
            .bind(input.difficulty)
            .fetch_one(pool)
            .await
    }

    /// Find an activity by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Activity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activities WHERE id = ?");
        sqlx::query_as::<_, Activity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all activities, ordered by ID ascending.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Activity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activities ORDER BY id ASC");
        sqlx::query_as::<_, Activity>(&query).fetch_all(pool).await
    }

    /// Delete an activity and every signup that references it, in one
    /// transaction.
    ///
    /// Returns the number of signups removed, or `None` if no activity with
    /// the given `id` exists (nothing is written in that case).
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<Option<u64>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let signups = sqlx::query("DELETE FROM signups WHERE activity_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM activities WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        tx.commit().await?;
        tracing::debug!(activity_id = id, signups, "Cascade-deleted activity signups");
        Ok(Some(signups))
    }

    /// Total number of activities.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM activities")
            .fetch_one(pool)
            .await
    }
}
