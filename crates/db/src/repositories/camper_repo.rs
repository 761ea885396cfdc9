//! Repository for the `campers` table.

use camp_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::camper::{Camper, CamperDetail, NewCamper};
use crate::repositories::SignupRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, age";

/// Provides CRUD operations for campers.
pub struct CamperRepo;

impl CamperRepo {
    /// Insert a new camper, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &NewCamper) -> Result<Camper, sqlx::Error> {
        let query = format!(
            "INSERT INTO campers (name, age)
             VALUES (?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Camper>(&query)
            .bind(&input.name)
            .bind(input.age)
            .fetch_one(pool)
            .await
    }

    /// Find a camper by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Camper>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campers WHERE id = ?");
        sqlx::query_as::<_, Camper>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a camper together with its signups and their activities.
    pub async fn find_detail(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<CamperDetail>, sqlx::Error> {
        let Some(camper) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let signups = SignupRepo::list_for_camper_with_activity(pool, id).await?;
        Ok(Some(CamperDetail { camper, signups }))
    }

    /// List all campers, ordered by ID ascending.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Camper>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campers ORDER BY id ASC");
        sqlx::query_as::<_, Camper>(&query).fetch_all(pool).await
    }

    /// Persist the name and age of an already-validated camper.
    ///
    /// Returns `None` if the row no longer exists.
    pub async fn update(pool: &SqlitePool, camper: &Camper) -> Result<Option<Camper>, sqlx::Error> {
        let query = format!(
            "UPDATE campers SET name = ?, age = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Camper>(&query)
            .bind(&camper.name)
            .bind(camper.age)
            .bind(camper.id)
            .fetch_optional(pool)
            .await
    }

    /// Total number of campers.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM campers")
            .fetch_one(pool)
            .await
    }
}
