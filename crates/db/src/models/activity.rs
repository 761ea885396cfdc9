//! Activity entity model and DTOs.

use camp_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An activity row from the `activities` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Activity {
    pub id: DbId,
    pub name: String,
    pub difficulty: i64,
}

/// DTO for creating a new activity.
#[derive(Debug, Clone, Deserialize)]
pub struct NewActivity {
    pub name: String,
    pub difficulty: i64,
}
