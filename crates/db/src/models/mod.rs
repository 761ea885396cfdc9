//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO whose constructor enforces the entity's invariants
//! - Nested read views where an endpoint needs related rows

pub mod activity;
pub mod camper;
pub mod signup;

use serde::{Deserialize, Deserializer};

/// Deserialize a field so that an explicit `null` is distinguishable from an
/// absent key: absent stays `None` (via `#[serde(default)]`), `null` becomes
/// `Some(None)`.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
