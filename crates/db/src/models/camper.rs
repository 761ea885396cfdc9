//! Camper entity model and DTOs.
//!
//! A camper's `name` must be non-empty and its `age` must fall within
//! `8..=18`. Both rules are checked on construction ([`NewCamper::new`]) and
//! on every assignment ([`Camper::set_name`], [`Camper::set_age`]), so an
//! invalid camper never reaches a repository.

use camp_core::error::CoreError;
use camp_core::types::DbId;
use camp_core::validation;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::signup::SignupWithActivity;

/// A camper row from the `campers` table.
///
/// Serializes to the flat `{id, name, age}` shape used by list and mutation
/// responses.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Validate)]
pub struct Camper {
    pub id: DbId,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 8, max = 18))]
    pub age: i64,
}

impl Camper {
    /// Replace the name. Leaves the camper untouched if `name` is empty.
    pub fn set_name(&mut self, name: String) -> Result<(), CoreError> {
        self.assign(Camper {
            name,
            ..self.clone()
        })
    }

    /// Replace the age. Leaves the camper untouched if `age` is out of range.
    pub fn set_age(&mut self, age: i64) -> Result<(), CoreError> {
        self.assign(Camper {
            age,
            ..self.clone()
        })
    }

    /// Apply a partial update. Only keys present in the request body are
    /// assigned; an explicit `null` is rejected like any other invalid value.
    ///
    /// Either every present field is applied or none is.
    pub fn apply(&mut self, update: UpdateCamper) -> Result<(), CoreError> {
        let mut next = self.clone();
        if let Some(name) = update.name {
            next.set_name(validation::required(name, "name")?)?;
        }
        if let Some(age) = update.age {
            next.set_age(validation::required(age, "age")?)?;
        }
        *self = next;
        Ok(())
    }

    fn assign(&mut self, candidate: Camper) -> Result<(), CoreError> {
        validation::check(&candidate)?;
        *self = candidate;
        Ok(())
    }
}

/// A validated camper that has not been inserted yet.
#[derive(Debug, Clone, Validate)]
pub struct NewCamper {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 8, max = 18))]
    pub age: i64,
}

impl NewCamper {
    /// Build a camper from request fields, rejecting missing or invalid ones.
    pub fn new(name: Option<String>, age: Option<i64>) -> Result<Self, CoreError> {
        let camper = Self {
            name: validation::required(name, "name")?,
            age: validation::required(age, "age")?,
        };
        validation::check(&camper)?;
        Ok(camper)
    }
}

/// DTO for partially updating a camper.
///
/// The outer `Option` records whether the key was sent at all; the inner one
/// whether it was `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCamper {
    #[serde(default, deserialize_with = "super::present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::present")]
    pub age: Option<Option<i64>>,
}

/// Full read view of a camper with its signups and their activities.
#[derive(Debug, Clone, Serialize)]
pub struct CamperDetail {
    #[serde(flatten)]
    pub camper: Camper,
    pub signups: Vec<SignupWithActivity>,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn camper() -> Camper {
        Camper {
            id: 1,
            name: "Caitlin".to_string(),
            age: 12,
        }
    }

    #[test]
    fn new_accepts_age_bounds() {
        assert!(NewCamper::new(Some("Ana".into()), Some(8)).is_ok());
        assert!(NewCamper::new(Some("Ana".into()), Some(18)).is_ok());
    }

    #[test]
    fn new_rejects_age_outside_bounds() {
        assert_matches!(
            NewCamper::new(Some("Ana".into()), Some(7)),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            NewCamper::new(Some("Ana".into()), Some(19)),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn new_rejects_empty_or_missing_name() {
        assert_matches!(
            NewCamper::new(Some(String::new()), Some(10)),
            Err(CoreError::Validation(_))
        );
        assert_matches!(NewCamper::new(None, Some(10)), Err(CoreError::Validation(_)));
        assert_matches!(
            NewCamper::new(Some("Ana".into()), None),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn failed_setter_leaves_camper_unchanged() {
        let mut c = camper();
        assert_matches!(c.set_age(19), Err(CoreError::Validation(_)));
        assert_matches!(c.set_name(String::new()), Err(CoreError::Validation(_)));
        assert_eq!(c, camper());
    }

    #[test]
    fn apply_updates_only_present_fields() {
        let mut c = camper();
        let update: UpdateCamper = serde_json::from_str(r#"{"age": 15}"#).unwrap();
        c.apply(update).unwrap();
        assert_eq!(c.name, "Caitlin");
        assert_eq!(c.age, 15);

        let update: UpdateCamper = serde_json::from_str(r#"{"name": "Cat"}"#).unwrap();
        c.apply(update).unwrap();
        assert_eq!(c.name, "Cat");
        assert_eq!(c.age, 15);
    }

    #[test]
    fn apply_is_all_or_nothing() {
        let mut c = camper();
        let update: UpdateCamper =
            serde_json::from_str(r#"{"name": "Cat", "age": 30}"#).unwrap();
        assert_matches!(c.apply(update), Err(CoreError::Validation(_)));
        assert_eq!(c, camper());
    }

    #[test]
    fn apply_rejects_explicit_null() {
        let mut c = camper();
        let update: UpdateCamper = serde_json::from_str(r#"{"age": null}"#).unwrap();
        assert_matches!(c.apply(update), Err(CoreError::Validation(_)));
        assert_eq!(c, camper());
    }
}
