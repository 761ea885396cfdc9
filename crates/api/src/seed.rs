//! Sample data for local development.
//!
//! Rows go through the same constructors as API input, so seed data obeys
//! every field rule. A store that already holds campers is left untouched.

use camp_db::models::activity::NewActivity;
use camp_db::models::camper::NewCamper;
use camp_db::models::signup::NewSignup;
use camp_db::repositories::{ActivityRepo, CamperRepo, SignupRepo};
use camp_db::DbPool;

use crate::error::AppResult;

const CAMPERS: &[(&str, i64)] = &[
    ("Caitlin", 8),
    ("Lizzie", 9),
    ("Nicholas Martinez", 12),
    ("Ashley Delgado", 14),
    ("Joshua Mcintyre", 17),
];

const ACTIVITIES: &[(&str, i64)] = &[
    ("Archery", 2),
    ("Swimming", 3),
    ("Hiking by the stream", 1),
    ("Canoeing", 4),
];

/// Row counts written by [`seed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub campers: usize,
    pub activities: usize,
    pub signups: usize,
}

/// Insert the sample campers, activities, and signups.
///
/// Returns `None` without writing anything if any camper already exists.
pub async fn seed(pool: &DbPool) -> AppResult<Option<SeedReport>> {
    if CamperRepo::count(pool).await? > 0 {
        return Ok(None);
    }

    let mut camper_ids = Vec::with_capacity(CAMPERS.len());
    for &(name, age) in CAMPERS {
        let input = NewCamper::new(Some(name.into()), Some(age))?;
        camper_ids.push(CamperRepo::create(pool, &input).await?.id);
    }

    let mut activity_ids = Vec::with_capacity(ACTIVITIES.len());
    for &(name, difficulty) in ACTIVITIES {
        let input = NewActivity {
            name: name.into(),
            difficulty,
        };
        activity_ids.push(ActivityRepo::create(pool, &input).await?.id);
    }

    // Each camper takes two activities, one morning and one afternoon slot.
    let mut signups = 0;
    for (i, &camper_id) in camper_ids.iter().enumerate() {
        for (slot, hour) in [(i, 9 + i as i64), (i + 1, 14 + i as i64)] {
            let activity_id = activity_ids[slot % activity_ids.len()];
            let new_signup = NewSignup::new(Some(camper_id), Some(activity_id), Some(hour))?;
            if SignupRepo::create(pool, &new_signup).await?.is_some() {
                signups += 1;
            }
        }
    }

    Ok(Some(SeedReport {
        campers: camper_ids.len(),
        activities: activity_ids.len(),
        signups,
    }))
}
