pub mod activity;
pub mod camper;
pub mod signup;
