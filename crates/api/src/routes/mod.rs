pub mod health;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the camp resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /campers                 list, create
/// /campers/{id}            get (with signups), partial update
///
/// /activities              list
/// /activities/{id}         delete (cascades to signups)
///
/// /signups                 create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/campers",
            get(handlers::camper::list).post(handlers::camper::create),
        )
        .route(
            "/campers/{id}",
            get(handlers::camper::get_by_id).patch(handlers::camper::update),
        )
        .route("/activities", get(handlers::activity::list))
        .route("/activities/{id}", delete(handlers::activity::delete))
        .route("/signups", post(handlers::signup::create))
}
