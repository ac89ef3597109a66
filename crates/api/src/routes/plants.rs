//! Route definitions for the plant endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::plants;
use crate::state::AppState;

/// Plant routes mounted at `/plants`.
///
/// ```text
/// GET    /        -> get_all_plants
/// PUT    /        -> create_plant
/// GET    /{id}    -> get_plant_by_id
/// PATCH  /{id}    -> update_plant
/// DELETE /{id}    -> delete_plant
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(plants::get_all_plants).put(plants::create_plant),
        )
        .route(
            "/{id}",
            get(plants::get_plant_by_id)
                .patch(plants::update_plant)
                .delete(plants::delete_plant),
        )
}
