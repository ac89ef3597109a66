pub mod health;
pub mod plants;

use axum::Router;

use crate::state::AppState;

/// Build the `/v1` route tree.
///
/// ```text
/// /plants          GET (list), PUT (create)
/// /plants/{id}     GET, PATCH (merge-update), DELETE
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/plants", plants::router())
}
