pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                 list, create
/// /movies/{id}            get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(movies::router())
}
