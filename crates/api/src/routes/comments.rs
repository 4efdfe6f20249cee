use axum::routing::put;
use axum::Router;

use crate::handlers::comments;
use crate::state::AppState;

/// Routes mounted at `/comments`.
///
/// Reads live under the owning post; only direct writes are addressed
/// here.
///
/// ```text
/// PUT    /{id}   -> update
/// PATCH  /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        put(comments::update)
            .patch(comments::update)
            .delete(comments::delete),
    )
}
