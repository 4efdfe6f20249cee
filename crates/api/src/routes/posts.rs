//! Route definitions for posts and their nested sub-resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::{comments, likes, posts};
use crate::state::AppState;

/// Routes mounted at `/posts`.
///
/// ```text
/// GET    /                             -> list
/// POST   /                             -> create
/// GET    /{id}                         -> get_by_id
/// PUT    /{id}                         -> update
/// PATCH  /{id}                         -> update
/// DELETE /{id}                         -> delete
///
/// POST   /{post_id}/like               -> toggle
/// GET    /{post_id}/like               -> count
///
/// GET    /{post_id}/comments           -> list_for_post
/// POST   /{post_id}/comments           -> create
/// GET    /{post_id}/comments/{id}      -> get_for_post
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list).post(posts::create))
        .route(
            "/{id}",
            get(posts::get_by_id)
                .put(posts::update)
                .patch(posts::update)
                .delete(posts::delete),
        )
        .route("/{post_id}/like", get(likes::count).post(likes::toggle))
        .route(
            "/{post_id}/comments",
            get(comments::list_for_post).post(comments::create),
        )
        .route("/{post_id}/comments/{id}", get(comments::get_for_post))
}
