pub mod categories;
pub mod comments;
pub mod health;
pub mod posts;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users/register                      register (public)
/// /users/me                            get own account (auth required)
/// /users/me/profile                    update own profile (PUT, PATCH)
/// /users/me/avatar                     upload avatar (POST, multipart)
///
/// /categories                          list (public)
/// /categories/{id}                     get (public)
///
/// /posts                               list, create
/// /posts/{id}                          get, update (PUT, PATCH), delete
/// /posts/{post_id}/like                toggle (POST), count (GET)
/// /posts/{post_id}/comments            list, create
/// /posts/{post_id}/comments/{id}       get
///
/// /comments/{id}                       update (PUT, PATCH), delete
/// ```
///
/// Reads are public; writes require a Bearer token, and update/delete
/// require the caller to be the record's author.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/categories", categories::router())
        .nest("/posts", posts::router())
        .nest("/comments", comments::router())
}
