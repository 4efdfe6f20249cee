use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// POST  /register     -> register (public)
/// GET   /me           -> me
/// PUT   /me/profile   -> update_profile
/// PATCH /me/profile   -> update_profile
/// POST  /me/avatar    -> upload_avatar (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(users::register))
        .route("/me", get(users::me))
        .route(
            "/me/profile",
            put(users::update_profile).patch(users::update_profile),
        )
        .route("/me/avatar", post(users::upload_avatar))
}
