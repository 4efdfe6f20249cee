//! Handlers for the like toggle on posts.
//!
//! A post carries a liked-by set. Toggling adds the caller when absent
//! and removes them when present. Anonymous callers share a single
//! per-post bucket, and whether they may toggle at all is a deployment
//! choice (`ANONYMOUS_LIKES`).

use axum::extract::{Path, State};
use axum::Json;
use quill_core::error::CoreError;
use quill_core::types::DbId;
use quill_db::repositories::{LikeOutcome, LikeRepo, PostRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::OptionalAuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Response payload for the like count endpoint.
#[derive(Debug, Serialize)]
pub struct LikeCountResponse {
    pub likes_count: i64,
}

/// POST /api/v1/posts/{post_id}/like
///
/// Toggles the caller's membership in the post's liked-by set. Repeating
/// the request restores the previous state.
pub async fn toggle(
    State(state): State<AppState>,
    user: OptionalAuthUser,
    Path(post_id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let user_id = match user.0 {
        Some(auth) => Some(auth.user_id),
        None if state.config.anonymous_likes => None,
        None => {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Authentication required to like posts".into(),
            )))
        }
    };

    ensure_post_exists(&state, post_id).await?;

    let outcome = LikeRepo::toggle(&state.pool, post_id, user_id).await?;
    let message = match outcome {
        LikeOutcome::Liked => "Post liked",
        LikeOutcome::Unliked => "Post unliked",
    };

    tracing::debug!(post_id, ?user_id, ?outcome, "Like toggled");
    Ok(Json(MessageResponse::new(message)))
}

/// GET /api/v1/posts/{post_id}/like
pub async fn count(
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
) -> AppResult<Json<LikeCountResponse>> {
    ensure_post_exists(&state, post_id).await?;
    let likes_count = LikeRepo::count(&state.pool, post_id).await?;
    Ok(Json(LikeCountResponse { likes_count }))
}

async fn ensure_post_exists(state: &AppState, post_id: DbId) -> AppResult<()> {
    if !PostRepo::exists(&state.pool, post_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Post",
            id: post_id,
        }));
    }
    Ok(())
}
