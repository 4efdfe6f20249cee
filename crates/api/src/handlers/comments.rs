//! Handlers for comments.
//!
//! Reads are nested under their post (`/posts/{post_id}/comments`);
//! writes address the comment directly (`/comments/{id}`) since the
//! comment's post reference is immutable.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use quill_core::error::CoreError;
use quill_core::permissions::{authorize, OperationKind};
use quill_core::types::DbId;
use quill_db::models::comment::{CommentRead, CreateComment, UpdateComment};
use quill_db::repositories::{CommentRepo, PostRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/posts/{post_id}/comments
///
/// A plain scoped filter: an unknown post simply has no comments, so the
/// list is empty rather than a 404.
pub async fn list_for_post(
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
) -> AppResult<Json<Vec<CommentRead>>> {
    let comments = CommentRepo::list_for_post(&state.pool, post_id).await?;
    Ok(Json(comments.into_iter().map(CommentRead::from).collect()))
}

/// GET /api/v1/posts/{post_id}/comments/{id}
///
/// A comment that exists under a different post is treated as not found.
pub async fn get_for_post(
    State(state): State<AppState>,
    Path((post_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<CommentRead>> {
    let comment = CommentRepo::find_for_post(&state.pool, post_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }))?;
    Ok(Json(comment.into()))
}

/// POST /api/v1/posts/{post_id}/comments
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(post_id): Path<DbId>,
    Json(input): Json<CreateComment>,
) -> AppResult<(StatusCode, Json<CommentRead>)> {
    input.validate()?;
    authorize(OperationKind::Create, Some(user.user_id), user.user_id)?;
    ensure_post_exists(&state, post_id).await?;

    let comment = CommentRepo::create(&state.pool, user.user_id, post_id, &input).await?;
    let read = CommentRepo::find_for_post(&state.pool, post_id, comment.id)
        .await?
        .ok_or_else(|| AppError::InternalError("Created comment vanished before read".into()))?;

    tracing::info!(
        comment_id = comment.id,
        post_id,
        author_id = user.user_id,
        "Comment created"
    );
    Ok((StatusCode::CREATED, Json(read.into())))
}

/// PUT/PATCH /api/v1/comments/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateComment>,
) -> AppResult<Json<CommentRead>> {
    input.validate()?;

    let existing = CommentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }))?;
    authorize(OperationKind::Update, Some(user.user_id), existing.author_id)?;

    CommentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }))?;

    let read = CommentRepo::find_for_post(&state.pool, existing.post_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }))?;
    Ok(Json(read.into()))
}

/// DELETE /api/v1/comments/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = CommentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }))?;
    authorize(OperationKind::Delete, Some(user.user_id), existing.author_id)?;

    CommentRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// 404 when the parent post does not exist.
async fn ensure_post_exists(state: &AppState, post_id: DbId) -> AppResult<()> {
    if !PostRepo::exists(&state.pool, post_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Post",
            id: post_id,
        }));
    }
    Ok(())
}
