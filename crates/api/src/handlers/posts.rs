//! Handlers for the `/posts` resource.
//!
//! Reads are public. Writes require authentication, and update/delete
//! additionally require the caller to be the post's author.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use quill_core::error::CoreError;
use quill_core::permissions::{authorize, OperationKind};
use quill_core::types::DbId;
use quill_db::models::post::{CreatePost, PostRead, UpdatePost};
use quill_db::repositories::PostRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/posts
///
/// Lists all posts read-shaped (author and category expanded, likes
/// counted), newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<PostRead>>> {
    let posts = PostRepo::list(&state.pool).await?;
    Ok(Json(posts.into_iter().map(PostRead::from).collect()))
}

/// GET /api/v1/posts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PostRead>> {
    let post = PostRepo::find_read(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;
    Ok(Json(post.into()))
}

/// POST /api/v1/posts
///
/// The author is always the authenticated caller; the payload cannot
/// attribute the post to someone else.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreatePost>,
) -> AppResult<(StatusCode, Json<PostRead>)> {
    input.validate()?;
    authorize(OperationKind::Create, Some(user.user_id), user.user_id)?;

    let post = PostRepo::create(&state.pool, user.user_id, &input).await?;
    let read = PostRepo::find_read(&state.pool, post.id)
        .await?
        .ok_or_else(|| AppError::InternalError("Created post vanished before read".into()))?;

    tracing::info!(post_id = post.id, author_id = user.user_id, "Post created");
    Ok((StatusCode::CREATED, Json(read.into())))
}

/// PUT/PATCH /api/v1/posts/{id}
///
/// Both verbs share this handler: absent fields are left unchanged, so a
/// full replacement is just an update with every field present.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePost>,
) -> AppResult<Json<PostRead>> {
    input.validate()?;

    let existing = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;
    authorize(OperationKind::Update, Some(user.user_id), existing.author_id)?;

    PostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    let read = PostRepo::find_read(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;
    Ok(Json(read.into()))
}

/// DELETE /api/v1/posts/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;
    authorize(OperationKind::Delete, Some(user.user_id), existing.author_id)?;

    PostRepo::delete(&state.pool, id).await?;
    tracing::info!(post_id = id, author_id = user.user_id, "Post deleted");
    Ok(StatusCode::NO_CONTENT)
}
