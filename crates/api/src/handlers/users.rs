//! Handlers for registration and the authenticated user's own account.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use image::ImageFormat;
use quill_core::error::CoreError;
use quill_core::media::avatar_path;
use quill_db::models::profile::{Profile, UpdateProfile};
use quill_db::models::user::{CreateUser, RegisterUser, UserResponse};
use quill_db::repositories::{ProfileRepo, UserRepo};
use serde::Serialize;
use validator::Validate;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Combined account view: the user row plus its profile.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: UserResponse,
    pub profile: Profile,
}

/// POST /api/v1/users/register
///
/// Creates the user and its empty profile atomically. The password is
/// hashed before it ever reaches the database layer; a duplicate email
/// surfaces as 409.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterUser>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    input.validate()?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let create = CreateUser {
        username: input.username,
        email: input.email,
        password_hash,
    };
    let user = UserRepo::create_with_profile(&state.pool, &create).await?;

    tracing::info!(user_id = user.id, "User registered");
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /api/v1/users/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> AppResult<Json<MeResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;
    let profile = ProfileRepo::find_by_user(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: auth.user_id,
        }))?;

    Ok(Json(MeResponse {
        user: user.into(),
        profile,
    }))
}

/// PUT/PATCH /api/v1/users/me/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<Profile>> {
    input.validate()?;

    let profile = ProfileRepo::update(&state.pool, auth.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: auth.user_id,
        }))?;
    Ok(Json(profile))
}

/// POST /api/v1/users/me/avatar
///
/// Accepts a multipart form with an `avatar` file field. The content is
/// sniffed, not trusted: only PNG, JPEG, and WebP payloads are stored.
pub async fn upload_avatar(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> AppResult<Json<Profile>> {
    let mut file_data: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "avatar" => {
                let filename = field.file_name().unwrap_or("avatar.png").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file_data = Some((filename, data.to_vec()));
            }
            _ => {} // ignore unknown fields
        }
    }

    let (filename, data) =
        file_data.ok_or_else(|| AppError::BadRequest("Missing required 'avatar' field".into()))?;

    // Sniff the actual content; the filename extension proves nothing.
    let format = image::guess_format(&data)
        .map_err(|_| AppError::BadRequest("Avatar is not a recognized image".into()))?;
    if !matches!(
        format,
        ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::WebP
    ) {
        return Err(AppError::BadRequest(
            "Avatar must be a PNG, JPEG, or WebP image".into(),
        ));
    }

    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;

    let relative = avatar_path(&user.username, &filename);
    let full_path = state.config.media_root.join(&relative);
    if let Some(parent) = full_path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to create media dir: {e}")))?;
    }
    tokio::fs::write(&full_path, &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store avatar: {e}")))?;

    let profile = ProfileRepo::set_avatar(&state.pool, auth.user_id, &relative)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: auth.user_id,
        }))?;

    tracing::info!(user_id = auth.user_id, path = %relative, "Avatar stored");
    Ok(Json(profile))
}
