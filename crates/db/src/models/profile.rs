//! Profile entity model and DTOs. Exactly one profile exists per user.

use quill_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `profiles` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Profile {
    pub id: DbId,
    pub user_id: DbId,
    /// Path relative to the media root, e.g. `avatars/jane-selfie.png`.
    pub avatar_path: Option<String>,
    pub bio: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for updating the caller's own profile.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfile {
    #[validate(length(max = 200, message = "bio must be at most 200 characters"))]
    pub bio: Option<String>,
}
