//! Repository for the `profiles` table.
//!
//! Profiles are keyed by their owning user; all lookups go through
//! `user_id` rather than the profile's own ID.

use quill_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::{Profile, UpdateProfile};

const COLUMNS: &str = "id, user_id, avatar_path, bio, created_at, updated_at";

/// Provides profile operations, keyed by owning user.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Find the profile belonging to `user_id`.
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE user_id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update the profile of `user_id`. Only non-`None` fields are applied.
    ///
    /// Returns `None` if the user has no profile row.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET
                bio = COALESCE($2, bio),
                updated_at = now()
             WHERE user_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .bind(&input.bio)
            .fetch_optional(pool)
            .await
    }

    /// Record the stored avatar path for `user_id`'s profile.
    pub async fn set_avatar(
        pool: &PgPool,
        user_id: DbId,
        avatar_path: &str,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET avatar_path = $2, updated_at = now()
             WHERE user_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .bind(avatar_path)
            .fetch_optional(pool)
            .await
    }
}
