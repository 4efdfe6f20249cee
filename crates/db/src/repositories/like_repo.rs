//! Repository for the `post_likes` table -- a post's liked-by set.

use quill_core::types::DbId;
use sqlx::PgPool;

/// Result of a like toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOutcome {
    Liked,
    Unliked,
}

/// Provides membership operations on the liked-by set.
pub struct LikeRepo;

impl LikeRepo {
    /// Toggle `user_id` (or the per-post anonymous bucket when `None`) in
    /// the post's liked-by set.
    ///
    /// Runs as one transaction: a conditional DELETE, else INSERT .. ON
    /// CONFLICT DO NOTHING. The unique constraints are the arbiter, so two
    /// racing toggles can never produce duplicate rows.
    pub async fn toggle(
        pool: &PgPool,
        post_id: DbId,
        user_id: Option<DbId>,
    ) -> Result<LikeOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let deleted = sqlx::query(
            "DELETE FROM post_likes
             WHERE post_id = $1 AND user_id IS NOT DISTINCT FROM $2",
        )
        .bind(post_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        let outcome = if deleted.rows_affected() > 0 {
            LikeOutcome::Unliked
        } else {
            sqlx::query(
                "INSERT INTO post_likes (post_id, user_id)
                 VALUES ($1, $2)
                 ON CONFLICT DO NOTHING",
            )
            .bind(post_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;
            LikeOutcome::Liked
        };

        tx.commit().await?;
        Ok(outcome)
    }

    /// Current cardinality of the post's liked-by set.
    pub async fn count(pool: &PgPool, post_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM post_likes WHERE post_id = $1")
            .bind(post_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
