//! Repository for the `comments` table.
//!
//! Reads are always scoped by post: the list and the scoped find both
//! filter on `post_id` so a comment never leaks through another post's
//! route.

use quill_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{Comment, CommentReadRow, CreateComment, UpdateComment};

const COLUMNS: &str = "id, author_id, post_id, body, created_at, updated_at";

const READ_QUERY: &str = "SELECT c.id, c.post_id, c.body, \
        c.author_id, u.username AS author_username, \
        c.created_at, c.updated_at \
     FROM comments c \
     JOIN users u ON u.id = c.author_id";

/// Provides CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// List the comments of one post, oldest first.
    pub async fn list_for_post(
        pool: &PgPool,
        post_id: DbId,
    ) -> Result<Vec<CommentReadRow>, sqlx::Error> {
        let query = format!("{READ_QUERY} WHERE c.post_id = $1 ORDER BY c.created_at ASC, c.id ASC");
        sqlx::query_as::<_, CommentReadRow>(&query)
            .bind(post_id)
            .fetch_all(pool)
            .await
    }

    /// Find a comment read-shaped, scoped to `post_id`.
    ///
    /// Returns `None` when the comment does not exist OR belongs to a
    /// different post -- the route scope makes those indistinguishable.
    pub async fn find_for_post(
        pool: &PgPool,
        post_id: DbId,
        id: DbId,
    ) -> Result<Option<CommentReadRow>, sqlx::Error> {
        let query = format!("{READ_QUERY} WHERE c.post_id = $1 AND c.id = $2");
        sqlx::query_as::<_, CommentReadRow>(&query)
            .bind(post_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a bare comment row by its ID (for ownership checks on writes).
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new comment on `post_id` authored by `author_id`.
    pub async fn create(
        pool: &PgPool,
        author_id: DbId,
        post_id: DbId,
        input: &CreateComment,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (author_id, post_id, body)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(author_id)
            .bind(post_id)
            .bind(&input.body)
            .fetch_one(pool)
            .await
    }

    /// Update a comment's body. The post reference is immutable.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateComment,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "UPDATE comments SET
                body = COALESCE($2, body),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .bind(&input.body)
            .fetch_optional(pool)
            .await
    }

    /// Delete a comment by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
