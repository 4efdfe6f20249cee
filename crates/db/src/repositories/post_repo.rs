//! Repository for the `posts` table.
//!
//! Reads come in two shapes: the bare row (ownership checks, write
//! responses) and the read-shaped join with author, category, and the
//! liked-by cardinality resolved.

use quill_core::types::DbId;
use sqlx::PgPool;

use crate::models::post::{CreatePost, Post, PostReadRow, UpdatePost};

/// Column list for bare post rows.
const COLUMNS: &str = "id, author_id, category_id, title, body, created_at, updated_at";

/// Shared SELECT for read-shaped rows.
const READ_QUERY: &str = "SELECT p.id, p.title, p.body, \
        p.author_id, u.username AS author_username, \
        p.category_id, c.name AS category_name, \
        (SELECT COUNT(*) FROM post_likes pl WHERE pl.post_id = p.id) AS likes_count, \
        p.created_at, p.updated_at \
     FROM posts p \
     JOIN users u ON u.id = p.author_id \
     LEFT JOIN categories c ON c.id = p.category_id";

/// Provides CRUD operations for posts.
pub struct PostRepo;

impl PostRepo {
    /// List all posts read-shaped, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<PostReadRow>, sqlx::Error> {
        let query = format!("{READ_QUERY} ORDER BY p.created_at DESC, p.id DESC");
        sqlx::query_as::<_, PostReadRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a post read-shaped by its ID.
    pub async fn find_read(pool: &PgPool, id: DbId) -> Result<Option<PostReadRow>, sqlx::Error> {
        let query = format!("{READ_QUERY} WHERE p.id = $1");
        sqlx::query_as::<_, PostReadRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a bare post row by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a post with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Insert a new post authored by `author_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        author_id: DbId,
        input: &CreatePost,
    ) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO posts (author_id, category_id, title, body)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(author_id)
            .bind(input.category_id)
            .bind(&input.title)
            .bind(&input.body)
            .fetch_one(pool)
            .await
    }

    /// Update a post. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePost,
    ) -> Result<Option<Post>, sqlx::Error> {
        let query = format!(
            "UPDATE posts SET
                title = COALESCE($2, title),
                body = COALESCE($3, body),
                category_id = COALESCE($4, category_id),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.body)
            .bind(input.category_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a post by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
