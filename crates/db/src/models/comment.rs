//! Comment entity model and DTOs.
//!
//! A comment belongs to exactly one post; its post reference is fixed at
//! creation and every read goes through a post-scoped query.

use quill_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::user::AuthorInfo;

/// A row from the `comments` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comment {
    pub id: DbId,
    pub author_id: DbId,
    pub post_id: DbId,
    pub body: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Flat join row backing [`CommentRead`].
#[derive(Debug, FromRow)]
pub struct CommentReadRow {
    pub id: DbId,
    pub post_id: DbId,
    pub body: String,
    pub author_id: DbId,
    pub author_username: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Read-shaped comment with the author resolved for display.
#[derive(Debug, Serialize)]
pub struct CommentRead {
    pub id: DbId,
    pub post_id: DbId,
    pub body: String,
    pub author: AuthorInfo,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<CommentReadRow> for CommentRead {
    fn from(row: CommentReadRow) -> Self {
        CommentRead {
            id: row.id,
            post_id: row.post_id,
            body: row.body,
            author: AuthorInfo {
                id: row.author_id,
                username: row.author_username,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Write-shaped DTO for creating a comment. The post comes from the route
/// path and the author from the authenticated caller.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateComment {
    #[validate(length(min = 1, max = 2000, message = "body must be 1-2000 characters"))]
    pub body: String,
}

/// Write-shaped DTO for updating a comment.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateComment {
    #[validate(length(min = 1, max = 2000, message = "body must be 1-2000 characters"))]
    pub body: Option<String>,
}
