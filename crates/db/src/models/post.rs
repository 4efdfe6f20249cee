//! Post entity model and DTOs.
//!
//! Posts have two representations: the bare [`Post`] row (write responses
//! and ownership checks) and the read-shaped [`PostRead`] with the author
//! and category expanded plus the liked-by cardinality.

use quill_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::category::CategoryInfo;
use crate::models::user::AuthorInfo;

/// A row from the `posts` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Post {
    pub id: DbId,
    pub author_id: DbId,
    pub category_id: Option<DbId>,
    pub title: String,
    pub body: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Flat join row backing [`PostRead`].
#[derive(Debug, FromRow)]
pub struct PostReadRow {
    pub id: DbId,
    pub title: String,
    pub body: String,
    pub author_id: DbId,
    pub author_username: String,
    pub category_id: Option<DbId>,
    pub category_name: Option<String>,
    pub likes_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Read-shaped post: related fields resolved for display.
#[derive(Debug, Serialize)]
pub struct PostRead {
    pub id: DbId,
    pub title: String,
    pub body: String,
    pub author: AuthorInfo,
    pub category: Option<CategoryInfo>,
    pub likes_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<PostReadRow> for PostRead {
    fn from(row: PostReadRow) -> Self {
        let category = match (row.category_id, row.category_name) {
            (Some(id), Some(name)) => Some(CategoryInfo { id, name }),
            _ => None,
        };
        PostRead {
            id: row.id,
            title: row.title,
            body: row.body,
            author: AuthorInfo {
                id: row.author_id,
                username: row.author_username,
            },
            category,
            likes_count: row.likes_count,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Write-shaped DTO for creating a post. The author comes from the
/// authenticated caller, never from the payload.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePost {
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "body must not be empty"))]
    pub body: String,
    pub category_id: Option<DbId>,
}

/// Write-shaped DTO for updating a post. `None` fields are left unchanged.
///
/// Note that `category_id: None` means "keep the current category", so an
/// update can move a post between categories but never clear the category
/// back to none.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePost {
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "body must not be empty"))]
    pub body: Option<String>,
    pub category_id: Option<DbId>,
}
