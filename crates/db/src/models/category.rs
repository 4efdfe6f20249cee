//! Category entity model. Categories are read-only through the API.

use quill_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// Compact category projection embedded in read-shaped posts.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    pub id: DbId,
    pub name: String,
}
