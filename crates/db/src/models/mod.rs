//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` + `Validate` DTO for each write-shaped input
//! - Read-shaped response structs where list/retrieve expand relations

pub mod category;
pub mod comment;
pub mod post;
pub mod profile;
pub mod user;
