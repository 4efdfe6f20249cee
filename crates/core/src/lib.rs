//! Domain logic shared across the blog backend.
//!
//! Pure types and rules with no I/O: the shared error enum, ID aliases,
//! the author-or-read-only permission policy, and naming conventions for
//! uploaded media.

pub mod error;
pub mod media;
pub mod permissions;
pub mod types;
