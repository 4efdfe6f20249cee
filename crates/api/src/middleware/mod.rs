//! Authentication middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT
//!   Bearer token; rejects with 401 when absent or invalid.
//! - [`auth::OptionalAuthUser`] -- Same, but a missing header yields
//!   `None` instead of a rejection (used by the like toggle).

pub mod auth;
