//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT access-token generation and validation.
//!
//! Token issuance endpoints are deliberately absent: access tokens are
//! minted by an external identity service sharing `JWT_SECRET`. This
//! crate only validates them.

pub mod jwt;
pub mod password;
