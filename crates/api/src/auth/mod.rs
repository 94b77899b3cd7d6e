//! Session authentication primitives.
//!
//! - [`jwt`] -- session token issuing and verification.
//! - [`cookie`] -- the `token` cookie's `Set-Cookie` values and lookup.

pub mod cookie;
pub mod jwt;
