//! Authentication extractors.
//!
//! - [`auth::SessionUser`] -- Verifies the `token` cookie and exposes the
//!   identity payload. Also used as a route layer for protected route groups.

pub mod auth;
