//! BlogSphere API server library.
//!
//! Exposes config, state, error handling, session auth and the router so
//! integration tests and the binary entrypoint build the exact same app.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod router;
pub mod routes;
pub mod state;
pub mod storage;
