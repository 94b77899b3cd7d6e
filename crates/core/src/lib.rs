//! Domain types shared by the BlogSphere store and API crates.
//!
//! Nothing in here performs I/O: documents, identifiers, errors and the
//! list query builder are plain values that the `db` and `api` crates act on.

pub mod document;
pub mod error;
pub mod listing;
pub mod types;
