//! Collection-specific repositories.
//!
//! Each repository is a zero-sized struct whose associated async functions
//! take the store handle explicitly, so the caller owns the handle's
//! lifetime.

pub mod blog_repo;
pub mod wish_repo;

pub use blog_repo::BlogRepo;
pub use wish_repo::WishRepo;
