pub mod blogs;
pub mod session;
pub mod wishes;
