//! Request handlers.

pub mod files;
pub mod users;
