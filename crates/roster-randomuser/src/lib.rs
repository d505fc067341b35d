//! roster-randomuser - HTTP client for the external random-profile API.

mod client;

pub use client::{DEFAULT_BASE_URL, RandomUserClient};
