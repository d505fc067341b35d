//! roster-core - Core user directory types and traits.

pub mod error;
pub mod page;
pub mod query;
pub mod traits;
pub mod user;

pub use error::Error;
pub use page::Page;
pub use query::UserQuery;
pub use traits::{ProfileSource, UserStore};
pub use user::{NewUser, User, UserPatch};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
