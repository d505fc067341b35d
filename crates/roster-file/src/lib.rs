//! roster-file - Flat-file backed user store.

mod codec;
mod id;
mod store;

pub use id::random_user_id;
pub use store::FileStore;
