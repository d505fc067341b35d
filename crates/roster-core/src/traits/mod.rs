//! Trait seams for storage and external collaborators.

mod profile;
mod store;

pub use profile::ProfileSource;
pub use store::UserStore;
