//! Random profile source trait.

use async_trait::async_trait;

use crate::{NewUser, Result};

/// An external source of randomly generated person profiles.
///
/// Used to pre-fill the create form; the returned input carries no id, so
/// inserting it later goes through normal id assignment.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetch one random profile mapped into creation input.
    async fn fetch_random(&self) -> Result<NewUser>;
}
