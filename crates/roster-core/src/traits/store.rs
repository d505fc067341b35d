//! User store trait.

use async_trait::async_trait;

use crate::{NewUser, Page, Result, UserPatch, UserQuery};
use crate::user::User;

/// A store owning the persisted user collection.
///
/// Every mutation rewrites the whole collection. Implementations decide
/// how (or whether) to serialize concurrent writers; the collection is an
/// unordered bag, so callers must not rely on listing order.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Read and fully parse the persisted collection.
    async fn list_all(&self) -> Result<Vec<User>>;

    /// Filter the collection, count the matches, then apply the query's
    /// skip/take window.
    async fn find_all(&self, query: &UserQuery) -> Result<Page<User>>;

    /// Look up a single record by id.
    async fn find_by_id(&self, id: u32) -> Result<User>;

    /// Insert a record, assigning a generated id when the input carries
    /// none, and return the stored record.
    async fn insert(&self, new_user: NewUser) -> Result<User>;

    /// Shallow-merge the patch onto the record with the given id.
    async fn update(&self, id: u32, patch: UserPatch) -> Result<()>;

    /// Remove the record with the given id.
    async fn delete(&self, id: u32) -> Result<()>;
}
