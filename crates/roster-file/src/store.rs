//! Flat-file storage for the user collection.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fs2::FileExt;
use tracing::{debug, instrument};

use roster_core::error::{Error, StorageReadError, StorageWriteError};
use roster_core::page::paginate;
use roster_core::user::User;
use roster_core::{NewUser, Page, Result, UserPatch, UserQuery, UserStore};

use crate::codec;
use crate::id::random_user_id;

fn read_err(path: &Path, source: std::io::Error) -> Error {
    Error::StorageRead(StorageReadError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn write_err(path: &Path, source: std::io::Error) -> Error {
    Error::StorageWrite(StorageWriteError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Flat-file backed user store.
///
/// The whole collection lives in one delimited text file. Every mutation
/// re-reads the file, modifies the collection in memory, and rewrites it
/// through a temp file and rename, so readers never observe a partial
/// write. An exclusive lock on a sidecar file serializes mutations within
/// and across processes; plain reads take no lock.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open a store backed by the given file, creating it with a bare
    /// header row (and any missing parent directories) when absent.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        store.ensure_file()?;
        Ok(store)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sidecar lock file path.
    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn ensure_file(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| write_err(&self.path, e))?;
        }
        if !self.path.exists() {
            self.persist(&[])?;
            debug!(path = %self.path.display(), "Seeded empty collection");
        }
        Ok(())
    }

    /// Read and parse the whole collection.
    fn load_all(&self) -> Result<Vec<User>> {
        let contents = fs::read_to_string(&self.path).map_err(|e| read_err(&self.path, e))?;
        Ok(codec::parse_collection(&contents)?)
    }

    /// Rewrite the whole collection. The temp-file rename keeps the switch
    /// atomic from a reader's perspective.
    fn persist(&self, users: &[User]) -> Result<()> {
        let contents = codec::serialize_collection(users);
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, &contents).map_err(|e| write_err(&temp_path, e))?;
        fs::rename(&temp_path, &self.path).map_err(|e| write_err(&self.path, e))?;
        Ok(())
    }

    /// Take the mutation lock; held until the returned handle is unlocked
    /// or dropped.
    fn acquire_mutation_lock(&self) -> Result<std::fs::File> {
        let lock_path = self.lock_path();
        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| write_err(&lock_path, e))?;

        lock_file.lock_exclusive().map_err(|e| write_err(&lock_path, e))?;

        Ok(lock_file)
    }

    fn release_mutation_lock(&self, lock_file: std::fs::File) -> Result<()> {
        lock_file.unlock().map_err(|e| write_err(&self.lock_path(), e))
    }
}

#[async_trait]
impl UserStore for FileStore {
    async fn list_all(&self) -> Result<Vec<User>> {
        self.load_all()
    }

    #[instrument(skip(self, query))]
    async fn find_all(&self, query: &UserQuery) -> Result<Page<User>> {
        let users = self.load_all()?;

        let matched: Vec<User> = users.into_iter().filter(|u| query.matches(u)).collect();
        let count = matched.len();
        let result = paginate(matched, query.skip(), query.take());

        debug!(count, returned = result.len(), "Listed users");

        Ok(Page { result, count })
    }

    async fn find_by_id(&self, id: u32) -> Result<User> {
        self.load_all()?
            .into_iter()
            .find(|u| u.id == id)
            .ok_or(Error::NotFound { id })
    }

    #[instrument(skip(self, new_user))]
    async fn insert(&self, new_user: NewUser) -> Result<User> {
        let lock_file = self.acquire_mutation_lock()?;

        // Zero counts as unset, so an explicit 0 still gets a generated id.
        let id = match new_user.id {
            Some(id) if id != 0 => id,
            _ => random_user_id(),
        };
        let user = new_user.into_user(id);

        let mut users = self.load_all()?;
        users.push(user.clone());
        self.persist(&users)?;

        self.release_mutation_lock(lock_file)?;
        debug!(id = user.id, "Created user");

        Ok(user)
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: u32, patch: UserPatch) -> Result<()> {
        let lock_file = self.acquire_mutation_lock()?;

        let mut users = self.load_all()?;
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Err(Error::NotFound { id });
        };
        patch.apply(user);
        self.persist(&users)?;

        self.release_mutation_lock(lock_file)?;
        debug!(id, "Updated user");

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: u32) -> Result<()> {
        let lock_file = self.acquire_mutation_lock()?;

        let mut users = self.load_all()?;
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Err(Error::NotFound { id });
        }
        self.persist(&users)?;

        self.release_mutation_lock(lock_file)?;
        debug!(id, "Deleted user");

        Ok(())
    }
}
