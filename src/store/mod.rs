//! Persistence contracts for accounts and tasks.
//!
//! Handlers only see [`CredentialStore`] and [`TaskStore`] trait objects held by
//! [`AppState`](crate::state::AppState). Two backends implement both traits:
//!
//! - [`PgStore`](postgres::PgStore): PostgreSQL through `sqlx`; task fields live in a
//!   `JSONB` column.
//! - [`MemoryStore`](memory::MemoryStore): process-local, used by tests and by
//!   `DATABASE_URL=memory`.
//!
//! Every operation is a single logical store call. Nothing spans two calls.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Task, TaskFields, User};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Accounts keyed by email.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Persists a new account.
    ///
    /// Fails with `AppError::Conflict` if `email` is already registered. The
    /// existence check and the insert are one atomic step.
    async fn create(&self, email: &str, password_hash: &str) -> Result<User, AppError>;
}

/// The global task collection.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Inserts `fields` as a new record and returns it with its assigned id.
    async fn insert(&self, fields: TaskFields) -> Result<Task, AppError>;

    /// Every record, in insertion order.
    async fn list(&self) -> Result<Vec<Task>, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<Task>, AppError>;

    /// Merges `fields` over the record's fields. `None` if no record has `id`.
    async fn update(&self, id: Uuid, fields: TaskFields) -> Result<Option<Task>, AppError>;

    /// Returns the number of records removed (0 or 1).
    async fn delete(&self, id: Uuid) -> Result<u64, AppError>;

    /// Removes every record whose id is in `ids`; returns how many were removed.
    async fn delete_many(&self, ids: &[Uuid]) -> Result<u64, AppError>;
}
