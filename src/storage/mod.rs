//! Durable storage for tutor applications.
//!
//! The store is the only component allowed to assign `id` and `created_at`.
//! Handlers talk to it through the [`ApplicationStore`] trait so tests can
//! swap the Postgres implementation for the in-memory one.

pub mod memory;
pub mod postgres;

use crate::domain::application::{NewTutorApplication, TutorApplication};
use async_trait::async_trait;
use thiserror::Error;

/// Storage faults. The wrapped driver detail is for server-side logs only;
/// the boundary layer translates it into a generic client message.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("unrecognized {column} value in stored row: {value}")]
    InvalidRow { column: &'static str, value: String },
}

#[async_trait]
pub trait ApplicationStore: Send + Sync {
    /// Persists one application atomically and returns the stored record
    /// with its server-generated `id` and `created_at`.
    async fn insert(
        &self,
        application: &NewTutorApplication,
    ) -> Result<TutorApplication, StorageError>;

    /// All persisted applications, newest first.
    async fn list_all(&self) -> Result<Vec<TutorApplication>, StorageError>;

    /// Point lookup; a missing row is an absent result, not an error.
    async fn get_by_id(&self, id: i32) -> Result<Option<TutorApplication>, StorageError>;

    /// Health probe against the underlying store.
    async fn ping(&self) -> Result<(), StorageError>;
}

pub use memory::MemApplicationStore;
pub use postgres::{connect_pool, PgApplicationStore};
