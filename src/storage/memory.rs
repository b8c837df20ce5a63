//! In-memory application store.
//!
//! Same contract as the Postgres store, used by the HTTP tests to exercise
//! the boundary layer without a database. Ids are handed out sequentially
//! from 1 and `created_at` is stamped at insert time.

use crate::domain::application::{NewTutorApplication, TutorApplication};
use crate::storage::{ApplicationStore, StorageError};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

pub struct MemApplicationStore {
    inner: Mutex<MemInner>,
}

struct MemInner {
    next_id: i32,
    rows: Vec<TutorApplication>,
}

impl MemApplicationStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MemInner {
                next_id: 1,
                rows: Vec::new(),
            }),
        }
    }
}

impl Default for MemApplicationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApplicationStore for MemApplicationStore {
    async fn insert(
        &self,
        application: &NewTutorApplication,
    ) -> Result<TutorApplication, StorageError> {
        let mut inner = self.inner.lock().await;
        let stored = TutorApplication {
            id: inner.next_id,
            record: application.clone(),
            created_at: Utc::now(),
        };
        inner.next_id += 1;
        inner.rows.push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<TutorApplication>, StorageError> {
        let inner = self.inner.lock().await;
        let mut rows = inner.rows.clone();
        // Newest first; id breaks ties between same-timestamp inserts.
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<TutorApplication>, StorageError> {
        let inner = self.inner.lock().await;
        Ok(inner.rows.iter().find(|r| r.id == id).cloned())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
