//! Local persistence.
//!
//! Everything is stored as JSON strings under fixed keys in a key-value
//! store, mirroring the browser storage the site uses. Storage is a
//! best-effort cache: read problems degrade to defaults instead of failing.

mod memory;
mod preferences;
mod reservations;
mod sqlite;

pub use memory::*;
pub use preferences::*;
pub use reservations::*;
pub use sqlite::*;

use async_trait::async_trait;

use crate::errors::AppError;

/// Minimal string key-value store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, or `None` if the key was never written.
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}
