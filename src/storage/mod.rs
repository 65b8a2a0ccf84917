//! Local persistence: a tiny key-value capability and the usage store on top.

mod file_store;
mod memory_store;
mod usage_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use usage_store::{UsageStore, USAGE_KEY};

use crate::error::StorageError;

/// Key-value medium scoped to the local user profile.
///
/// Writes are synchronous: once `set` returns, any other reader of the same
/// medium observes the new value.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
