use std::sync::Arc;

use super::KeyValueStore;
use crate::domain::UsageState;
use crate::error::{AppError, Result};

/// Storage key of the usage counter.
pub const USAGE_KEY: &str = "seo_audit_count";

/// Loads and write-through persists the caller's `UsageState`.
#[derive(Clone)]
pub struct UsageStore {
    backend: Arc<dyn KeyValueStore>,
}

impl UsageStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Reads the persisted state. Absent, unreadable or unparsable values
    /// yield `Free(0)`.
    pub fn load(&self) -> UsageState {
        match self.backend.get(USAGE_KEY) {
            Ok(raw) => {
                let state = UsageState::decode(raw.as_deref());
                tracing::debug!("Loaded usage state {:?}", state);
                state
            }
            Err(e) => {
                tracing::warn!("Failed to read usage state, starting fresh: {}", e);
                UsageState::default()
            }
        }
    }

    /// Counts one completed free analysis. Fails with `InvalidState` for a
    /// pro caller.
    pub fn record_free_use(&self, current: UsageState) -> Result<UsageState> {
        let next = current.after_free_use().ok_or_else(|| {
            AppError::invalid_state("cannot record free usage for a pro caller")
        })?;
        self.persist(next)?;
        Ok(next)
    }

    /// Marks the caller as pro. Calling it again is observably a no-op.
    pub fn unlock_pro(&self) -> Result<UsageState> {
        self.persist(UsageState::Pro)?;
        Ok(UsageState::Pro)
    }

    fn persist(&self, state: UsageState) -> Result<()> {
        self.backend.set(USAGE_KEY, &state.encode())?;
        Ok(())
    }
}
