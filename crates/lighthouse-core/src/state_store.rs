//! Persistent state store: one serialized `AppState` blob under a single fixed
//! key in a Sled DB. Loaded once at startup, fully rewritten after every state
//! transition (last-writer-wins, no versioning, no schema migration).

use crate::shared::AppState;
use std::path::Path;
use thiserror::Error;

const STATE_KEY: &str = "abyss_lighthouse_state";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("state store I/O: {0}")]
    Sled(#[from] sled::Error),
    #[error("state serialization: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub struct StateStore {
    db: sled::Db,
}

impl StateStore {
    /// Opens or creates the Sled database at the given path.
    pub fn open_path<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    /// Reads the persisted blob. A missing key or an unreadable blob both yield
    /// `None`; the caller falls back to the seed state. Never surfaced to the
    /// operator.
    pub fn load(&self) -> Option<AppState> {
        let raw = match self.db.get(STATE_KEY.as_bytes()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("state load failed, falling back to seed: {}", e);
                return None;
            }
        };
        match serde_json::from_slice(&raw) {
            Ok(state) => Some(state),
            Err(e) => {
                tracing::warn!("persisted state unreadable, falling back to seed: {}", e);
                None
            }
        }
    }

    /// Serializes the full state and overwrites the prior blob, then flushes.
    pub fn save(&self, state: &AppState) -> Result<(), StoreError> {
        let blob = serde_json::to_vec(state)?;
        self.db.insert(STATE_KEY.as_bytes(), blob)?;
        self.db.flush()?;
        Ok(())
    }

    /// Removes the persisted blob. Destructive and irreversible; the terminal
    /// requires interactive confirmation before calling this.
    pub fn purge(&self) -> Result<(), StoreError> {
        self.db.remove(STATE_KEY.as_bytes())?;
        self.db.flush()?;
        Ok(())
    }

    /// Raw write under the state key, bypassing serialization. Test hook for
    /// simulating a corrupt or stale blob.
    #[doc(hidden)]
    pub fn put_raw(&self, blob: &[u8]) -> Result<(), StoreError> {
        self.db.insert(STATE_KEY.as_bytes(), blob)?;
        self.db.flush()?;
        Ok(())
    }
}
