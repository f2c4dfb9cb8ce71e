//! # Storage Layer
//!
//! The [`StateStore`] trait persists the whole [`AppState`] as one snapshot.
//! There is no per-record storage: the state is small, and the persisted form
//! mirrors what the dashboard holds in memory.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one JSON file in the data directory,
//!   `erp-storage.json`, written atomically (temp file + rename).
//! - [`memory::InMemoryStore`]: keeps the last saved snapshot in memory. Used
//!   by tests of the API and command layers.
//!
//! ## Snapshot Format
//!
//! ```text
//! {
//!   "state": { "currentUser": ..., "isAuthenticated": ..., "organization": ...,
//!              "users": [...], "customers": [...], ... },
//!   "version": 0
//! }
//! ```
//!
//! There is no migration. A snapshot with another version is still read as-is
//! and a warning is logged. Collections missing from the snapshot load empty.
//!
//! Stores never decide *when* to save. The API facade tracks whether the state
//! changed and calls [`StateStore::save`] from its `flush`.

use crate::error::Result;
use crate::state::AppState;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod fs;
pub mod memory;

pub const SNAPSHOT_VERSION: u32 = 0;

pub trait StateStore {
    /// Load the last saved state. `None` means nothing was saved yet.
    fn load(&self) -> Result<Option<AppState>>;

    fn save(&mut self, state: &AppState) -> Result<()>;

    /// Where the snapshot lives, for stores that have a location.
    fn location(&self) -> Option<PathBuf>;
}

/// The persisted envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: AppState,
    #[serde(default)]
    pub version: u32,
}

impl Snapshot {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            version: SNAPSHOT_VERSION,
        }
    }

    pub fn into_state(self) -> AppState {
        if self.version != SNAPSHOT_VERSION {
            log::warn!(
                "Snapshot version {} differs from {}; reading as-is",
                self.version,
                SNAPSHOT_VERSION
            );
        }
        self.state
    }
}
