use super::StateStore;
use crate::error::Result;
use crate::state::AppState;
use std::path::PathBuf;

/// Keeps the last saved state in memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    saved: Option<AppState>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `state`, as if saved by an earlier run.
    pub fn with_state(state: AppState) -> Self {
        Self {
            saved: Some(state),
            saves: 0,
        }
    }

    pub fn saved(&self) -> Option<&AppState> {
        self.saved.as_ref()
    }

    /// How many times `save` was called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl StateStore for InMemoryStore {
    fn load(&self) -> Result<Option<AppState>> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, state: &AppState) -> Result<()> {
        self.saved = Some(state.clone());
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> Option<PathBuf> {
        None
    }
}
