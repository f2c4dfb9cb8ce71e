use super::{Snapshot, StateStore};
use crate::error::{ErpError, Result};
use crate::state::AppState;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const STORAGE_FILENAME: &str = "erp-storage.json";

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn storage_path(&self) -> PathBuf {
        self.root.join(STORAGE_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ErpError::Io)?;
        }
        Ok(())
    }
}

impl StateStore for FileStore {
    fn load(&self) -> Result<Option<AppState>> {
        let path = self.storage_path();
        if !path.exists() {
            log::debug!("No snapshot at {}", path.display());
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(ErpError::Io)?;
        let snapshot: Snapshot = serde_json::from_str(&content).map_err(|e| {
            ErpError::Store(format!(
                "Could not read {}: {}. Run `erpdash reset` to start over",
                path.display(),
                e
            ))
        })?;
        log::debug!("Loaded snapshot from {}", path.display());
        Ok(Some(snapshot.into_state()))
    }

    fn save(&mut self, state: &AppState) -> Result<()> {
        self.ensure_dir()?;

        let content = serde_json::to_string_pretty(&Snapshot::new(state.clone()))
            .map_err(ErpError::Serialization)?;

        let tmp_file = self.root.join(format!(".erp-storage-{}.tmp", Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_file, content)
            .and_then(|_| fs::rename(&tmp_file, self.storage_path()))
        {
            let _ = fs::remove_file(&tmp_file);
            return Err(ErpError::Io(e));
        }

        log::debug!("Saved snapshot to {}", self.storage_path().display());
        Ok(())
    }

    fn location(&self) -> Option<PathBuf> {
        Some(self.storage_path())
    }
}
