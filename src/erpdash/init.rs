use crate::api::ErpApi;
use crate::config::ErpConfig;
use crate::error::{ErpError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::ffi::OsString;
use std::path::PathBuf;

pub const HOME_ENV: &str = "ERPDASH_HOME";

pub struct ErpContext {
    pub api: ErpApi<FileStore>,
    pub config: ErpConfig,
}

/// Picks the data directory: an explicit flag wins, then `ERPDASH_HOME`,
/// then the platform data directory.
pub fn resolve_data_dir(flag: Option<PathBuf>, env: Option<OsString>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = env.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "erpdash", "erpdash")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ErpError::Store("Could not determine a data directory".to_string()))
}

/// Opens the data directory. With `recover`, a snapshot that fails to load
/// is set aside in favor of an empty state instead of failing.
pub fn initialize(data_dir: Option<PathBuf>, recover: bool) -> Result<ErpContext> {
    let data_dir = resolve_data_dir(data_dir, std::env::var_os(HOME_ENV))?;
    log::debug!("Data directory: {}", data_dir.display());

    let config = ErpConfig::load(&data_dir).unwrap_or_else(|e| {
        log::warn!("Ignoring unreadable config: {}", e);
        ErpConfig::default()
    });
    let store = FileStore::new(data_dir.clone());
    let api = match ErpApi::open(store.clone(), data_dir.clone()) {
        Ok(api) => api,
        Err(e) if recover => {
            log::warn!("Discarding saved state: {}", e);
            ErpApi::fresh(store, data_dir)
        }
        Err(e) => return Err(e),
    };

    Ok(ErpContext { api, config })
}
