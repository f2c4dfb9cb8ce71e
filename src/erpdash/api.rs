//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for UI clients.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the [`AppState`] and the [`StateStore`] it came from
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g., parsing JSON text into records and patches)
//! - **Tracks changes**: any command reporting `changed` marks the state
//!   dirty, and [`ErpApi::flush`] writes it back once
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Presentation**: Returns `CmdResult` data structures, not strings
//!
//! ## Persistence
//!
//! Mutations never touch storage on their own. A client runs one user
//! operation, then calls `flush()`; nothing is written when nothing changed.
//!
//! ## Generic Over StateStore
//!
//! - Production: `ErpApi<FileStore>`
//! - Testing: `ErpApi<InMemoryStore>`

use crate::commands::{self, CmdResult, ListOptions};
use crate::error::{ErpError, Result};
use crate::state::{AppState, CollectionKind};
use crate::store::StateStore;
use chrono::NaiveDate;
use serde_json::Value;
use std::path::PathBuf;

pub struct ErpApi<S: StateStore> {
    state: AppState,
    store: S,
    data_dir: PathBuf,
    dirty: bool,
}

impl<S: StateStore> ErpApi<S> {
    /// Rehydrates the last saved state, or starts empty.
    pub fn open(store: S, data_dir: PathBuf) -> Result<Self> {
        let state = store.load()?.unwrap_or_default();
        Ok(Self {
            state,
            store,
            data_dir,
            dirty: false,
        })
    }

    /// Starts from an empty state without reading the store, for recovering
    /// from a snapshot that no longer parses. The next flush overwrites it.
    pub fn fresh(store: S, data_dir: PathBuf) -> Self {
        Self {
            state: AppState::default(),
            store,
            data_dir,
            dirty: false,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Saves the state if anything changed since the last flush.
    /// Returns whether a save happened.
    pub fn flush(&mut self) -> Result<bool> {
        if !self.dirty {
            return Ok(false);
        }
        self.store.save(&self.state)?;
        self.dirty = false;
        Ok(true)
    }

    fn track(&mut self, result: Result<CmdResult>) -> Result<CmdResult> {
        if let Ok(res) = &result {
            if res.changed {
                self.dirty = true;
            }
        }
        result
    }

    // --- Session ---

    pub fn login(&mut self, email: &str, password: &str) -> Result<CmdResult> {
        let result = commands::session::login(&mut self.state, email, password);
        self.track(result)
    }

    pub fn logout(&mut self) -> Result<CmdResult> {
        let result = commands::session::logout(&mut self.state);
        self.track(result)
    }

    pub fn whoami(&self) -> Result<CmdResult> {
        commands::session::whoami(&self.state)
    }

    // --- Data ---

    pub fn seed(&mut self) -> Result<CmdResult> {
        let result = commands::data::seed(&mut self.state);
        self.track(result)
    }

    pub fn reset(&mut self) -> Result<CmdResult> {
        let result = commands::data::reset(&mut self.state);
        self.track(result)
    }

    // --- Pages ---

    pub fn open_page(
        &mut self,
        path: &str,
        list: &ListOptions,
        today: NaiveDate,
    ) -> Result<CmdResult> {
        let result = commands::page::run(&mut self.state, path, list, today);
        self.track(result)
    }

    pub fn sidebar(&self) -> Result<CmdResult> {
        commands::nav::sidebar(&self.state)
    }

    pub fn palette(&self, query: &str) -> Result<CmdResult> {
        commands::nav::palette(&self.state, query)
    }

    // --- Collections ---

    pub fn list(&mut self, kind: CollectionKind, options: &ListOptions) -> Result<CmdResult> {
        let result = commands::list::run(&mut self.state, kind, options);
        self.track(result)
    }

    pub fn show<I: AsRef<str>>(&mut self, kind: CollectionKind, ids: &[I]) -> Result<CmdResult> {
        let result = commands::show::run(&mut self.state, kind, ids);
        self.track(result)
    }

    pub fn add(&mut self, kind: CollectionKind, record: &str) -> Result<CmdResult> {
        let record = parse_json(record)?;
        let result = commands::crud::add(&mut self.state, kind, record);
        self.track(result)
    }

    pub fn update(&mut self, kind: CollectionKind, id: &str, patch: &str) -> Result<CmdResult> {
        let patch = parse_json(patch)?;
        let result = commands::crud::update(&mut self.state, kind, id, patch);
        self.track(result)
    }

    pub fn delete<I: AsRef<str>>(&mut self, kind: CollectionKind, ids: &[I]) -> Result<CmdResult> {
        let mut combined = CmdResult::default();
        for id in ids {
            let result = commands::crud::delete(&mut self.state, kind, id.as_ref());
            let res = self.track(result)?;
            combined.changed |= res.changed;
            combined.messages.extend(res.messages);
        }
        Ok(combined)
    }

    // --- Notifications ---

    pub fn notifications(&mut self, unread_only: bool) -> Result<CmdResult> {
        let result = commands::notifications::list(&mut self.state, unread_only);
        self.track(result)
    }

    pub fn mark_read(&mut self, id: &str) -> Result<CmdResult> {
        let result = commands::notifications::mark_read(&mut self.state, id);
        self.track(result)
    }

    pub fn mark_all_read(&mut self) -> Result<CmdResult> {
        let result = commands::notifications::mark_all_read(&mut self.state);
        self.track(result)
    }

    // --- Local ---

    pub fn config(&self, action: commands::config::ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn paths(&self) -> Result<CmdResult> {
        commands::paths::run(&self.data_dir, self.store.location())
    }
}

fn parse_json(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|e| ErpError::Api(format!("Invalid JSON: {}", e)))
}
