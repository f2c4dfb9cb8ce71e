//! # Command Layer
//!
//! One module per user operation. A command takes the [`AppState`] it works
//! on plus plain arguments, performs the operation through
//! [`AppState::apply`](crate::state::AppState::apply) or the view builders,
//! and returns a [`CmdResult`]: structured data for the client to present and
//! [`CmdMessage`]s describing what happened.
//!
//! Commands never print and never persist. `CmdResult::changed` tells the API
//! facade that the state needs flushing.
//!
//! [`AppState`]: crate::state::AppState

use crate::action::Outcome;
use crate::config::ErpConfig;
use crate::error::{ErpError, Result};
use crate::model::Notification;
use crate::nav::{HeaderView, NavSection, PaletteItem};
use crate::state::AppState;
use crate::table::{SortDirection, TableRow, TableSnapshot, TableView};
use serde_json::Value;
use std::path::PathBuf;

pub mod config;
pub mod crud;
pub mod data;
pub mod list;
pub mod nav;
pub mod notifications;
pub mod page;
pub mod paths;
pub mod session;
pub mod show;

pub use page::PageView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Whether the state was modified and should be flushed.
    pub changed: bool,
    pub records: Vec<Value>,
    pub table: Option<TableSnapshot>,
    pub page: Option<PageView>,
    pub sidebar: Vec<NavSection>,
    pub palette: Vec<PaletteItem>,
    pub notifications: Vec<Notification>,
    pub header: Option<HeaderView>,
    pub config: Option<ErpConfig>,
    pub paths: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.changed |= outcome.changed();
        self
    }

    pub fn with_records(mut self, records: Vec<Value>) -> Self {
        self.records = records;
        self
    }

    pub fn with_table(mut self, table: TableSnapshot) -> Self {
        self.table = Some(table);
        self
    }

    pub fn with_page(mut self, page: PageView) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_header(mut self, header: HeaderView) -> Self {
        self.header = Some(header);
        self
    }

    pub fn with_config(mut self, config: ErpConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

/// Search, paging, sorting and selection requested for a list.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub search: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    /// Column key; a leading `-` sorts descending.
    pub sort: Option<String>,
    pub select: Vec<String>,
    pub select_all: bool,
}

impl ListOptions {
    /// Drives `view` the way a user would: page size, search, sort, page,
    /// then selection. Search and page size both reset to page 1, so the page
    /// is applied after them.
    pub fn apply<T: TableRow>(&self, view: &mut TableView<T>) {
        if let Some(size) = self.page_size {
            view.set_page_size(size);
        }
        if let Some(query) = &self.search {
            view.set_search(query.clone());
        }
        if let Some(sort) = &self.sort {
            match sort.strip_prefix('-') {
                Some(key) => view.sort_by_direction(key, SortDirection::Desc),
                None => view.sort_by_direction(sort, SortDirection::Asc),
            }
        }
        if let Some(page) = self.page {
            view.go_to(page);
        }
        for id in &self.select {
            view.set_row_selected(id, true);
        }
        if self.select_all {
            view.set_all_selected(true);
        }
    }

    pub fn wants_selection(&self) -> bool {
        !self.select.is_empty() || self.select_all
    }
}

/// Protected operations need a session; reading data seeds it on first use.
///
/// Returns whether seeding happened.
pub(crate) fn bootstrap(state: &mut AppState) -> Result<bool> {
    if !state.is_authenticated() {
        return Err(ErpError::NotAuthenticated);
    }
    Ok(state.initialize_data())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::state::AppState;

    /// A signed-in, seeded state.
    pub fn signed_in(email: &str) -> AppState {
        let mut state = AppState::new();
        assert!(state.login(email, crate::demo::DEMO_PASSWORD));
        state
    }

    pub fn admin() -> AppState {
        signed_in("admin@acme.com")
    }
}
