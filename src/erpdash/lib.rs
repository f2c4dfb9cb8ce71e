//! # erpdash Architecture
//!
//! erpdash is an **ERP dashboard library** over a self-seeding demo data set:
//! customers, invoices, products, expenses, servers and the rest of a small
//! company's records. The terminal client is one UI over it; nothing in the
//! library assumes a terminal.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders templates, handles exit codes  │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the state and its store, tracks a dirty flag        │
//! │  - Normalizes inputs (JSON text → records and patches)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per user operation, returns CmdResult         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  State (state.rs, action.rs) and Views (views/, nav.rs)     │
//! │  - AppState::apply(Action) is the only way to mutate        │
//! │  - Views are pure computations over the state               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StateStore trait, one JSON snapshot                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain arguments and returns plain types.
//! It never writes to stdout/stderr, never exits the process and never reads
//! the clock where a caller could pass the date instead.
//!
//! ## Session Bootstrap
//!
//! Signing in, or opening any protected page while signed in, seeds the
//! collections from [`demo`] when they are empty. Data is never re-seeded over
//! existing records; `reset` restores the demo set explicitly.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): most of the behavior tests live here.
//! 2. **State, table and views**: unit tests next to the code.
//! 3. **API** (`api.rs`): dispatch and dirty tracking, on an in-memory store.
//! 4. **CLI** (`tests/`): end-to-end runs of the binary on a temp directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`state`], [`action`]: The application state and its actions
//! - [`collection`]: Id-keyed record collections
//! - [`model`]: Domain records
//! - [`demo`]: The demo data set
//! - [`table`]: Searchable, paginated, selectable table view
//! - [`views`]: Page view models (dashboard, expenses, servers, ...)
//! - [`nav`]: Routes, sidebar, command palette and header
//! - [`status`]: Status badge variants
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and rendering for the binary (not part of the lib API)

pub mod action;
pub mod api;
pub mod collection;
pub mod commands;
pub mod config;
pub mod demo;
pub mod error;
pub mod init;
pub mod model;
pub mod nav;
pub mod state;
pub mod status;
pub mod store;
pub mod table;
pub mod views;
