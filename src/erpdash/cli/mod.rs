//! # CLI Layer
//!
//! This module is **one possible UI client** for erpdash, not the application
//! itself. Navigating to a page becomes `erpdash open <path>`, clicking a row
//! checkbox becomes `--select <id>`, and so on.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Reads the wall clock and sleeps
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `setup`: clap definitions and the grouped help screen
//! - `commands`: `run()` plus one `handle_*()` per subcommand
//! - `render`: `CmdResult` data into styled text, through `templates`
//! - `styles`: the named styles templates refer to

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
