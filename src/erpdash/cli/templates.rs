//! Templates for terminal output, kept as stand-alone files and included here
//! as string constants.
//!
//! Templates are minijinja with explicit line breaks: every tag trims the
//! whitespace around it (`{%- -%}`) and lines end with `{{ "\n" }}`. Layout
//! (column widths, truncation, padding) is computed in `render.rs`; templates
//! only pick styles by name.

pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const LINES_TEMPLATE: &str = include_str!("templates/lines.tmp");
pub const TABLE_TEMPLATE: &str = include_str!("templates/table.tmp");
pub const PAGE_TEMPLATE: &str = include_str!("templates/page.tmp");
