use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::nav::{filter_palette, header, palette_items, sidebar as visible_sections};
use crate::state::AppState;

/// The sidebar sections visible to the signed-in user.
pub fn sidebar(state: &AppState) -> Result<CmdResult> {
    let mut result = CmdResult {
        sidebar: visible_sections(state.current_user())
            .into_iter()
            .copied()
            .collect(),
        ..Default::default()
    };
    if state.is_authenticated() {
        result.header = Some(header(state));
    } else {
        result.add_message(CmdMessage::info(
            "Not signed in; showing sections open to everyone",
        ));
    }
    Ok(result)
}

/// Command palette entries matching `query`.
pub fn palette(state: &AppState, query: &str) -> Result<CmdResult> {
    let mut result = CmdResult {
        palette: filter_palette(palette_items(state), query),
        ..Default::default()
    };
    if result.palette.is_empty() {
        result.add_message(CmdMessage::info("No results found."));
    }
    Ok(result)
}
