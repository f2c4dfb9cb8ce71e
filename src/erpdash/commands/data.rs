use crate::action::Action;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::state::{AppState, CollectionKind};

/// Loads the demo data set, unless data is already present.
pub fn seed(state: &mut AppState) -> Result<CmdResult> {
    let outcome = state.apply(Action::InitializeData)?;
    let message = if outcome.changed() {
        CmdMessage::success(format!("Loaded demo data ({})", counts(state)))
    } else {
        CmdMessage::info("Data already present. Use `erpdash reset` to restore the demo set")
    };
    Ok(CmdResult::default()
        .with_outcome(outcome)
        .with_message(message))
}

/// Restores the demo data set, discarding every change. The session is kept.
pub fn reset(state: &mut AppState) -> Result<CmdResult> {
    let outcome = state.apply(Action::ResetData)?;
    Ok(CmdResult::default()
        .with_outcome(outcome)
        .with_message(CmdMessage::success(format!(
            "Demo data restored ({})",
            counts(state)
        ))))
}

fn counts(state: &AppState) -> String {
    [
        CollectionKind::Customers,
        CollectionKind::Invoices,
        CollectionKind::Products,
        CollectionKind::Servers,
    ]
    .iter()
    .map(|kind| format!("{} {}", state.collection(*kind).len(), kind))
    .collect::<Vec<_>>()
    .join(", ")
}
