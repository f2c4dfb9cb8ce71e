use crate::action::Action;
use crate::commands::{bootstrap, CmdMessage, CmdResult};
use crate::error::Result;
use crate::nav::header;
use crate::state::AppState;

pub fn list(state: &mut AppState, unread_only: bool) -> Result<CmdResult> {
    let seeded = bootstrap(state)?;
    let notifications = state
        .data
        .notifications
        .iter()
        .filter(|n| !unread_only || !n.read)
        .cloned()
        .collect();

    let mut result = CmdResult::default().with_header(header(state));
    result.changed = seeded;
    result.notifications = notifications;
    if result.notifications.is_empty() {
        result.add_message(CmdMessage::info(if unread_only {
            "No unread notifications"
        } else {
            "No notifications"
        }));
    }
    Ok(result)
}

pub fn mark_read(state: &mut AppState, id: &str) -> Result<CmdResult> {
    let seeded = bootstrap(state)?;
    let exists = state.data.notifications.contains(id);
    let outcome = state.apply(Action::MarkNotificationRead { id: id.to_string() })?;

    let mut result = CmdResult::default()
        .with_outcome(outcome)
        .with_header(header(state));
    result.changed |= seeded;
    result.add_message(match (exists, outcome.changed()) {
        (false, _) => CmdMessage::warning(format!("No notification with id {}", id)),
        (true, false) => CmdMessage::info(format!("Notification {} was already read", id)),
        (true, true) => CmdMessage::success(format!("Marked {} as read", id)),
    });
    Ok(result)
}

pub fn mark_all_read(state: &mut AppState) -> Result<CmdResult> {
    let seeded = bootstrap(state)?;
    let unread = state.unread_notifications();
    let outcome = state.apply(Action::MarkAllNotificationsRead)?;

    let mut result = CmdResult::default()
        .with_outcome(outcome)
        .with_header(header(state));
    result.changed |= seeded;
    result.add_message(if outcome.changed() {
        CmdMessage::success(format!("Marked {} notifications as read", unread))
    } else {
        CmdMessage::info("No unread notifications")
    });
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{fixtures, MessageLevel};

    #[test]
    fn lists_unread_first_class() {
        let mut state = fixtures::admin();
        assert_eq!(list(&mut state, false).unwrap().notifications.len(), 5);

        let unread = list(&mut state, true).unwrap();
        assert_eq!(unread.notifications.len(), 3);
        assert_eq!(unread.header.unwrap().unread_notifications, 3);
    }

    #[test]
    fn mark_one_then_again() {
        let mut state = fixtures::admin();
        let res = mark_read(&mut state, "notif-1").unwrap();
        assert!(res.changed);
        assert_eq!(res.header.unwrap().unread_notifications, 2);

        let again = mark_read(&mut state, "notif-1").unwrap();
        assert!(!again.changed);
        assert_eq!(again.messages[0].level, MessageLevel::Info);

        let missing = mark_read(&mut state, "notif-99").unwrap();
        assert_eq!(missing.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn mark_all() {
        let mut state = fixtures::admin();
        let res = mark_all_read(&mut state).unwrap();
        assert!(res.changed);
        assert_eq!(state.unread_notifications(), 0);
        assert!(res.messages[0].content.contains('3'));

        assert!(!mark_all_read(&mut state).unwrap().changed);
    }
}
