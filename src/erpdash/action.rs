//! # Actions
//!
//! Every state change a UI can request is an [`Action`] value, applied with
//! [`AppState::apply`]. That single entry point makes each operation
//! inspectable and testable, and lets the API layer decide when to persist:
//! it only needs to look at the returned [`Outcome`].
//!
//! Outcomes make the quiet cases explicit:
//!
//! - `Applied`: the state changed.
//! - `Unchanged`: a valid request that matched nothing (unknown id, seed gate
//!   already closed, notification already read).
//! - `Rejected`: credentials did not match.
//!
//! Structural problems (an unsupported mutation, a patch that does not fit the
//! record) are errors, not outcomes.

use crate::error::{ErpError, Result};
use crate::model::{AuditLog, NewAuditLog, Notification};
use crate::state::{AppState, CollectionKind, Mutation};
use chrono::Utc;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Login { email: String, password: String },
    Logout,
    InitializeData,
    ResetData,
    Add { kind: CollectionKind, record: Value },
    Update { kind: CollectionKind, id: String, patch: Value },
    Delete { kind: CollectionKind, id: String },
    MarkNotificationRead { id: String },
    MarkAllNotificationsRead,
    AddAuditLog(NewAuditLog),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Unchanged,
    Rejected,
}

impl Outcome {
    pub fn changed(&self) -> bool {
        *self == Outcome::Applied
    }

    fn from_changed(changed: bool) -> Self {
        if changed {
            Outcome::Applied
        } else {
            Outcome::Unchanged
        }
    }
}

impl AppState {
    pub fn apply(&mut self, action: Action) -> Result<Outcome> {
        let outcome = match action {
            Action::Login { email, password } => {
                if self.login(&email, &password) {
                    Outcome::Applied
                } else {
                    Outcome::Rejected
                }
            }
            Action::Logout => {
                let was_signed_in = self.session != Default::default();
                self.logout();
                Outcome::from_changed(was_signed_in)
            }
            Action::InitializeData => Outcome::from_changed(self.initialize_data()),
            Action::ResetData => {
                self.reset_data();
                Outcome::Applied
            }
            Action::Add { kind, record } => {
                ensure_supported(kind, Mutation::Add)?;
                let collection = self.collection_mut(kind);
                if kind.prepends() {
                    collection.prepend_value(record)?;
                } else {
                    collection.add_value(record)?;
                }
                Outcome::Applied
            }
            Action::Update { kind, id, patch } => {
                ensure_supported(kind, Mutation::Update)?;
                Outcome::from_changed(self.collection_mut(kind).update_value(&id, &patch)?)
            }
            Action::Delete { kind, id } => {
                ensure_supported(kind, Mutation::Delete)?;
                Outcome::from_changed(self.collection_mut(kind).delete_id(&id))
            }
            Action::MarkNotificationRead { id } => {
                let mut changed = false;
                self.of_mut::<Notification>().update_with(&id, |n| {
                    changed |= !n.read;
                    n.read = true;
                });
                Outcome::from_changed(changed)
            }
            Action::MarkAllNotificationsRead => {
                let marked = self.of_mut::<Notification>().update_all(|n| {
                    let was_unread = !n.read;
                    n.read = true;
                    was_unread
                });
                Outcome::from_changed(marked > 0)
            }
            Action::AddAuditLog(entry) => {
                let log: AuditLog = entry.stamp(uuid::Uuid::new_v4().to_string(), Utc::now());
                self.of_mut::<AuditLog>().prepend(log);
                Outcome::Applied
            }
        };
        log::debug!("Action outcome: {:?}", outcome);
        Ok(outcome)
    }
}

fn ensure_supported(kind: CollectionKind, mutation: Mutation) -> Result<()> {
    if kind.supports(mutation) {
        Ok(())
    } else {
        Err(ErpError::Unsupported {
            kind,
            operation: mutation.as_str(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Customer;
    use serde_json::json;

    fn seeded() -> AppState {
        let mut state = AppState::new();
        state.apply(Action::InitializeData).unwrap();
        state
    }

    fn new_customer(id: &str) -> Value {
        json!({
            "id": id, "name": "Zoe Park", "email": "zoe@example.com",
            "status": "active", "createdAt": "2024-02-21T10:00:00Z", "totalSpent": 0.0
        })
    }

    #[test]
    fn login_outcomes() {
        let mut state = AppState::new();
        let bad = state
            .apply(Action::Login {
                email: "admin@acme.com".into(),
                password: "nope".into(),
            })
            .unwrap();
        assert_eq!(bad, Outcome::Rejected);

        let good = state
            .apply(Action::Login {
                email: "admin@acme.com".into(),
                password: "demo123".into(),
            })
            .unwrap();
        assert_eq!(good, Outcome::Applied);
        assert!(state.is_authenticated());
    }

    #[test]
    fn logout_when_signed_out_is_unchanged() {
        let mut state = AppState::new();
        assert_eq!(state.apply(Action::Logout).unwrap(), Outcome::Unchanged);
    }

    #[test]
    fn initialize_twice_applies_once() {
        let mut state = AppState::new();
        assert_eq!(state.apply(Action::InitializeData).unwrap(), Outcome::Applied);
        assert_eq!(
            state.apply(Action::InitializeData).unwrap(),
            Outcome::Unchanged
        );
    }

    #[test]
    fn add_appends_customer() {
        let mut state = seeded();
        let before = state.of::<Customer>().len();
        let outcome = state
            .apply(Action::Add {
                kind: CollectionKind::Customers,
                record: new_customer("cust-new"),
            })
            .unwrap();

        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(state.of::<Customer>().len(), before + 1);
        assert_eq!(
            state.of::<Customer>().as_slice().last().map(|c| c.id.as_str()),
            Some("cust-new")
        );
    }

    #[test]
    fn add_notification_prepends() {
        let mut state = seeded();
        state
            .apply(Action::Add {
                kind: CollectionKind::Notifications,
                record: json!({
                    "id": "notif-new", "type": "info", "module": "erp",
                    "title": "Hello", "message": "World", "read": false,
                    "createdAt": "2024-02-21T10:00:00Z"
                }),
            })
            .unwrap();
        assert_eq!(
            state.of::<Notification>().as_slice()[0].id,
            "notif-new".to_string()
        );
    }

    #[test]
    fn update_unknown_id_is_unchanged() {
        let mut state = seeded();
        let before = state.clone();
        let outcome = state
            .apply(Action::Update {
                kind: CollectionKind::Customers,
                id: "ghost".into(),
                patch: json!({"name": "Nobody"}),
            })
            .unwrap();

        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(state, before);
    }

    #[test]
    fn delete_present_then_absent() {
        let mut state = seeded();
        let before = state.of::<Customer>().len();
        let delete = || Action::Delete {
            kind: CollectionKind::Customers,
            id: "cust-1".into(),
        };

        assert_eq!(state.apply(delete()).unwrap(), Outcome::Applied);
        assert_eq!(state.of::<Customer>().len(), before - 1);
        assert_eq!(state.apply(delete()).unwrap(), Outcome::Unchanged);
        assert_eq!(state.of::<Customer>().len(), before - 1);
    }

    #[test]
    fn unsupported_mutations_are_errors() {
        let mut state = seeded();
        let incidents = state.of::<crate::model::Incident>().len();
        let result = state.apply(Action::Delete {
            kind: CollectionKind::Incidents,
            id: "inc-1".into(),
        });

        assert!(matches!(
            result,
            Err(ErpError::Unsupported {
                kind: CollectionKind::Incidents,
                operation: "delete"
            })
        ));
        assert_eq!(state.of::<crate::model::Incident>().len(), incidents);

        let warehouses = state.apply(Action::Add {
            kind: CollectionKind::Warehouses,
            record: json!({"id": "wh-9", "name": "X", "isDefault": false}),
        });
        assert!(warehouses.is_err());
    }

    #[test]
    fn mark_notification_read() {
        let mut state = seeded();
        let unread = state.unread_notifications();
        assert!(unread > 0);

        let outcome = state
            .apply(Action::MarkNotificationRead {
                id: "notif-1".into(),
            })
            .unwrap();
        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(state.unread_notifications(), unread - 1);

        let again = state
            .apply(Action::MarkNotificationRead {
                id: "notif-1".into(),
            })
            .unwrap();
        assert_eq!(again, Outcome::Unchanged);
    }

    #[test]
    fn mark_all_notifications_read() {
        let mut state = seeded();
        assert_eq!(
            state.apply(Action::MarkAllNotificationsRead).unwrap(),
            Outcome::Applied
        );
        assert_eq!(state.unread_notifications(), 0);
        assert_eq!(
            state.apply(Action::MarkAllNotificationsRead).unwrap(),
            Outcome::Unchanged
        );
    }

    #[test]
    fn audit_log_is_stamped_and_prepended() {
        let mut state = seeded();
        let before = state.of::<AuditLog>().len();
        state
            .apply(Action::AddAuditLog(NewAuditLog {
                user_id: "user-2".into(),
                user_name: "Alex Morgan".into(),
                action: "delete".into(),
                module: "erp".into(),
                entity_type: "customer".into(),
                entity_id: "cust-1".into(),
                changes: None,
                ip_address: None,
            }))
            .unwrap();

        let logs = state.of::<AuditLog>();
        assert_eq!(logs.len(), before + 1);
        let newest = &logs.as_slice()[0];
        assert_eq!(newest.entity_id, "cust-1");
        assert!(!newest.id.is_empty());
        assert!(logs.iter().skip(1).all(|l| l.id != newest.id));
    }
}
