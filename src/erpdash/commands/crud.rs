//! Generic add / update / delete over any collection.
//!
//! Records travel as JSON objects in the persisted (camelCase) shape. Every
//! mutation that changes something is followed by an audit log entry written
//! in the name of the signed-in user.

use crate::action::{Action, Outcome};
use crate::commands::{bootstrap, CmdMessage, CmdResult};
use crate::error::{ErpError, Result};
use crate::model::{FieldChange, NewAuditLog};
use crate::state::{AppState, CollectionKind};
use chrono::Utc;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub fn add(state: &mut AppState, kind: CollectionKind, record: Value) -> Result<CmdResult> {
    let seeded = bootstrap(state)?;
    let Value::Object(mut fields) = record else {
        return Err(ErpError::Api("A record must be a JSON object".to_string()));
    };
    let id = fill_defaults(&mut fields);

    let outcome = state.apply(Action::Add {
        kind,
        record: Value::Object(fields),
    })?;
    audit(state, "create", kind, &id, None)?;

    let stored = state.collection(kind).get_value(&id)?;
    let mut result = CmdResult::default()
        .with_outcome(outcome)
        .with_records(stored.into_iter().collect());
    result.changed |= seeded;
    result.add_message(CmdMessage::success(format!("Added {} {}", kind, id)));
    Ok(result)
}

pub fn update(
    state: &mut AppState,
    kind: CollectionKind,
    id: &str,
    patch: Value,
) -> Result<CmdResult> {
    let seeded = bootstrap(state)?;
    let before = state.collection(kind).get_value(id)?;

    let outcome = state.apply(Action::Update {
        kind,
        id: id.to_string(),
        patch: patch.clone(),
    })?;
    let mut result = CmdResult::default().with_outcome(outcome);
    result.changed |= seeded;

    let before = match (outcome, before) {
        (Outcome::Applied, Some(before)) => before,
        (_, Some(_)) => {
            result.add_message(CmdMessage::info(format!(
                "{} {} already matches; nothing changed",
                kind, id
            )));
            return Ok(result);
        }
        (_, None) => {
            result.add_message(not_found(kind, id));
            return Ok(result);
        }
    };

    let after = state.collection(kind).get_value(id)?;
    let changes = diff(&before, after.as_ref(), &patch);
    let changed_fields = changes.len();
    audit(state, "update", kind, id, Some(changes))?;

    result.records = after.into_iter().collect();
    result.add_message(CmdMessage::success(format!(
        "Updated {} {} ({} field{} changed)",
        kind,
        id,
        changed_fields,
        if changed_fields == 1 { "" } else { "s" }
    )));
    Ok(result)
}

pub fn delete(state: &mut AppState, kind: CollectionKind, id: &str) -> Result<CmdResult> {
    let seeded = bootstrap(state)?;
    let outcome = state.apply(Action::Delete {
        kind,
        id: id.to_string(),
    })?;
    let mut result = CmdResult::default().with_outcome(outcome);
    result.changed |= seeded;

    if !outcome.changed() {
        result.add_message(not_found(kind, id));
        return Ok(result);
    }
    audit(state, "delete", kind, id, None)?;
    result.add_message(CmdMessage::success(format!("Deleted {} {}", kind, id)));
    Ok(result)
}

fn not_found(kind: CollectionKind, id: &str) -> CmdMessage {
    CmdMessage::warning(format!("No {} with id {}; nothing changed", kind, id))
}

/// Generates `id` and `createdAt` when the caller left them out. Returns the id.
fn fill_defaults(fields: &mut Map<String, Value>) -> String {
    let id = match fields.get("id").and_then(Value::as_str) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => {
            let id = uuid::Uuid::new_v4().to_string();
            fields.insert("id".to_string(), Value::String(id.clone()));
            id
        }
    };
    fields
        .entry("createdAt")
        .or_insert_with(|| Value::String(Utc::now().to_rfc3339()));
    id
}

/// Old and new values of the patched fields that actually changed.
fn diff(before: &Value, after: Option<&Value>, patch: &Value) -> BTreeMap<String, FieldChange> {
    let Some(patch) = patch.as_object() else {
        return BTreeMap::new();
    };
    patch
        .keys()
        .filter(|key| key.as_str() != "id")
        .filter_map(|key| {
            let old = before.get(key).cloned().unwrap_or(Value::Null);
            let new = after
                .and_then(|a| a.get(key))
                .cloned()
                .unwrap_or(Value::Null);
            (old != new).then(|| (key.clone(), FieldChange { old, new }))
        })
        .collect()
}

fn audit(
    state: &mut AppState,
    action: &str,
    kind: CollectionKind,
    id: &str,
    changes: Option<BTreeMap<String, FieldChange>>,
) -> Result<()> {
    let (user_id, user_name) = state
        .current_user()
        .map(|u| (u.id.clone(), u.name.clone()))
        .unwrap_or_default();
    state.apply(Action::AddAuditLog(NewAuditLog {
        user_id,
        user_name,
        action: action.to_string(),
        module: kind.key().to_string(),
        entity_type: kind.label().to_string(),
        entity_id: id.to_string(),
        changes,
        ip_address: None,
    }))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;
    use crate::commands::MessageLevel;
    use crate::model::Product;
    use serde_json::json;

    fn customer() -> Value {
        json!({
            "name": "Zoe Park", "email": "zoe@example.com", "status": "active", "totalSpent": 0
        })
    }

    #[test]
    fn add_generates_id_and_audits() {
        let mut state = fixtures::admin();
        let audits = state.data.audit_logs.len();

        let res = add(&mut state, CollectionKind::Customers, customer()).unwrap();
        assert!(res.changed);
        let id = res.records[0]["id"].as_str().unwrap().to_string();
        assert!(state.data.customers.contains(&id));
        assert_eq!(state.data.customers.as_slice().last().unwrap().id, id);

        assert_eq!(state.data.audit_logs.len(), audits + 1);
        let entry = &state.data.audit_logs.as_slice()[0];
        assert_eq!(entry.action, "create");
        assert_eq!(entry.entity_id, id);
        assert_eq!(entry.user_name, "Alex Morgan");
    }

    #[test]
    fn add_requires_a_session() {
        let mut state = AppState::new();
        let err = add(&mut state, CollectionKind::Customers, customer()).unwrap_err();
        assert!(matches!(err, ErpError::NotAuthenticated));
    }

    #[test]
    fn add_rejects_a_record_of_the_wrong_shape() {
        let mut state = fixtures::admin();
        let before = state.data.customers.len();
        assert!(add(&mut state, CollectionKind::Customers, json!({"name": 3})).is_err());
        assert!(add(&mut state, CollectionKind::Customers, json!([1, 2])).is_err());
        assert_eq!(state.data.customers.len(), before);
    }

    #[test]
    fn update_records_changed_fields() {
        let mut state = fixtures::admin();
        let res = update(
            &mut state,
            CollectionKind::Products,
            "prod-5",
            json!({"currentStock": 40, "category": "Electronics"}),
        )
        .unwrap();
        assert!(res.changed);

        let product: &Product = state.of::<Product>().get("prod-5").unwrap();
        assert!(!product.is_low_stock());

        let entry = &state.data.audit_logs.as_slice()[0];
        assert_eq!(entry.action, "update");
        let changes = entry.changes.as_ref().unwrap();
        assert_eq!(changes["currentStock"].new, json!(40));
        assert_eq!(changes["currentStock"].old, json!(2));
    }

    #[test]
    fn update_unknown_id_warns() {
        let mut state = fixtures::admin();
        let audits = state.data.audit_logs.len();
        let res = update(
            &mut state,
            CollectionKind::Customers,
            "cust-404",
            json!({"name": "X"}),
        )
        .unwrap();

        assert!(!res.changed);
        assert_eq!(res.messages[0].level, MessageLevel::Warning);
        assert_eq!(state.data.audit_logs.len(), audits);
    }

    #[test]
    fn update_with_current_values_is_not_audited() {
        let mut state = fixtures::admin();
        let audits = state.data.audit_logs.len();
        let res = update(
            &mut state,
            CollectionKind::Customers,
            "cust-1",
            json!({"name": "James Wilson"}),
        )
        .unwrap();

        assert!(!res.changed);
        assert_eq!(res.messages[0].level, MessageLevel::Info);
        assert!(res.messages[0].content.contains("nothing changed"));
        assert_eq!(state.data.audit_logs.len(), audits);
    }

    #[test]
    fn update_with_unknown_field_is_rejected() {
        let mut state = fixtures::admin();
        let audits = state.data.audit_logs.len();
        let err = update(
            &mut state,
            CollectionKind::Customers,
            "cust-1",
            json!({"nmae": "X"}),
        )
        .unwrap_err();

        assert!(matches!(err, ErpError::InvalidPatch { .. }));
        assert_eq!(state.data.audit_logs.len(), audits);
    }

    #[test]
    fn delete_and_unsupported_delete() {
        let mut state = fixtures::admin();
        let before = state.data.invoices.len();

        assert!(delete(&mut state, CollectionKind::Invoices, "inv-7").unwrap().changed);
        assert_eq!(state.data.invoices.len(), before - 1);
        assert!(!delete(&mut state, CollectionKind::Invoices, "inv-7").unwrap().changed);

        let err = delete(&mut state, CollectionKind::Incidents, "inc-1").unwrap_err();
        assert!(matches!(err, ErpError::Unsupported { .. }));
    }
}
