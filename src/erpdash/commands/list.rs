//! Lists any collection as a table of its JSON records.
//!
//! Each collection has a short set of summary columns; searching uses the
//! collection's search field. Status-like fields render as badges.

use crate::commands::{bootstrap, CmdResult, ListOptions};
use crate::error::Result;
use crate::state::{AppState, CollectionKind};
use crate::status::badge;
use crate::table::{id_text, search_text, Cell, Column, TableView};
use serde_json::Value;
use std::cmp::Ordering;

/// `(field, header)` pairs shown for each collection, after the id.
pub fn summary_columns(kind: CollectionKind) -> &'static [(&'static str, &'static str)] {
    use CollectionKind::*;
    match kind {
        Users => &[("name", "Name"), ("email", "Email"), ("role", "Role"), ("status", "Status")],
        Customers => &[
            ("name", "Name"),
            ("company", "Company"),
            ("email", "Email"),
            ("totalSpent", "Total Spent"),
            ("status", "Status"),
        ],
        Leads => &[
            ("name", "Name"),
            ("company", "Company"),
            ("source", "Source"),
            ("value", "Value"),
            ("status", "Status"),
        ],
        Invoices => &[
            ("number", "Invoice"),
            ("customerName", "Customer"),
            ("total", "Total"),
            ("dueDate", "Due"),
            ("status", "Status"),
        ],
        Products => &[
            ("sku", "SKU"),
            ("name", "Name"),
            ("sellingPrice", "Price"),
            ("currentStock", "Stock"),
            ("status", "Status"),
        ],
        Warehouses => &[("name", "Name"), ("address", "Address"), ("isDefault", "Default")],
        Vendors => &[
            ("name", "Name"),
            ("email", "Email"),
            ("totalPurchases", "Purchases"),
            ("status", "Status"),
        ],
        ExpenseCategories => &[("name", "Name"), ("color", "Color"), ("budgetLimit", "Budget")],
        Expenses => &[
            ("title", "Title"),
            ("category", "Category"),
            ("total", "Total"),
            ("date", "Date"),
            ("status", "Status"),
        ],
        Subscriptions => &[
            ("vendor", "Vendor"),
            ("plan", "Plan"),
            ("amount", "Amount"),
            ("nextRenewal", "Renews"),
            ("status", "Status"),
        ],
        Budgets => &[
            ("categoryName", "Category"),
            ("amount", "Amount"),
            ("spent", "Spent"),
            ("period", "Period"),
        ],
        Employees => &[
            ("name", "Name"),
            ("department", "Department"),
            ("position", "Position"),
            ("status", "Status"),
        ],
        LeaveRequests => &[
            ("employeeName", "Employee"),
            ("type", "Type"),
            ("startDate", "From"),
            ("days", "Days"),
            ("status", "Status"),
        ],
        Projects => &[
            ("name", "Name"),
            ("managerName", "Manager"),
            ("budget", "Budget"),
            ("status", "Status"),
        ],
        Tasks => &[
            ("title", "Title"),
            ("assigneeName", "Assignee"),
            ("priority", "Priority"),
            ("dueDate", "Due"),
            ("status", "Status"),
        ],
        Servers => &[
            ("name", "Name"),
            ("provider", "Provider"),
            ("environment", "Env"),
            ("monthlyCost", "Cost"),
            ("status", "Status"),
        ],
        Services => &[
            ("name", "Name"),
            ("serverName", "Server"),
            ("domain", "Domain"),
            ("status", "Status"),
        ],
        Incidents => &[
            ("title", "Title"),
            ("severity", "Severity"),
            ("startTime", "Started"),
            ("status", "Status"),
        ],
        MaintenanceWindows => &[
            ("reason", "Reason"),
            ("serverName", "Server"),
            ("scheduledStart", "Start"),
            ("status", "Status"),
        ],
        Notifications => &[
            ("title", "Title"),
            ("module", "Module"),
            ("read", "Read"),
            ("createdAt", "When"),
        ],
        AuditLogs => &[
            ("action", "Action"),
            ("entityType", "Entity"),
            ("entityId", "Entity Id"),
            ("userName", "User"),
            ("createdAt", "When"),
        ],
        ReimbursementClaims => &[
            ("employeeName", "Employee"),
            ("totalAmount", "Amount"),
            ("submittedAt", "Submitted"),
            ("status", "Status"),
        ],
    }
}

pub fn run(state: &mut AppState, kind: CollectionKind, options: &ListOptions) -> Result<CmdResult> {
    let seeded = bootstrap(state)?;
    let rows = state.collection(kind).to_values()?;

    let mut view = table(kind, rows);
    if options.wants_selection() {
        view = view
            .selectable()
            .on_selection_change(|ids| log::debug!("Selection: {} rows", ids.len()));
    }
    options.apply(&mut view);

    let selected: Vec<Value> = view
        .filtered()
        .into_iter()
        .filter(|row| view.is_selected(&id_text(&row["id"])))
        .cloned()
        .collect();

    let mut result = CmdResult::default()
        .with_table(view.snapshot())
        .with_records(selected);
    result.changed = seeded;
    Ok(result)
}

/// A table over the JSON records of `kind`.
pub fn table(kind: CollectionKind, rows: Vec<Value>) -> TableView<Value> {
    let mut columns = vec![Column::new("id", "Id", |row: &Value| text(&row["id"]))
        .sortable_by(|a: &Value, b: &Value| compare(&a["id"], &b["id"]))];
    columns.extend(summary_columns(kind).iter().map(|&(field, header)| {
        let is_status = matches!(field, "status" | "severity" | "priority");
        Column::new(field, header, move |row: &Value| {
            let shown = text(&row[field]);
            if is_status && shown != "-" {
                badge(&shown)
            } else {
                Cell::from(shown)
            }
        })
        .sortable_by(move |a: &Value, b: &Value| compare(&a[field], &b[field]))
    }));

    let search_field = kind.search_field();
    TableView::new(rows, columns)
        .with_search(move |row| search_text(&row[search_field]))
        .with_empty_state(
            format!("No {} found", kind.label().to_lowercase()),
            "Try adjusting your search or filters",
        )
}

fn text(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "yes".to_string(),
        Value::Bool(false) => "no".to_string(),
        other => other.to_string(),
    }
}

/// Numbers compare numerically, everything else by display text. Missing
/// values sort first.
fn compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Less,
        (_, Value::Null) => Ordering::Greater,
        _ => text(a).cmp(&text(b)),
    }
}
