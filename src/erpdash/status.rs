//! Status badges: every status string maps to one semantic variant.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Success,
    Warning,
    Error,
    Info,
    Default,
    Draft,
    Pending,
    Paid,
    Overdue,
    Cancelled,
    Online,
    Offline,
    Maintenance,
}

impl BadgeVariant {
    pub const ALL: &'static [BadgeVariant] = &[
        BadgeVariant::Success,
        BadgeVariant::Warning,
        BadgeVariant::Error,
        BadgeVariant::Info,
        BadgeVariant::Default,
        BadgeVariant::Draft,
        BadgeVariant::Pending,
        BadgeVariant::Paid,
        BadgeVariant::Overdue,
        BadgeVariant::Cancelled,
        BadgeVariant::Online,
        BadgeVariant::Offline,
        BadgeVariant::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Error => "error",
            BadgeVariant::Info => "info",
            BadgeVariant::Default => "default",
            BadgeVariant::Draft => "draft",
            BadgeVariant::Pending => "pending",
            BadgeVariant::Paid => "paid",
            BadgeVariant::Overdue => "overdue",
            BadgeVariant::Cancelled => "cancelled",
            BadgeVariant::Online => "online",
            BadgeVariant::Offline => "offline",
            BadgeVariant::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for BadgeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive; anything unrecognized is `Default`.
pub fn status_variant(status: &str) -> BadgeVariant {
    use BadgeVariant::*;
    match status.to_lowercase().as_str() {
        // invoices
        "draft" => Draft,
        "pending" => Pending,
        "sent" => Info,
        "paid" => Paid,
        "overdue" => Overdue,
        "cancelled" => Cancelled,
        // expenses
        "submitted" => Pending,
        "approved" | "reimbursed" => Success,
        "rejected" => Error,
        // servers
        "online" => Online,
        "offline" => Offline,
        "maintenance" => Maintenance,
        // general
        "active" | "completed" | "done" => Success,
        "in_progress" => Info,
        "review" => Warning,
        // incidents
        "open" => Error,
        "investigating" => Warning,
        "mitigated" => Info,
        "resolved" => Success,
        // leave types
        "annual" => Info,
        "sick" => Warning,
        "unpaid" => Draft,
        // leads
        "new" => Info,
        "contacted" => Pending,
        "proposal" => Warning,
        "won" => Success,
        "lost" => Error,
        // services and subscriptions
        "running" => Success,
        "stopped" | "error" => Error,
        "paused" => Warning,
        _ => Default,
    }
}

/// A table cell showing `status` as a badge.
pub fn badge(status: &str) -> crate::table::Cell {
    crate::table::Cell::styled(status.replace('_', " "), status_variant(status).as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses() {
        assert_eq!(status_variant("paid"), BadgeVariant::Paid);
        assert_eq!(status_variant("sent"), BadgeVariant::Info);
        assert_eq!(status_variant("submitted"), BadgeVariant::Pending);
        assert_eq!(status_variant("in_progress"), BadgeVariant::Info);
        assert_eq!(status_variant("investigating"), BadgeVariant::Warning);
        assert_eq!(status_variant("stopped"), BadgeVariant::Error);
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(status_variant("OVERDUE"), BadgeVariant::Overdue);
        assert_eq!(status_variant("Online"), BadgeVariant::Online);
    }

    #[test]
    fn unknown_falls_back_to_default() {
        assert_eq!(status_variant("unknown"), BadgeVariant::Default);
        assert_eq!(status_variant("on_leave"), BadgeVariant::Default);
        assert_eq!(status_variant(""), BadgeVariant::Default);
    }

    #[test]
    fn badge_cell_carries_variant() {
        let cell = badge("in_progress");
        assert_eq!(cell.text, "in progress");
        assert_eq!(cell.style.as_deref(), Some("info"));
    }
}
