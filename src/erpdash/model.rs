//! Domain records.
//!
//! Records are passive: plain data with serde derives. They serialize with
//! camelCase keys and snake_case enum values, which is the shape persisted in
//! the state snapshot and accepted by patches.
//!
//! Denormalized display fields (`customer_name` on an [`Invoice`], `server_name`
//! on a [`ServiceApp`], ...) are copies taken at creation time, not live
//! references. Nothing here enforces referential integrity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Declares a closed set of wire strings as a Copy enum with `as_str` and `Display`.
macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $wire)] $variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// --- Core ---

wire_enum!(
    /// Role of a user; drives sidebar visibility.
    UserRole {
        Owner => "owner",
        Admin => "admin",
        Finance => "finance",
        Sales => "sales",
        Inventory => "inventory",
        Hr => "hr",
        Devops => "devops",
        Viewer => "viewer",
    }
);

wire_enum!(UserStatus {
    Active => "active",
    Inactive => "inactive",
    Pending => "pending",
});

wire_enum!(ActiveStatus {
    Active => "active",
    Inactive => "inactive",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub avatar: Option<String>,
    pub role: UserRole,
    pub organization_id: String,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
    pub status: UserStatus,
}

impl User {
    /// First word of the display name, used in greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("User")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub logo: Option<String>,
    pub address: Option<String>,
    pub currency: String,
    pub fiscal_year_start: String,
    pub created_at: DateTime<Utc>,
}

// --- Sales ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
    pub status: ActiveStatus,
    pub created_at: DateTime<Utc>,
    /// Stored, never recomputed from invoices.
    pub total_spent: f64,
}

wire_enum!(LeadStatus {
    New => "new",
    Contacted => "contacted",
    Proposal => "proposal",
    Won => "won",
    Lost => "lost",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub status: LeadStatus,
    pub value: f64,
    pub source: Option<String>,
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
    pub notes: Option<String>,
}

wire_enum!(
    /// No transition rules are enforced between invoice states.
    InvoiceStatus {
        Draft => "draft",
        Pending => "pending",
        Sent => "sent",
        Paid => "paid",
        Overdue => "overdue",
        Cancelled => "cancelled",
    }
);

impl InvoiceStatus {
    /// Awaiting payment: issued but neither paid nor written off.
    pub fn is_outstanding(&self) -> bool {
        matches!(self, InvoiceStatus::Pending | InvoiceStatus::Sent)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub id: String,
    pub product_id: Option<String>,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub tax: f64,
    pub total: f64,
}

impl InvoiceItem {
    /// Builds a line whose tax and total are computed from `tax_rate` (percent).
    pub fn priced(
        id: impl Into<String>,
        description: impl Into<String>,
        quantity: f64,
        unit_price: f64,
        tax_rate: f64,
    ) -> Self {
        let net = quantity * unit_price;
        let tax = net * tax_rate / 100.0;
        Self {
            id: id.into(),
            product_id: None,
            description: description.into(),
            quantity,
            unit_price,
            tax,
            total: net + tax,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub number: String,
    pub customer_id: String,
    pub customer_name: String,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    pub status: InvoiceStatus,
    pub due_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

/// Subtotal, tax and total of a set of lines, as stored on an invoice at creation.
pub fn invoice_totals(items: &[InvoiceItem]) -> (f64, f64, f64) {
    let subtotal: f64 = items.iter().map(|i| i.quantity * i.unit_price).sum();
    let tax: f64 = items.iter().map(|i| i.tax).sum();
    (subtotal, tax, subtotal + tax)
}

// --- Inventory & purchasing ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub unit: String,
    pub purchase_price: f64,
    pub selling_price: f64,
    pub tax_rate: f64,
    pub reorder_level: i64,
    pub current_stock: i64,
    pub warehouse_id: String,
    pub barcode: Option<String>,
    pub status: ActiveStatus,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn is_low_stock(&self) -> bool {
        self.current_stock <= self.reorder_level
    }

    /// Gross margin as a percentage of the selling price.
    pub fn margin_percent(&self) -> f64 {
        if self.selling_price == 0.0 {
            return 0.0;
        }
        (self.selling_price - self.purchase_price) / self.selling_price * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub payment_terms: Option<String>,
    pub status: ActiveStatus,
    pub created_at: DateTime<Utc>,
    pub total_purchases: f64,
}

// --- Expenses ---

wire_enum!(PaymentMethod {
    Cash => "cash",
    Card => "card",
    BankTransfer => "bank_transfer",
    Cheque => "cheque",
});

wire_enum!(PaidBy {
    Company => "company",
    Employee => "employee",
});

wire_enum!(ExpenseStatus {
    Draft => "draft",
    Submitted => "submitted",
    Approved => "approved",
    Rejected => "rejected",
    Paid => "paid",
    Reimbursed => "reimbursed",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub tax: f64,
    pub total: f64,
    pub category: String,
    pub category_id: String,
    pub vendor: Option<String>,
    pub vendor_id: Option<String>,
    pub payment_method: PaymentMethod,
    pub paid_by: PaidBy,
    pub employee_id: Option<String>,
    pub employee_name: Option<String>,
    pub reimbursable: bool,
    pub project_id: Option<String>,
    pub project_name: Option<String>,
    pub cost_center: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub receipt_url: Option<String>,
    pub notes: Option<String>,
    pub status: ExpenseStatus,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub approved_by: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseCategory {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub icon: Option<String>,
    pub budget_limit: Option<f64>,
    pub parent_id: Option<String>,
}

wire_enum!(BillingPeriod {
    Monthly => "monthly",
    Quarterly => "quarterly",
    Yearly => "yearly",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub category_id: String,
    pub category_name: String,
    pub amount: f64,
    pub period: BillingPeriod,
    pub spent: f64,
    /// Percentage of `amount` at which the budget should alert.
    pub alert_threshold: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Budget {
    pub fn is_over_threshold(&self) -> bool {
        self.amount > 0.0 && self.spent / self.amount * 100.0 >= self.alert_threshold
    }
}

wire_enum!(SubscriptionStatus {
    Active => "active",
    Cancelled => "cancelled",
    Paused => "paused",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub vendor: String,
    pub vendor_id: Option<String>,
    pub plan: String,
    pub billing_cycle: BillingPeriod,
    pub amount: f64,
    pub currency: String,
    pub next_renewal: NaiveDate,
    pub status: SubscriptionStatus,
    pub owner: String,
    pub owner_id: String,
    pub payment_method: String,
    pub category_id: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

wire_enum!(ClaimStatus {
    Pending => "pending",
    Approved => "approved",
    Rejected => "rejected",
    Reimbursed => "reimbursed",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReimbursementClaim {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    #[serde(default)]
    pub expenses: Vec<String>,
    pub total_amount: f64,
    pub status: ClaimStatus,
    pub submitted_at: DateTime<Utc>,
    pub reviewed_by: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub review_notes: Option<String>,
    pub reimbursed_at: Option<DateTime<Utc>>,
}

// --- HR ---

wire_enum!(EmployeeStatus {
    Active => "active",
    Inactive => "inactive",
    OnLeave => "on_leave",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub employee_id: String,
    pub user_id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: String,
    pub position: String,
    pub manager: Option<String>,
    pub join_date: NaiveDate,
    pub salary: f64,
    pub status: EmployeeStatus,
    pub avatar: Option<String>,
}

wire_enum!(LeaveType {
    Annual => "annual",
    Sick => "sick",
    Personal => "personal",
    Unpaid => "unpaid",
});

wire_enum!(ApprovalStatus {
    Pending => "pending",
    Approved => "approved",
    Rejected => "rejected",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: u32,
    pub reason: Option<String>,
    pub status: ApprovalStatus,
    pub approved_by: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

// --- Projects ---

wire_enum!(ProjectStatus {
    Planning => "planning",
    Active => "active",
    OnHold => "on_hold",
    Completed => "completed",
    Cancelled => "cancelled",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub budget: Option<f64>,
    pub spent: f64,
    pub manager_id: Option<String>,
    pub manager_name: Option<String>,
    #[serde(default)]
    pub members: Vec<String>,
    pub created_at: DateTime<Utc>,
}

wire_enum!(TaskStatus {
    Todo => "todo",
    InProgress => "in_progress",
    Review => "review",
    Done => "done",
});

wire_enum!(Priority {
    Low => "low",
    Medium => "medium",
    High => "high",
    Urgent => "urgent",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub project_id: String,
    pub project_name: String,
    pub assignee_id: Option<String>,
    pub assignee_name: Option<String>,
    pub status: TaskStatus,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

// --- Servers ---

wire_enum!(Provider {
    Aws => "aws",
    DigitalOcean => "digitalocean",
    Hostinger => "hostinger",
    Linode => "linode",
    Vultr => "vultr",
    Azure => "azure",
    Gcp => "gcp",
    Other => "other",
});

wire_enum!(Environment {
    Production => "production",
    Staging => "staging",
    Development => "development",
});

wire_enum!(
    /// Static field; nothing polls servers for liveness.
    ServerStatus {
        Online => "online",
        Offline => "offline",
        Maintenance => "maintenance",
        Unknown => "unknown",
    }
);

wire_enum!(ServerBilling {
    Monthly => "monthly",
    Yearly => "yearly",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityChecklist {
    pub ssh_keys: bool,
    pub fail2ban: bool,
    pub firewall: bool,
    pub backups: bool,
}

impl SecurityChecklist {
    pub fn passed(&self) -> usize {
        [self.ssh_keys, self.fail2ban, self.firewall, self.backups]
            .iter()
            .filter(|ok| **ok)
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    pub id: String,
    pub name: String,
    pub provider: Provider,
    pub region: String,
    pub environment: Environment,
    pub public_ip: String,
    pub hostname: Option<String>,
    pub os: String,
    pub cpu: String,
    pub ram: String,
    pub disk: String,
    pub ssh_port: u16,
    pub firewall_enabled: bool,
    pub monitoring_enabled: bool,
    pub monthly_cost: f64,
    pub currency: String,
    pub billing_cycle: ServerBilling,
    pub renewal_date: NaiveDate,
    pub status: ServerStatus,
    pub uptime: f64,
    pub last_check: Option<DateTime<Utc>>,
    pub cpu_usage: Option<f64>,
    pub ram_usage: Option<f64>,
    pub disk_usage: Option<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub owner_id: String,
    pub owner_name: String,
    pub notes: Option<String>,
    #[serde(default)]
    pub security_checklist: SecurityChecklist,
    pub created_at: DateTime<Utc>,
}

wire_enum!(ServiceStatus {
    Running => "running",
    Stopped => "stopped",
    Error => "error",
    Maintenance => "maintenance",
});

wire_enum!(DeployMethod {
    Docker => "docker",
    Pm2 => "pm2",
    Systemd => "systemd",
    Manual => "manual",
    Kubernetes => "kubernetes",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceApp {
    pub id: String,
    pub name: String,
    pub server_id: String,
    pub server_name: String,
    pub domain: Option<String>,
    pub status: ServiceStatus,
    pub deploy_method: DeployMethod,
    #[serde(default)]
    pub ports: Vec<String>,
    pub repo_url: Option<String>,
    pub last_deploy_at: Option<DateTime<Utc>>,
    pub owner_id: String,
    pub owner_name: String,
    pub health_check_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

wire_enum!(Severity {
    Low => "low",
    Medium => "medium",
    High => "high",
    Critical => "critical",
});

wire_enum!(IncidentStatus {
    Open => "open",
    Investigating => "investigating",
    Mitigated => "mitigated",
    Resolved => "resolved",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentEvent {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub description: String,
    pub created_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: String,
    pub title: String,
    pub severity: Severity,
    #[serde(default)]
    pub affected_servers: Vec<String>,
    #[serde(default)]
    pub affected_services: Vec<String>,
    pub status: IncidentStatus,
    pub impact: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub timeline: Vec<IncidentEvent>,
    pub resolution: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl Incident {
    pub fn is_open(&self) -> bool {
        self.status != IncidentStatus::Resolved
    }
}

wire_enum!(MaintenanceStatus {
    Scheduled => "scheduled",
    InProgress => "in_progress",
    Completed => "completed",
    Cancelled => "cancelled",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceWindow {
    pub id: String,
    pub server_id: Option<String>,
    pub server_name: Option<String>,
    pub service_id: Option<String>,
    pub service_name: Option<String>,
    pub reason: String,
    pub scheduled_start: DateTime<Utc>,
    pub scheduled_end: DateTime<Utc>,
    pub status: MaintenanceStatus,
    #[serde(default)]
    pub notify_teams: Vec<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

// --- Cross-cutting ---

wire_enum!(NotificationType {
    Info => "info",
    Warning => "warning",
    Error => "error",
    Success => "success",
});

wire_enum!(NotificationModule {
    Erp => "erp",
    Expense => "expense",
    Servers => "servers",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub module: NotificationModule,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub action_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldChange {
    pub old: serde_json::Value,
    pub new: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub action: String,
    pub module: String,
    pub entity_type: String,
    pub entity_id: String,
    pub changes: Option<std::collections::BTreeMap<String, FieldChange>>,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// An audit entry before the store stamps it with an id and creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAuditLog {
    pub user_id: String,
    pub user_name: String,
    pub action: String,
    pub module: String,
    pub entity_type: String,
    pub entity_id: String,
    pub changes: Option<std::collections::BTreeMap<String, FieldChange>>,
    pub ip_address: Option<String>,
}

impl NewAuditLog {
    pub fn stamp(self, id: String, created_at: DateTime<Utc>) -> AuditLog {
        AuditLog {
            id,
            user_id: self.user_id,
            user_name: self.user_name,
            action: self.action,
            module: self.module,
            entity_type: self.entity_type,
            entity_id: self.entity_id,
            changes: self.changes,
            ip_address: self.ip_address,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_use_original_wire_strings() {
        assert_eq!(
            serde_json::to_string(&EmployeeStatus::OnLeave).unwrap(),
            "\"on_leave\""
        );
        assert_eq!(PaymentMethod::BankTransfer.as_str(), "bank_transfer");
        let parsed: ServerStatus = serde_json::from_str("\"maintenance\"").unwrap();
        assert_eq!(parsed, ServerStatus::Maintenance);
    }

    #[test]
    fn priced_item_carries_tax_into_total() {
        let item = InvoiceItem::priced("li-1", "Consulting", 2.0, 100.0, 10.0);
        assert_eq!(item.tax, 20.0);
        assert_eq!(item.total, 220.0);

        let (subtotal, tax, total) = invoice_totals(&[item]);
        assert_eq!((subtotal, tax, total), (200.0, 20.0, 220.0));
    }

    #[test]
    fn outstanding_invoice_states() {
        assert!(InvoiceStatus::Pending.is_outstanding());
        assert!(InvoiceStatus::Sent.is_outstanding());
        assert!(!InvoiceStatus::Paid.is_outstanding());
        assert!(!InvoiceStatus::Draft.is_outstanding());
    }

    #[test]
    fn security_checklist_counts_passed_items() {
        let checklist = SecurityChecklist {
            ssh_keys: true,
            fail2ban: false,
            firewall: true,
            backups: true,
        };
        assert_eq!(checklist.passed(), 3);
    }
}
