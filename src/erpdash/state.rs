//! # Application State
//!
//! [`AppState`] is the single state object: the [`Session`] (who is signed in,
//! for which organization) and [`Collections`] (every domain collection).
//!
//! It is a plain value. Nothing in here does I/O: persistence is the
//! [`crate::store`] layer's job and is driven by [`crate::api::ErpApi`].
//! All mutation from UI clients goes through [`AppState::apply`] (see
//! [`crate::action`]); the methods here are the primitives it is built from.
//!
//! The serialized shape is flat, one key per session field and per collection,
//! matching the snapshot format written by the file store.

use crate::collection::{AnyCollection, Collection, Record};
use crate::demo::{self, DemoData};
use crate::model::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares the collections once and derives from that list:
/// the [`CollectionKind`] enum, the [`Collections`] struct, the [`Record`]
/// impls and the kind-to-collection dispatch.
macro_rules! collections {
    ($($field:ident: $record:ty => $kind:ident, $key:literal, $cli:literal, $label:literal;)+) => {
        /// Names one of the state's collections.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
        )]
        pub enum CollectionKind {
            $(
                #[serde(rename = $key)]
                #[value(name = $cli)]
                $kind,
            )+
        }

        impl CollectionKind {
            pub const ALL: &'static [CollectionKind] = &[$(CollectionKind::$kind),+];

            /// Key of the collection in the persisted snapshot.
            pub fn key(&self) -> &'static str {
                match self {
                    $(CollectionKind::$kind => $key,)+
                }
            }

            /// Name used on the command line.
            pub fn cli_name(&self) -> &'static str {
                match self {
                    $(CollectionKind::$kind => $cli,)+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $(CollectionKind::$kind => $label,)+
                }
            }
        }

        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct Collections {
            $(
                #[serde(default)]
                pub $field: Collection<$record>,
            )+
        }

        impl Collections {
            pub fn get(&self, kind: CollectionKind) -> &dyn AnyCollection {
                match kind {
                    $(CollectionKind::$kind => &self.$field,)+
                }
            }

            pub fn get_mut(&mut self, kind: CollectionKind) -> &mut dyn AnyCollection {
                match kind {
                    $(CollectionKind::$kind => &mut self.$field,)+
                }
            }
        }

        $(
            impl Record for $record {
                const KIND: CollectionKind = CollectionKind::$kind;

                fn id(&self) -> &str {
                    &self.id
                }

                fn collection(data: &Collections) -> &Collection<Self> {
                    &data.$field
                }

                fn collection_mut(data: &mut Collections) -> &mut Collection<Self> {
                    &mut data.$field
                }
            }
        )+
    };
}

collections! {
    users: User => Users, "users", "users", "Users";
    customers: Customer => Customers, "customers", "customers", "Customers";
    leads: Lead => Leads, "leads", "leads", "Leads";
    invoices: Invoice => Invoices, "invoices", "invoices", "Invoices";
    products: Product => Products, "products", "products", "Products";
    warehouses: Warehouse => Warehouses, "warehouses", "warehouses", "Warehouses";
    vendors: Vendor => Vendors, "vendors", "vendors", "Vendors";
    expense_categories: ExpenseCategory => ExpenseCategories, "expenseCategories", "expense-categories", "Expense categories";
    expenses: Expense => Expenses, "expenses", "expenses", "Expenses";
    subscriptions: Subscription => Subscriptions, "subscriptions", "subscriptions", "Subscriptions";
    budgets: Budget => Budgets, "budgets", "budgets", "Budgets";
    employees: Employee => Employees, "employees", "employees", "Employees";
    leave_requests: LeaveRequest => LeaveRequests, "leaveRequests", "leave-requests", "Leave requests";
    projects: Project => Projects, "projects", "projects", "Projects";
    tasks: Task => Tasks, "tasks", "tasks", "Tasks";
    servers: Server => Servers, "servers", "servers", "Servers";
    services: ServiceApp => Services, "services", "services", "Services";
    incidents: Incident => Incidents, "incidents", "incidents", "Incidents";
    maintenance_windows: MaintenanceWindow => MaintenanceWindows, "maintenanceWindows", "maintenance-windows", "Maintenance windows";
    notifications: Notification => Notifications, "notifications", "notifications", "Notifications";
    audit_logs: AuditLog => AuditLogs, "auditLogs", "audit-logs", "Audit logs";
    reimbursement_claims: ReimbursementClaim => ReimbursementClaims, "reimbursementClaims", "reimbursement-claims", "Reimbursement claims";
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cli_name())
    }
}

/// The generic mutations a collection may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Add,
    Update,
    Delete,
}

impl Mutation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mutation::Add => "add",
            Mutation::Update => "update",
            Mutation::Delete => "delete",
        }
    }
}

impl CollectionKind {
    /// Whether the store exposes `mutation` for this collection.
    ///
    /// Warehouses are seed-only. Audit logs are written through
    /// `AddAuditLog` only. Notifications can be added but otherwise only
    /// marked read. Leave requests, incidents and reimbursement claims
    /// cannot be deleted.
    pub fn supports(&self, mutation: Mutation) -> bool {
        use CollectionKind::*;
        match self {
            Warehouses | AuditLogs => false,
            Notifications => mutation == Mutation::Add,
            LeaveRequests | Incidents | ReimbursementClaims => mutation != Mutation::Delete,
            _ => true,
        }
    }

    /// Newest-first collections receive new records at the front.
    pub fn prepends(&self) -> bool {
        matches!(self, CollectionKind::Notifications | CollectionKind::AuditLogs)
    }

    /// The field list views search on.
    pub fn search_field(&self) -> &'static str {
        use CollectionKind::*;
        match self {
            Invoices => "number",
            Expenses | Tasks | Incidents | Notifications => "title",
            Subscriptions => "vendor",
            LeaveRequests | ReimbursementClaims => "employeeName",
            MaintenanceWindows => "reason",
            AuditLogs => "action",
            _ => "name",
        }
    }
}

/// Who is signed in, and for which organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub current_user: Option<User>,
    #[serde(default)]
    pub is_authenticated: bool,
    pub organization: Option<Organization>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(flatten)]
    pub session: Session,
    #[serde(flatten)]
    pub data: Collections,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of<T: Record>(&self) -> &Collection<T> {
        T::collection(&self.data)
    }

    pub fn of_mut<T: Record>(&mut self) -> &mut Collection<T> {
        T::collection_mut(&mut self.data)
    }

    pub fn collection(&self, kind: CollectionKind) -> &dyn AnyCollection {
        self.data.get(kind)
    }

    pub fn collection_mut(&mut self, kind: CollectionKind) -> &mut dyn AnyCollection {
        self.data.get_mut(kind)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user.as_ref()
    }

    /// Checks the credentials against the demo user directory.
    ///
    /// On a match the session is filled in and the collections are seeded if
    /// they are still empty. Unknown email and wrong password both return
    /// `false`, and leave the state untouched.
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        let demo = demo::demo_data();
        let Some(user) = demo.users.iter().find(|u| u.email == email) else {
            return false;
        };
        if password != demo::DEMO_PASSWORD {
            return false;
        }
        self.session = Session {
            current_user: Some(user.clone()),
            is_authenticated: true,
            organization: Some(demo.organization.clone()),
        };
        self.initialize_data_from(demo);
        true
    }

    /// Clears the session. Collections are kept.
    pub fn logout(&mut self) {
        self.session = Session::default();
    }

    /// Seeds every collection from the demo set, but only while `customers`
    /// is empty. Returns whether seeding happened.
    pub fn initialize_data(&mut self) -> bool {
        if !self.data.customers.is_empty() {
            return false;
        }
        self.initialize_data_from(demo::demo_data())
    }

    fn initialize_data_from(&mut self, demo: DemoData) -> bool {
        if !self.data.customers.is_empty() {
            return false;
        }
        let leave_requests = std::mem::take(&mut self.data.leave_requests);
        let reimbursement_claims = std::mem::take(&mut self.data.reimbursement_claims);
        self.data = demo.collections;
        // The seed set has no leave requests or claims; seeding keeps existing ones.
        self.data.leave_requests = leave_requests;
        self.data.reimbursement_claims = reimbursement_claims;
        log::debug!("Seeded collections from demo data");
        true
    }

    /// Replaces every collection with the demo set unconditionally.
    ///
    /// Leave requests and reimbursement claims end up empty. The session is kept.
    pub fn reset_data(&mut self) {
        self.data = demo::demo_data().collections;
        self.data.leave_requests.clear();
        self.data.reimbursement_claims.clear();
        log::debug!("Reset collections to demo data");
    }

    pub fn unread_notifications(&self) -> usize {
        self.data.notifications.iter().filter(|n| !n.read).count()
    }
}
