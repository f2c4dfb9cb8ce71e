//! Demo dataset.
//!
//! [`demo_data`] returns the same snapshot on every call: fixed literals and
//! fixed timestamps, no randomness and no clock reads. Records reference each
//! other consistently (invoice customers exist, services point at seeded
//! servers), and invoice totals are computed from their lines.

use crate::collection::Collection;
use crate::model::*;
use crate::state::Collections;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Password shared by every demo account.
pub const DEMO_PASSWORD: &str = "demo123";

/// The seed: the organization, and every collection (the user directory included).
#[derive(Debug, Clone)]
pub struct DemoData {
    pub organization: Organization,
    pub users: Vec<User>,
    pub collections: Collections,
}

pub fn demo_data() -> DemoData {
    let users = users();
    let collections = Collections {
        users: Collection::from(users.clone()),
        customers: Collection::from(customers()),
        leads: Collection::from(leads()),
        invoices: Collection::from(invoices()),
        products: Collection::from(products()),
        warehouses: Collection::from(warehouses()),
        vendors: Collection::from(vendors()),
        expense_categories: Collection::from(expense_categories()),
        expenses: Collection::from(expenses()),
        subscriptions: Collection::from(subscriptions()),
        budgets: Collection::from(budgets()),
        employees: Collection::from(employees()),
        leave_requests: Collection::default(),
        projects: Collection::from(projects()),
        tasks: Collection::from(tasks()),
        servers: Collection::from(servers()),
        services: Collection::from(services()),
        incidents: Collection::from(incidents()),
        maintenance_windows: Collection::from(maintenance_windows()),
        notifications: Collection::from(notifications()),
        audit_logs: Collection::from(audit_logs()),
        reimbursement_claims: Collection::default(),
    };
    DemoData {
        organization: organization(),
        users,
        collections,
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap_or_default()
}

fn text(s: &str) -> Option<String> {
    Some(s.to_string())
}

fn organization() -> Organization {
    Organization {
        id: "org-1".into(),
        name: "Acme Corporation".into(),
        logo: None,
        address: text("100 Market Street, San Francisco, CA"),
        currency: "USD".into(),
        fiscal_year_start: "01-01".into(),
        created_at: at(2022, 1, 1, 9, 0),
    }
}

fn users() -> Vec<User> {
    let user = |n: u32, name: &str, email: &str, role: UserRole| User {
        id: format!("user-{}", n),
        email: email.into(),
        name: name.into(),
        avatar: None,
        role,
        organization_id: "org-1".into(),
        created_at: at(2022, 1, n, 9, 0),
        last_login: Some(at(2024, 2, 20, 8, 30)),
        status: UserStatus::Active,
    };
    vec![
        user(1, "Sarah Chen", "owner@acme.com", UserRole::Owner),
        user(2, "Alex Morgan", "admin@acme.com", UserRole::Admin),
        user(3, "Priya Patel", "finance@acme.com", UserRole::Finance),
        user(4, "Marcus Lee", "devops@acme.com", UserRole::Devops),
        user(5, "Emma Garcia", "sales@acme.com", UserRole::Sales),
    ]
}

fn customers() -> Vec<Customer> {
    let customer = |n: u32, name: &str, company: &str, spent: f64, status: ActiveStatus| Customer {
        id: format!("cust-{}", n),
        name: name.into(),
        email: format!(
            "{}@{}.com",
            name.split_whitespace().next().unwrap_or(name).to_lowercase(),
            company.split_whitespace().next().unwrap_or(company).to_lowercase()
        ),
        phone: Some(format!("+1 555 010{}", n)),
        company: text(company),
        address: None,
        status,
        created_at: at(2023, n.min(12), 3, 10, 0),
        total_spent: spent,
    };
    vec![
        customer(1, "James Wilson", "TechStart Inc", 45_200.0, ActiveStatus::Active),
        customer(2, "Linda Brooks", "Globex Ltd", 28_750.0, ActiveStatus::Active),
        customer(3, "Omar Haddad", "Initech", 12_400.0, ActiveStatus::Active),
        customer(4, "Mei Tanaka", "Umbrella Retail", 67_900.0, ActiveStatus::Active),
        customer(5, "Carlos Ruiz", "Stark Logistics", 8_300.0, ActiveStatus::Inactive),
        customer(6, "Hannah Berg", "Wayne Media", 19_650.0, ActiveStatus::Active),
        customer(7, "Kwame Mensah", "Soylent Foods", 5_100.0, ActiveStatus::Active),
        customer(8, "Isabel Costa", "Hooli Labs", 33_000.0, ActiveStatus::Active),
    ]
}

fn leads() -> Vec<Lead> {
    let lead = |n: u32, name: &str, company: &str, status: LeadStatus, value: f64, source: &str| {
        Lead {
            id: format!("lead-{}", n),
            name: name.into(),
            email: format!("contact{}@{}.com", n, company.to_lowercase().replace(' ', "")),
            company: text(company),
            phone: None,
            status,
            value,
            source: text(source),
            assigned_to: text("user-5"),
            created_at: at(2024, 1, 5 + n, 11, 0),
            notes: None,
        }
    };
    vec![
        lead(1, "Nina Volkova", "Cyberdyne", LeadStatus::New, 15_000.0, "website"),
        lead(2, "Tom Becker", "Massive Dynamic", LeadStatus::Contacted, 32_000.0, "referral"),
        lead(3, "Aisha Khan", "Vandelay Imports", LeadStatus::Proposal, 21_500.0, "trade show"),
        lead(4, "Leo Martin", "Pied Piper", LeadStatus::Won, 48_000.0, "website"),
        lead(5, "Sofia Rossi", "Bluth Company", LeadStatus::Lost, 9_000.0, "cold call"),
    ]
}

fn invoices() -> Vec<Invoice> {
    struct Spec<'a> {
        n: u32,
        customer: u32,
        customer_name: &'a str,
        lines: &'a [(&'a str, f64, f64)],
        status: InvoiceStatus,
        due: NaiveDate,
        created: DateTime<Utc>,
    }
    let specs = [
        Spec {
            n: 1,
            customer: 1,
            customer_name: "TechStart Inc",
            lines: &[("Cloud migration consulting", 40.0, 150.0), ("Support retainer", 1.0, 2_000.0)],
            status: InvoiceStatus::Paid,
            due: day(2024, 1, 31),
            created: at(2024, 1, 2, 10, 0),
        },
        Spec {
            n: 2,
            customer: 2,
            customer_name: "Globex Ltd",
            lines: &[("Annual license", 1.0, 12_000.0)],
            status: InvoiceStatus::Sent,
            due: day(2024, 2, 28),
            created: at(2024, 1, 29, 14, 0),
        },
        Spec {
            n: 3,
            customer: 4,
            customer_name: "Umbrella Retail",
            lines: &[("POS terminals", 10.0, 450.0), ("Installation", 1.0, 800.0)],
            status: InvoiceStatus::Pending,
            due: day(2024, 3, 10),
            created: at(2024, 2, 9, 9, 30),
        },
        Spec {
            n: 4,
            customer: 3,
            customer_name: "Initech",
            lines: &[("Security audit", 1.0, 6_500.0)],
            status: InvoiceStatus::Overdue,
            due: day(2024, 1, 15),
            created: at(2023, 12, 15, 16, 0),
        },
        Spec {
            n: 5,
            customer: 6,
            customer_name: "Wayne Media",
            lines: &[("Website redesign", 1.0, 9_800.0)],
            status: InvoiceStatus::Draft,
            due: day(2024, 3, 31),
            created: at(2024, 2, 18, 11, 0),
        },
        Spec {
            n: 6,
            customer: 8,
            customer_name: "Hooli Labs",
            lines: &[("Data pipeline build", 60.0, 140.0)],
            status: InvoiceStatus::Paid,
            due: day(2024, 2, 15),
            created: at(2024, 1, 16, 13, 0),
        },
        Spec {
            n: 7,
            customer: 7,
            customer_name: "Soylent Foods",
            lines: &[("Inventory scanners", 5.0, 320.0)],
            status: InvoiceStatus::Cancelled,
            due: day(2024, 2, 1),
            created: at(2024, 1, 3, 8, 0),
        },
        Spec {
            n: 8,
            customer: 1,
            customer_name: "TechStart Inc",
            lines: &[("Kubernetes workshop", 2.0, 1_750.0)],
            status: InvoiceStatus::Sent,
            due: day(2024, 3, 5),
            created: at(2024, 2, 5, 15, 0),
        },
    ];

    specs
        .iter()
        .map(|spec| {
            let items: Vec<InvoiceItem> = spec
                .lines
                .iter()
                .enumerate()
                .map(|(i, (desc, qty, price))| {
                    InvoiceItem::priced(format!("li-{}-{}", spec.n, i + 1), *desc, *qty, *price, 10.0)
                })
                .collect();
            let (subtotal, tax, total) = invoice_totals(&items);
            Invoice {
                id: format!("inv-{}", spec.n),
                number: format!("INV-2024-{:03}", spec.n),
                customer_id: format!("cust-{}", spec.customer),
                customer_name: spec.customer_name.into(),
                items,
                subtotal,
                tax,
                total,
                status: spec.status,
                due_date: spec.due,
                created_at: spec.created,
                paid_at: (spec.status == InvoiceStatus::Paid).then(|| at(2024, 2, 1, 12, 0)),
                notes: None,
            }
        })
        .collect()
}

fn products() -> Vec<Product> {
    let product = |n: u32,
                   sku: &str,
                   name: &str,
                   category: &str,
                   cost: f64,
                   price: f64,
                   reorder: i64,
                   stock: i64,
                   warehouse: u32| Product {
        id: format!("prod-{}", n),
        sku: sku.into(),
        name: name.into(),
        description: None,
        category: category.into(),
        unit: "pcs".into(),
        purchase_price: cost,
        selling_price: price,
        tax_rate: 10.0,
        reorder_level: reorder,
        current_stock: stock,
        warehouse_id: format!("wh-{}", warehouse),
        barcode: Some(format!("00{}{}", 4_006_381_330 + n as u64, n)),
        status: ActiveStatus::Active,
        created_at: at(2023, 6, n, 9, 0),
    };
    vec![
        product(1, "LAP-001", "ThinkPad X1 Carbon", "Laptops", 1_150.0, 1_499.0, 5, 24, 1),
        product(2, "MON-027", "Dell 27\" Monitor", "Monitors", 210.0, 329.0, 10, 8, 1),
        product(3, "KEY-104", "Mechanical Keyboard", "Accessories", 45.0, 89.0, 20, 65, 2),
        product(4, "MOU-210", "Wireless Mouse", "Accessories", 12.0, 29.0, 25, 25, 2),
        product(5, "POS-500", "POS Terminal", "Hardware", 300.0, 450.0, 4, 2, 1),
        product(6, "CBL-HDMI", "HDMI Cable 2m", "Accessories", 2.5, 9.0, 50, 310, 2),
        product(7, "RTR-AX6", "Wi-Fi 6 Router", "Networking", 95.0, 159.0, 6, 14, 1),
        product(8, "SCN-100", "Barcode Scanner", "Hardware", 48.0, 79.0, 8, 3, 2),
    ]
}

fn warehouses() -> Vec<Warehouse> {
    vec![
        Warehouse {
            id: "wh-1".into(),
            name: "Main Warehouse".into(),
            address: text("12 Harbor Road, Oakland, CA"),
            is_default: true,
        },
        Warehouse {
            id: "wh-2".into(),
            name: "East Coast Depot".into(),
            address: text("88 Industrial Ave, Newark, NJ"),
            is_default: false,
        },
    ]
}

fn vendors() -> Vec<Vendor> {
    let vendor = |n: u32, name: &str, email: &str, terms: &str, purchases: f64| Vendor {
        id: format!("vendor-{}", n),
        name: name.into(),
        email: email.into(),
        phone: None,
        address: None,
        payment_terms: text(terms),
        status: ActiveStatus::Active,
        created_at: at(2022, 3, n, 9, 0),
        total_purchases: purchases,
    };
    vec![
        vendor(1, "Amazon Web Services", "billing@aws.example", "Net 30", 38_400.0),
        vendor(2, "Dell Technologies", "orders@dell.example", "Net 45", 52_100.0),
        vendor(3, "Office Depot", "accounts@officedepot.example", "Net 15", 4_250.0),
        vendor(4, "Delta Airlines", "corporate@delta.example", "Due on receipt", 9_800.0),
    ]
}

fn expense_categories() -> Vec<ExpenseCategory> {
    let category = |n: u32, name: &str, color: &str, limit: Option<f64>| ExpenseCategory {
        id: format!("cat-{}", n),
        name: name.into(),
        description: None,
        color: color.into(),
        icon: None,
        budget_limit: limit,
        parent_id: None,
    };
    vec![
        category(1, "Infrastructure", "#3b82f6", Some(10_000.0)),
        category(2, "Software", "#8b5cf6", Some(5_000.0)),
        category(3, "Travel", "#f59e0b", Some(4_000.0)),
        category(4, "Marketing", "#ec4899", Some(6_000.0)),
        category(5, "Office Supplies", "#10b981", None),
        category(6, "Meals", "#ef4444", None),
    ]
}

fn expenses() -> Vec<Expense> {
    struct Spec<'a> {
        n: u32,
        title: &'a str,
        amount: f64,
        category: u32,
        category_name: &'a str,
        vendor: Option<u32>,
        method: PaymentMethod,
        paid_by: PaidBy,
        status: ExpenseStatus,
        date: NaiveDate,
    }
    let specs = [
        Spec {
            n: 1,
            title: "AWS monthly bill",
            amount: 3_200.0,
            category: 1,
            category_name: "Infrastructure",
            vendor: Some(1),
            method: PaymentMethod::Card,
            paid_by: PaidBy::Company,
            status: ExpenseStatus::Paid,
            date: day(2024, 2, 1),
        },
        Spec {
            n: 2,
            title: "Developer laptops",
            amount: 4_600.0,
            category: 1,
            category_name: "Infrastructure",
            vendor: Some(2),
            method: PaymentMethod::BankTransfer,
            paid_by: PaidBy::Company,
            status: ExpenseStatus::Approved,
            date: day(2024, 2, 6),
        },
        Spec {
            n: 3,
            title: "Design tool licenses",
            amount: 720.0,
            category: 2,
            category_name: "Software",
            vendor: None,
            method: PaymentMethod::Card,
            paid_by: PaidBy::Company,
            status: ExpenseStatus::Paid,
            date: day(2024, 2, 8),
        },
        Spec {
            n: 4,
            title: "Client visit flights",
            amount: 1_140.0,
            category: 3,
            category_name: "Travel",
            vendor: Some(4),
            method: PaymentMethod::Card,
            paid_by: PaidBy::Employee,
            status: ExpenseStatus::Submitted,
            date: day(2024, 2, 12),
        },
        Spec {
            n: 5,
            title: "Conference booth",
            amount: 2_500.0,
            category: 4,
            category_name: "Marketing",
            vendor: None,
            method: PaymentMethod::BankTransfer,
            paid_by: PaidBy::Company,
            status: ExpenseStatus::Approved,
            date: day(2024, 2, 14),
        },
        Spec {
            n: 6,
            title: "Team lunch",
            amount: 186.0,
            category: 6,
            category_name: "Meals",
            vendor: None,
            method: PaymentMethod::Cash,
            paid_by: PaidBy::Employee,
            status: ExpenseStatus::Submitted,
            date: day(2024, 2, 16),
        },
        Spec {
            n: 7,
            title: "Printer paper and toner",
            amount: 240.0,
            category: 5,
            category_name: "Office Supplies",
            vendor: Some(3),
            method: PaymentMethod::Card,
            paid_by: PaidBy::Company,
            status: ExpenseStatus::Paid,
            date: day(2024, 1, 22),
        },
        Spec {
            n: 8,
            title: "Hotel for sales summit",
            amount: 890.0,
            category: 3,
            category_name: "Travel",
            vendor: None,
            method: PaymentMethod::Card,
            paid_by: PaidBy::Employee,
            status: ExpenseStatus::Reimbursed,
            date: day(2024, 1, 18),
        },
    ];

    specs
        .iter()
        .map(|spec| {
            let tax = spec.amount * 0.1;
            let by_employee = spec.paid_by == PaidBy::Employee;
            Expense {
                id: format!("exp-{}", spec.n),
                title: spec.title.into(),
                amount: spec.amount,
                tax,
                total: spec.amount + tax,
                category: spec.category_name.into(),
                category_id: format!("cat-{}", spec.category),
                vendor: spec.vendor.map(|v| vendor_name(v).to_string()),
                vendor_id: spec.vendor.map(|v| format!("vendor-{}", v)),
                payment_method: spec.method,
                paid_by: spec.paid_by,
                employee_id: by_employee.then(|| "emp-3".to_string()),
                employee_name: by_employee.then(|| "Daniel Kim".to_string()),
                reimbursable: by_employee,
                project_id: None,
                project_name: None,
                cost_center: None,
                tags: Vec::new(),
                receipt_url: None,
                notes: None,
                status: spec.status,
                date: spec.date,
                created_at: spec
                    .date
                    .and_hms_opt(10, 0, 0)
                    .map(|dt| dt.and_utc())
                    .unwrap_or_default(),
                approved_by: matches!(
                    spec.status,
                    ExpenseStatus::Approved | ExpenseStatus::Paid | ExpenseStatus::Reimbursed
                )
                .then(|| "user-3".to_string()),
                approved_at: None,
            }
        })
        .collect()
}

fn vendor_name(n: u32) -> &'static str {
    match n {
        1 => "Amazon Web Services",
        2 => "Dell Technologies",
        3 => "Office Depot",
        _ => "Delta Airlines",
    }
}

fn subscriptions() -> Vec<Subscription> {
    let sub = |n: u32,
               vendor: &str,
               plan: &str,
               cycle: BillingPeriod,
               amount: f64,
               renewal: NaiveDate,
               status: SubscriptionStatus,
               category: u32| Subscription {
        id: format!("sub-{}", n),
        vendor: vendor.into(),
        vendor_id: None,
        plan: plan.into(),
        billing_cycle: cycle,
        amount,
        currency: "USD".into(),
        next_renewal: renewal,
        status,
        owner: "Alex Morgan".into(),
        owner_id: "user-2".into(),
        payment_method: "Corporate card".into(),
        category_id: format!("cat-{}", category),
        notes: None,
        created_at: at(2023, 1, n, 9, 0),
    };
    vec![
        sub(1, "GitHub", "Team", BillingPeriod::Monthly, 84.0, day(2024, 3, 1), SubscriptionStatus::Active, 2),
        sub(2, "Slack", "Pro", BillingPeriod::Monthly, 145.0, day(2024, 3, 4), SubscriptionStatus::Active, 2),
        sub(3, "Figma", "Organization", BillingPeriod::Yearly, 5_400.0, day(2024, 9, 12), SubscriptionStatus::Active, 2),
        sub(4, "Datadog", "Pro", BillingPeriod::Monthly, 460.0, day(2024, 3, 10), SubscriptionStatus::Active, 1),
        sub(5, "HubSpot", "Starter", BillingPeriod::Monthly, 50.0, day(2024, 3, 15), SubscriptionStatus::Paused, 4),
    ]
}

fn budgets() -> Vec<Budget> {
    let budget = |n: u32, category: u32, name: &str, amount: f64, spent: f64| Budget {
        id: format!("budget-{}", n),
        category_id: format!("cat-{}", category),
        category_name: name.into(),
        amount,
        period: BillingPeriod::Monthly,
        spent,
        alert_threshold: 80.0,
        start_date: day(2024, 2, 1),
        end_date: day(2024, 2, 29),
    };
    vec![
        budget(1, 1, "Infrastructure", 10_000.0, 7_800.0),
        budget(2, 2, "Software", 5_000.0, 1_520.0),
        budget(3, 3, "Travel", 4_000.0, 3_600.0),
    ]
}

fn employees() -> Vec<Employee> {
    let employee = |n: u32,
                    name: &str,
                    department: &str,
                    position: &str,
                    salary: f64,
                    status: EmployeeStatus,
                    joined: NaiveDate| Employee {
        id: format!("emp-{}", n),
        employee_id: format!("EMP{:03}", n),
        user_id: None,
        name: name.into(),
        email: format!("{}@acme.com", name.to_lowercase().replace(' ', ".")),
        phone: None,
        department: department.into(),
        position: position.into(),
        manager: None,
        join_date: joined,
        salary,
        status,
        avatar: None,
    };
    vec![
        employee(1, "Rachel Adams", "Engineering", "Engineering Manager", 165_000.0, EmployeeStatus::Active, day(2021, 4, 12)),
        employee(2, "Victor Nguyen", "Engineering", "Senior Developer", 142_000.0, EmployeeStatus::Active, day(2022, 1, 10)),
        employee(3, "Daniel Kim", "Sales", "Account Executive", 98_000.0, EmployeeStatus::Active, day(2022, 7, 1)),
        employee(4, "Grace Okafor", "Finance", "Accountant", 88_000.0, EmployeeStatus::OnLeave, day(2023, 2, 20)),
        employee(5, "Lucas Schmidt", "Operations", "SRE", 135_000.0, EmployeeStatus::Active, day(2022, 11, 7)),
        employee(6, "Fatima Noor", "People", "HR Generalist", 79_000.0, EmployeeStatus::Inactive, day(2021, 9, 15)),
    ]
}

fn projects() -> Vec<Project> {
    let project = |n: u32,
                   name: &str,
                   status: ProjectStatus,
                   start: NaiveDate,
                   budget: f64,
                   spent: f64,
                   members: &[&str]| Project {
        id: format!("proj-{}", n),
        name: name.into(),
        description: None,
        status,
        start_date: start,
        end_date: None,
        budget: Some(budget),
        spent,
        manager_id: text("emp-1"),
        manager_name: text("Rachel Adams"),
        members: members.iter().map(|m| m.to_string()).collect(),
        created_at: at(2023, 10, n, 9, 0),
    };
    vec![
        project(1, "Customer Portal v2", ProjectStatus::Active, day(2024, 1, 8), 60_000.0, 21_400.0, &["emp-1", "emp-2"]),
        project(2, "Warehouse Automation", ProjectStatus::Planning, day(2024, 3, 1), 45_000.0, 0.0, &["emp-5"]),
        project(3, "Billing Migration", ProjectStatus::OnHold, day(2023, 11, 15), 30_000.0, 12_750.0, &["emp-2", "emp-4"]),
    ]
}

fn tasks() -> Vec<Task> {
    let task = |n: u32,
                title: &str,
                project: u32,
                project_name: &str,
                assignee: Option<(&str, &str)>,
                status: TaskStatus,
                priority: Priority| Task {
        id: format!("task-{}", n),
        title: title.into(),
        description: None,
        project_id: format!("proj-{}", project),
        project_name: project_name.into(),
        assignee_id: assignee.map(|(id, _)| id.to_string()),
        assignee_name: assignee.map(|(_, name)| name.to_string()),
        status,
        priority,
        due_date: Some(day(2024, 3, n)),
        created_at: at(2024, 1, 10 + n, 9, 0),
        completed_at: (status == TaskStatus::Done).then(|| at(2024, 2, 10, 17, 0)),
    };
    let rachel = Some(("emp-1", "Rachel Adams"));
    let victor = Some(("emp-2", "Victor Nguyen"));
    let lucas = Some(("emp-5", "Lucas Schmidt"));
    vec![
        task(1, "Design login flow", 1, "Customer Portal v2", rachel, TaskStatus::Done, Priority::High),
        task(2, "Implement invoice download", 1, "Customer Portal v2", victor, TaskStatus::InProgress, Priority::High),
        task(3, "Write API docs", 1, "Customer Portal v2", None, TaskStatus::Todo, Priority::Medium),
        task(4, "Evaluate conveyor vendors", 2, "Warehouse Automation", lucas, TaskStatus::Todo, Priority::Low),
        task(5, "Map legacy billing fields", 3, "Billing Migration", victor, TaskStatus::Review, Priority::Urgent),
        task(6, "Set up staging database", 1, "Customer Portal v2", lucas, TaskStatus::Done, Priority::Medium),
    ]
}

fn servers() -> Vec<Server> {
    struct Spec<'a> {
        n: u32,
        name: &'a str,
        provider: Provider,
        region: &'a str,
        environment: Environment,
        ip: &'a str,
        size: (&'a str, &'a str, &'a str),
        cost: f64,
        status: ServerStatus,
        uptime: f64,
        usage: (f64, f64, f64),
        checklist: SecurityChecklist,
    }
    let hardened = SecurityChecklist {
        ssh_keys: true,
        fail2ban: true,
        firewall: true,
        backups: true,
    };
    let specs = [
        Spec {
            n: 1,
            name: "prod-api-01",
            provider: Provider::Aws,
            region: "us-east-1",
            environment: Environment::Production,
            ip: "54.210.11.20",
            size: ("4 vCPU", "16 GB", "200 GB SSD"),
            cost: 280.0,
            status: ServerStatus::Online,
            uptime: 99.98,
            usage: (42.0, 61.0, 48.0),
            checklist: hardened.clone(),
        },
        Spec {
            n: 2,
            name: "prod-db-01",
            provider: Provider::Aws,
            region: "us-east-1",
            environment: Environment::Production,
            ip: "54.210.11.31",
            size: ("8 vCPU", "32 GB", "1 TB SSD"),
            cost: 640.0,
            status: ServerStatus::Online,
            uptime: 99.95,
            usage: (55.0, 72.0, 66.0),
            checklist: hardened.clone(),
        },
        Spec {
            n: 3,
            name: "staging-app-01",
            provider: Provider::DigitalOcean,
            region: "nyc3",
            environment: Environment::Staging,
            ip: "159.89.40.12",
            size: ("2 vCPU", "4 GB", "80 GB SSD"),
            cost: 48.0,
            status: ServerStatus::Online,
            uptime: 99.5,
            usage: (18.0, 40.0, 35.0),
            checklist: SecurityChecklist {
                ssh_keys: true,
                fail2ban: false,
                firewall: true,
                backups: false,
            },
        },
        Spec {
            n: 4,
            name: "dev-sandbox",
            provider: Provider::Hostinger,
            region: "eu-central",
            environment: Environment::Development,
            ip: "82.180.9.44",
            size: ("2 vCPU", "8 GB", "100 GB NVMe"),
            cost: 19.0,
            status: ServerStatus::Offline,
            uptime: 97.2,
            usage: (0.0, 0.0, 22.0),
            checklist: SecurityChecklist {
                ssh_keys: true,
                ..SecurityChecklist::default()
            },
        },
        Spec {
            n: 5,
            name: "prod-worker-01",
            provider: Provider::Linode,
            region: "us-west",
            environment: Environment::Production,
            ip: "172.105.3.77",
            size: ("4 vCPU", "8 GB", "160 GB SSD"),
            cost: 96.0,
            status: ServerStatus::Maintenance,
            uptime: 99.1,
            usage: (12.0, 30.0, 51.0),
            checklist: hardened,
        },
    ];

    specs
        .into_iter()
        .map(|spec| {
            let online = spec.status == ServerStatus::Online;
            Server {
                id: format!("srv-{}", spec.n),
                name: spec.name.into(),
                provider: spec.provider,
                region: spec.region.into(),
                environment: spec.environment,
                public_ip: spec.ip.into(),
                hostname: Some(format!("{}.acme.internal", spec.name)),
                os: "Ubuntu 22.04 LTS".into(),
                cpu: spec.size.0.into(),
                ram: spec.size.1.into(),
                disk: spec.size.2.into(),
                ssh_port: 22,
                firewall_enabled: spec.checklist.firewall,
                monitoring_enabled: spec.environment == Environment::Production,
                monthly_cost: spec.cost,
                currency: "USD".into(),
                billing_cycle: ServerBilling::Monthly,
                renewal_date: day(2024, 3, spec.n),
                status: spec.status,
                uptime: spec.uptime,
                last_check: online.then(|| at(2024, 2, 20, 12, 0)),
                cpu_usage: Some(spec.usage.0),
                ram_usage: Some(spec.usage.1),
                disk_usage: Some(spec.usage.2),
                tags: vec![spec.environment.as_str().to_string()],
                owner_id: "user-4".into(),
                owner_name: "Marcus Lee".into(),
                notes: None,
                security_checklist: spec.checklist,
                created_at: at(2023, 5, spec.n, 9, 0),
            }
        })
        .collect()
}

fn services() -> Vec<ServiceApp> {
    let service = |n: u32,
                   name: &str,
                   server: u32,
                   server_name: &str,
                   domain: Option<&str>,
                   status: ServiceStatus,
                   deploy: DeployMethod,
                   ports: &[&str]| ServiceApp {
        id: format!("svc-{}", n),
        name: name.into(),
        server_id: format!("srv-{}", server),
        server_name: server_name.into(),
        domain: domain.map(str::to_string),
        status,
        deploy_method: deploy,
        ports: ports.iter().map(|p| p.to_string()).collect(),
        repo_url: Some(format!("https://git.acme.internal/platform/{}", name)),
        last_deploy_at: Some(at(2024, 2, 19, 16, n)),
        owner_id: "user-4".into(),
        owner_name: "Marcus Lee".into(),
        health_check_url: domain.map(|d| format!("https://{}/health", d)),
        created_at: at(2023, 6, n, 9, 0),
    };
    vec![
        service(1, "api-gateway", 1, "prod-api-01", Some("api.acme.com"), ServiceStatus::Running, DeployMethod::Docker, &["443"]),
        service(2, "postgres", 2, "prod-db-01", None, ServiceStatus::Running, DeployMethod::Systemd, &["5432"]),
        service(3, "web-frontend", 1, "prod-api-01", Some("app.acme.com"), ServiceStatus::Running, DeployMethod::Docker, &["80", "443"]),
        service(4, "staging-app", 3, "staging-app-01", Some("staging.acme.com"), ServiceStatus::Running, DeployMethod::Pm2, &["3000"]),
        service(5, "queue-worker", 5, "prod-worker-01", None, ServiceStatus::Maintenance, DeployMethod::Kubernetes, &[]),
    ]
}

fn incidents() -> Vec<Incident> {
    let event = |id: &str, when: DateTime<Utc>, description: &str| IncidentEvent {
        id: id.into(),
        timestamp: when,
        description: description.into(),
        created_by: "Marcus Lee".into(),
    };
    vec![
        Incident {
            id: "inc-1".into(),
            title: "API latency spike".into(),
            severity: Severity::High,
            affected_servers: vec!["srv-1".into()],
            affected_services: vec!["svc-1".into()],
            status: IncidentStatus::Investigating,
            impact: "Checkout requests slowed to over 3s".into(),
            start_time: at(2024, 2, 20, 9, 15),
            end_time: None,
            timeline: vec![
                event("ev-1", at(2024, 2, 20, 9, 15), "Alert fired on p95 latency"),
                event("ev-2", at(2024, 2, 20, 9, 40), "Traced to connection pool exhaustion"),
            ],
            resolution: None,
            created_by: "user-4".into(),
            created_at: at(2024, 2, 20, 9, 15),
        },
        Incident {
            id: "inc-2".into(),
            title: "Dev sandbox unreachable".into(),
            severity: Severity::Low,
            affected_servers: vec!["srv-4".into()],
            affected_services: Vec::new(),
            status: IncidentStatus::Open,
            impact: "Developers cannot reach the sandbox".into(),
            start_time: at(2024, 2, 19, 18, 0),
            end_time: None,
            timeline: Vec::new(),
            resolution: None,
            created_by: "user-4".into(),
            created_at: at(2024, 2, 19, 18, 0),
        },
        Incident {
            id: "inc-3".into(),
            title: "Database disk nearly full".into(),
            severity: Severity::Critical,
            affected_servers: vec!["srv-2".into()],
            affected_services: vec!["svc-2".into()],
            status: IncidentStatus::Resolved,
            impact: "Writes at risk of failing".into(),
            start_time: at(2024, 2, 2, 3, 10),
            end_time: Some(at(2024, 2, 2, 4, 5)),
            timeline: vec![event("ev-3", at(2024, 2, 2, 3, 10), "Disk usage above 95%")],
            resolution: text("Rotated WAL archives and grew the volume"),
            created_by: "user-4".into(),
            created_at: at(2024, 2, 2, 3, 10),
        },
    ]
}

fn maintenance_windows() -> Vec<MaintenanceWindow> {
    vec![
        MaintenanceWindow {
            id: "mw-1".into(),
            server_id: text("srv-5"),
            server_name: text("prod-worker-01"),
            service_id: text("svc-5"),
            service_name: text("queue-worker"),
            reason: "Kernel upgrade".into(),
            scheduled_start: at(2024, 2, 20, 22, 0),
            scheduled_end: at(2024, 2, 21, 0, 0),
            status: MaintenanceStatus::InProgress,
            notify_teams: vec!["platform".into()],
            created_by: "user-4".into(),
            created_at: at(2024, 2, 15, 10, 0),
        },
        MaintenanceWindow {
            id: "mw-2".into(),
            server_id: text("srv-2"),
            server_name: text("prod-db-01"),
            service_id: None,
            service_name: None,
            reason: "PostgreSQL minor version update".into(),
            scheduled_start: at(2024, 3, 2, 2, 0),
            scheduled_end: at(2024, 3, 2, 3, 0),
            status: MaintenanceStatus::Scheduled,
            notify_teams: vec!["platform".into(), "finance".into()],
            created_by: "user-4".into(),
            created_at: at(2024, 2, 18, 10, 0),
        },
    ]
}

fn notifications() -> Vec<Notification> {
    let note = |n: u32,
                kind: NotificationType,
                module: NotificationModule,
                title: &str,
                message: &str,
                read: bool,
                url: &str,
                when: DateTime<Utc>| Notification {
        id: format!("notif-{}", n),
        kind,
        module,
        title: title.into(),
        message: message.into(),
        read,
        action_url: text(url),
        created_at: when,
    };
    vec![
        note(1, NotificationType::Error, NotificationModule::Servers, "Incident opened", "API latency spike on prod-api-01", false, "/servers/incidents", at(2024, 2, 20, 9, 16)),
        note(2, NotificationType::Warning, NotificationModule::Erp, "Low stock", "POS Terminal is below its reorder level", false, "/products", at(2024, 2, 19, 14, 0)),
        note(3, NotificationType::Info, NotificationModule::Expense, "Expense submitted", "Daniel Kim submitted Client visit flights", false, "/expenses/approvals", at(2024, 2, 12, 11, 0)),
        note(4, NotificationType::Success, NotificationModule::Erp, "Invoice paid", "INV-2024-006 was paid by Hooli Labs", true, "/invoices", at(2024, 2, 1, 12, 0)),
        note(5, NotificationType::Warning, NotificationModule::Expense, "Budget alert", "Travel spending reached 90% of budget", true, "/expenses/budgets", at(2024, 1, 30, 9, 0)),
    ]
}

fn audit_logs() -> Vec<AuditLog> {
    let log = |n: u32, action: &str, module: &str, entity: &str, entity_id: &str, when: DateTime<Utc>| AuditLog {
        id: format!("audit-{}", n),
        user_id: "user-2".into(),
        user_name: "Alex Morgan".into(),
        action: action.into(),
        module: module.into(),
        entity_type: entity.into(),
        entity_id: entity_id.into(),
        changes: None,
        ip_address: text("10.0.0.12"),
        created_at: when,
    };
    vec![
        log(1, "update", "servers", "incident", "inc-1", at(2024, 2, 20, 9, 40)),
        log(2, "create", "erp", "invoice", "inv-5", at(2024, 2, 18, 11, 0)),
        log(3, "approve", "expense", "expense", "exp-2", at(2024, 2, 7, 15, 0)),
    ]
}
