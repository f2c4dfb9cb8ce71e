//! # Navigation Shell
//!
//! Everything around the pages: the route table with its authentication
//! guard, the role-gated sidebar, the command palette and the header.
//!
//! Route resolution is where the session bootstrap happens. Resolving a
//! protected route while signed in runs [`AppState::initialize_data`] first,
//! so the first page a user opens after signing in always has data. While
//! signed out, protected routes redirect to `/login`; while signed in,
//! `/login` itself redirects to `/dashboard`.
//!
//! Many sidebar entries have no dedicated page yet and render the dashboard;
//! the route table records that mapping explicitly.

use crate::model::{User, UserRole};
use crate::state::AppState;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    Login,
    Dashboard,
    Customers,
    Invoices,
    Products,
    ExpensesOverview,
    ServersOverview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub page: Page,
    pub protected: bool,
}

const fn public(path: &'static str, page: Page) -> Route {
    Route {
        path,
        page,
        protected: false,
    }
}

const fn protected(path: &'static str, page: Page) -> Route {
    Route {
        path,
        page,
        protected: true,
    }
}

pub const ROUTES: &[Route] = &[
    public("/", Page::Home),
    public("/login", Page::Login),
    protected("/dashboard", Page::Dashboard),
    // sales
    protected("/customers", Page::Customers),
    protected("/invoices", Page::Invoices),
    protected("/leads", Page::Dashboard),
    protected("/payments", Page::Dashboard),
    // purchases
    protected("/vendors", Page::Dashboard),
    protected("/purchase-orders", Page::Dashboard),
    // inventory
    protected("/products", Page::Products),
    protected("/warehouses", Page::Dashboard),
    protected("/stock-movements", Page::Dashboard),
    // expenses
    protected("/expenses", Page::ExpensesOverview),
    protected("/expenses/list", Page::ExpensesOverview),
    protected("/expenses/categories", Page::ExpensesOverview),
    protected("/expenses/budgets", Page::ExpensesOverview),
    protected("/expenses/subscriptions", Page::ExpensesOverview),
    protected("/expenses/reimbursements", Page::ExpensesOverview),
    // finance
    protected("/finance/accounts", Page::Dashboard),
    protected("/finance/transactions", Page::Dashboard),
    protected("/finance/reports", Page::Dashboard),
    // hr
    protected("/employees", Page::Dashboard),
    protected("/leave-requests", Page::Dashboard),
    protected("/attendance", Page::Dashboard),
    protected("/payroll", Page::Dashboard),
    // projects
    protected("/projects", Page::Dashboard),
    protected("/tasks", Page::Dashboard),
    // servers
    protected("/servers", Page::ServersOverview),
    protected("/servers/list", Page::ServersOverview),
    protected("/servers/services", Page::ServersOverview),
    protected("/servers/incidents", Page::ServersOverview),
    protected("/servers/maintenance", Page::ServersOverview),
    protected("/servers/costs", Page::ServersOverview),
    // settings
    protected("/settings", Page::Dashboard),
    protected("/settings/users", Page::Dashboard),
    protected("/settings/roles", Page::Dashboard),
    protected("/settings/audit", Page::Dashboard),
];

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Strips the query string and any trailing slash, and adds a leading one.
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or("").trim();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

pub fn find_route(path: &str) -> Option<&'static Route> {
    let path = normalize_path(path);
    ROUTES.iter().find(|route| route.path == path)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render { path: String, page: Page },
    Redirect { from: String, to: &'static str },
    NotFound { path: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub resolution: Resolution,
    /// Whether resolving the route seeded the collections.
    pub seeded: bool,
}

/// Resolves `path` against the route table, applying the auth guard.
pub fn resolve(state: &mut AppState, path: &str) -> Navigation {
    let normalized = normalize_path(path);
    let Some(route) = find_route(&normalized) else {
        log::debug!("No route for {}", normalized);
        return Navigation {
            resolution: Resolution::NotFound { path: normalized },
            seeded: false,
        };
    };

    if route.page == Page::Login && state.is_authenticated() {
        log::debug!("Already signed in, redirecting {} to {}", normalized, DASHBOARD_PATH);
        return Navigation {
            resolution: Resolution::Redirect {
                from: normalized,
                to: DASHBOARD_PATH,
            },
            seeded: false,
        };
    }

    if !route.protected {
        return Navigation {
            resolution: Resolution::Render {
                path: normalized,
                page: route.page,
            },
            seeded: false,
        };
    }

    if !state.is_authenticated() {
        log::debug!("Redirecting {} to {}", normalized, LOGIN_PATH);
        return Navigation {
            resolution: Resolution::Redirect {
                from: normalized,
                to: LOGIN_PATH,
            },
            seeded: false,
        };
    }

    let seeded = state.initialize_data();
    Navigation {
        resolution: Resolution::Render {
            path: normalized,
            page: route.page,
        },
        seeded,
    }
}

// --- Sidebar ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub title: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavSection {
    pub title: &'static str,
    pub href: Option<&'static str>,
    /// `None` means visible to everyone.
    pub roles: Option<&'static [UserRole]>,
    pub children: &'static [NavLink],
}

const fn link(title: &'static str, href: &'static str) -> NavLink {
    NavLink { title, href }
}

use UserRole::{Admin, Devops, Finance, Hr, Inventory, Owner, Sales};

pub const SIDEBAR: &[NavSection] = &[
    NavSection {
        title: "Dashboard",
        href: Some("/dashboard"),
        roles: None,
        children: &[],
    },
    NavSection {
        title: "Sales",
        href: None,
        roles: Some(&[Owner, Admin, Sales]),
        children: &[
            link("Customers", "/customers"),
            link("Leads", "/leads"),
            link("Invoices", "/invoices"),
            link("Payments", "/payments"),
        ],
    },
    NavSection {
        title: "Purchases",
        href: None,
        roles: Some(&[Owner, Admin, Inventory]),
        children: &[
            link("Vendors", "/vendors"),
            link("Purchase Orders", "/purchase-orders"),
        ],
    },
    NavSection {
        title: "Inventory",
        href: None,
        roles: Some(&[Owner, Admin, Inventory]),
        children: &[
            link("Products", "/products"),
            link("Warehouses", "/warehouses"),
            link("Stock Movements", "/stock-movements"),
        ],
    },
    NavSection {
        title: "Expenses",
        href: None,
        roles: Some(&[Owner, Admin, Finance]),
        children: &[
            link("Overview", "/expenses"),
            link("All Expenses", "/expenses/list"),
            link("Categories", "/expenses/categories"),
            link("Budgets", "/expenses/budgets"),
            link("Subscriptions", "/expenses/subscriptions"),
            link("Reimbursements", "/expenses/reimbursements"),
        ],
    },
    NavSection {
        title: "Finance",
        href: None,
        roles: Some(&[Owner, Admin, Finance]),
        children: &[
            link("Accounts", "/finance/accounts"),
            link("Transactions", "/finance/transactions"),
            link("Reports", "/finance/reports"),
        ],
    },
    NavSection {
        title: "HR & Payroll",
        href: None,
        roles: Some(&[Owner, Admin, Hr]),
        children: &[
            link("Employees", "/employees"),
            link("Leave Requests", "/leave-requests"),
            link("Attendance", "/attendance"),
            link("Payroll", "/payroll"),
        ],
    },
    NavSection {
        title: "Projects",
        href: None,
        roles: None,
        children: &[link("All Projects", "/projects"), link("Tasks", "/tasks")],
    },
    NavSection {
        title: "Servers",
        href: None,
        roles: Some(&[Owner, Admin, Devops]),
        children: &[
            link("Overview", "/servers"),
            link("All Servers", "/servers/list"),
            link("Services", "/servers/services"),
            link("Incidents", "/servers/incidents"),
            link("Maintenance", "/servers/maintenance"),
            link("Costs", "/servers/costs"),
        ],
    },
    NavSection {
        title: "Settings",
        href: None,
        roles: Some(&[Owner, Admin]),
        children: &[
            link("Organization", "/settings"),
            link("Users", "/settings/users"),
            link("Roles", "/settings/roles"),
            link("Audit Log", "/settings/audit"),
        ],
    },
];

impl NavSection {
    /// Role-restricted sections are hidden when nobody is signed in.
    pub fn visible_to(&self, user: Option<&User>) -> bool {
        match (self.roles, user) {
            (None, _) => true,
            (Some(roles), Some(user)) => roles.contains(&user.role),
            (Some(_), None) => false,
        }
    }
}

pub fn sidebar(user: Option<&User>) -> Vec<&'static NavSection> {
    SIDEBAR.iter().filter(|s| s.visible_to(user)).collect()
}

// --- Command palette ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteGroup {
    QuickActions,
    Navigation,
    RecentCustomers,
    RecentServers,
}

impl PaletteGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            PaletteGroup::QuickActions => "Quick Actions",
            PaletteGroup::Navigation => "Navigation",
            PaletteGroup::RecentCustomers => "Recent Customers",
            PaletteGroup::RecentServers => "Recent Servers",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteItem {
    pub group: PaletteGroup,
    pub label: String,
    pub href: String,
}

const QUICK_ACTIONS: &[(&str, &str)] = &[
    ("Create Invoice", "/invoices/new"),
    ("Add Expense", "/expenses/new"),
    ("Add Server", "/servers/new"),
    ("Log Incident", "/servers/incidents/new"),
];

const PALETTE_NAVIGATION: &[(&str, &str)] = &[
    ("Dashboard", "/dashboard"),
    ("Customers", "/customers"),
    ("Invoices", "/invoices"),
    ("Products", "/products"),
    ("Expenses", "/expenses"),
    ("Servers", "/servers"),
    ("Projects", "/projects"),
    ("Settings", "/settings"),
];

const RECENT_LIMIT: usize = 3;

pub fn palette_items(state: &AppState) -> Vec<PaletteItem> {
    let fixed = |group: PaletteGroup, entries: &[(&str, &str)]| -> Vec<PaletteItem> {
        entries
            .iter()
            .map(|(label, href)| PaletteItem {
                group,
                label: label.to_string(),
                href: href.to_string(),
            })
            .collect()
    };

    let mut items = fixed(PaletteGroup::QuickActions, QUICK_ACTIONS);
    items.extend(fixed(PaletteGroup::Navigation, PALETTE_NAVIGATION));
    items.extend(
        state
            .data
            .customers
            .iter()
            .take(RECENT_LIMIT)
            .map(|c| PaletteItem {
                group: PaletteGroup::RecentCustomers,
                label: c.name.clone(),
                href: format!("/customers/{}", c.id),
            }),
    );
    items.extend(
        state
            .data
            .servers
            .iter()
            .take(RECENT_LIMIT)
            .map(|s| PaletteItem {
                group: PaletteGroup::RecentServers,
                label: s.name.clone(),
                href: format!("/servers/{}", s.id),
            }),
    );
    items
}

/// Case-insensitive substring filter on the label. An empty query keeps everything.
pub fn filter_palette(items: Vec<PaletteItem>, query: &str) -> Vec<PaletteItem> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.label.to_lowercase().contains(&needle))
        .collect()
}

// --- Header ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub role: Option<UserRole>,
    pub organization: Option<String>,
    pub unread_notifications: usize,
}

pub fn header(state: &AppState) -> HeaderView {
    let user = state.current_user();
    HeaderView {
        user_name: user.map(|u| u.name.clone()),
        user_email: user.map(|u| u.email.clone()),
        role: user.map(|u| u.role),
        organization: state.session.organization.as_ref().map(|o| o.name.clone()),
        unread_notifications: state.unread_notifications(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;

    fn signed_in(email: &str) -> AppState {
        let mut state = AppState::new();
        assert!(state.login(email, demo::DEMO_PASSWORD));
        state
    }

    fn user_with_role(role: UserRole) -> User {
        let mut user = demo::demo_data().users[0].clone();
        user.role = role;
        user
    }

    #[test]
    fn normalizes_paths() {
        assert_eq!(normalize_path("customers/"), "/customers");
        assert_eq!(normalize_path("/expenses/list?page=2"), "/expenses/list");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("///"), "/");
    }

    #[test]
    fn public_routes_render_signed_out() {
        let mut state = AppState::new();
        let nav = resolve(&mut state, "/login");
        assert_eq!(
            nav.resolution,
            Resolution::Render {
                path: "/login".into(),
                page: Page::Login
            }
        );
        assert!(!nav.seeded);
    }

    #[test]
    fn login_redirects_to_dashboard_when_signed_in() {
        let mut state = signed_in("admin@acme.com");
        let nav = resolve(&mut state, "/login");
        assert_eq!(
            nav.resolution,
            Resolution::Redirect {
                from: "/login".into(),
                to: DASHBOARD_PATH
            }
        );
    }

    #[test]
    fn protected_routes_redirect_when_signed_out() {
        let mut state = AppState::new();
        let nav = resolve(&mut state, "/customers");
        assert_eq!(
            nav.resolution,
            Resolution::Redirect {
                from: "/customers".into(),
                to: LOGIN_PATH
            }
        );
        assert!(state.data.customers.is_empty());
    }

    #[test]
    fn protected_route_seeds_when_signed_in() {
        let mut state = signed_in("admin@acme.com");
        state.data.customers.clear();

        let nav = resolve(&mut state, "/servers/incidents");
        assert_eq!(
            nav.resolution,
            Resolution::Render {
                path: "/servers/incidents".into(),
                page: Page::ServersOverview
            }
        );
        assert!(nav.seeded);
        assert!(!state.data.customers.is_empty());
    }

    #[test]
    fn placeholder_routes_render_dashboard() {
        let mut state = signed_in("admin@acme.com");
        for path in ["/leads", "/payroll", "/finance/reports", "/settings/audit"] {
            let nav = resolve(&mut state, path);
            assert!(
                matches!(
                    nav.resolution,
                    Resolution::Render {
                        page: Page::Dashboard,
                        ..
                    }
                ),
                "{}",
                path
            );
        }
    }

    #[test]
    fn unknown_paths_are_not_found() {
        let mut state = signed_in("admin@acme.com");
        let nav = resolve(&mut state, "/invoices/new");
        assert_eq!(
            nav.resolution,
            Resolution::NotFound {
                path: "/invoices/new".into()
            }
        );
    }

    #[test]
    fn sidebar_by_role() {
        let titles = |role| -> Vec<&str> {
            sidebar(Some(&user_with_role(role)))
                .iter()
                .map(|s| s.title)
                .collect()
        };

        assert_eq!(titles(UserRole::Owner).len(), SIDEBAR.len());
        assert_eq!(
            titles(UserRole::Sales),
            vec!["Dashboard", "Sales", "Projects"]
        );
        assert_eq!(
            titles(UserRole::Devops),
            vec!["Dashboard", "Projects", "Servers"]
        );
        assert_eq!(titles(UserRole::Viewer), vec!["Dashboard", "Projects"]);
    }

    #[test]
    fn sidebar_signed_out_shows_only_open_sections() {
        let titles: Vec<_> = sidebar(None).iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Dashboard", "Projects"]);
    }

    #[test]
    fn palette_lists_recent_records() {
        let state = signed_in("admin@acme.com");
        let items = palette_items(&state);

        let count = |group| items.iter().filter(|i| i.group == group).count();
        assert_eq!(count(PaletteGroup::QuickActions), 4);
        assert_eq!(count(PaletteGroup::Navigation), 8);
        assert_eq!(count(PaletteGroup::RecentCustomers), 3);
        assert_eq!(count(PaletteGroup::RecentServers), 3);
    }

    #[test]
    fn palette_filter_is_case_insensitive() {
        let state = signed_in("admin@acme.com");
        let hits = filter_palette(palette_items(&state), "SERVER");
        let labels: Vec<_> = hits.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Add Server", "Servers"]);
    }

    #[test]
    fn header_counts_unread() {
        let mut state = signed_in("finance@acme.com");
        let view = header(&state);
        assert_eq!(view.role, Some(UserRole::Finance));
        assert_eq!(view.organization.as_deref(), Some("Acme Corporation"));
        assert_eq!(view.unread_notifications, 3);

        state.apply(crate::action::Action::MarkAllNotificationsRead).unwrap();
        assert_eq!(header(&state).unread_notifications, 0);
    }
}
