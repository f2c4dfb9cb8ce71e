use super::{average_uptime, money, quick_link, Kpi, QuickLink, Trend};
use crate::model::{IncidentStatus, InvoiceStatus, ServerStatus, TaskStatus};
use crate::state::AppState;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyFigure {
    pub month: &'static str,
    pub revenue: f64,
    pub expenses: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    pub name: &'static str,
    pub percent: u32,
}

/// Chart series shown on the dashboard. Illustrative only, not derived from state.
pub const REVENUE_SERIES: [MonthlyFigure; 6] = [
    MonthlyFigure { month: "Sep", revenue: 45_000.0, expenses: 28_000.0 },
    MonthlyFigure { month: "Oct", revenue: 52_000.0, expenses: 31_000.0 },
    MonthlyFigure { month: "Nov", revenue: 48_000.0, expenses: 29_000.0 },
    MonthlyFigure { month: "Dec", revenue: 61_000.0, expenses: 35_000.0 },
    MonthlyFigure { month: "Jan", revenue: 55_000.0, expenses: 32_000.0 },
    MonthlyFigure { month: "Feb", revenue: 67_000.0, expenses: 38_000.0 },
];

pub const CATEGORY_SPLIT: [CategoryShare; 5] = [
    CategoryShare { name: "Infrastructure", percent: 35 },
    CategoryShare { name: "Software", percent: 25 },
    CategoryShare { name: "Travel", percent: 20 },
    CategoryShare { name: "Marketing", percent: 12 },
    CategoryShare { name: "Other", percent: 8 },
];

const QUICK_ACTIONS: [QuickLink; 4] = [
    quick_link("Create Invoice", "/invoices/new"),
    quick_link("Add Expense", "/expenses/new"),
    quick_link("Add Product", "/products/new"),
    quick_link("Add Server", "/servers/new"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub greeting: String,
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub paid_invoices: usize,
    pub pending_invoices: usize,
    pub pending_invoice_total: f64,
    pub low_stock: usize,
    pub servers_online: usize,
    pub servers_total: usize,
    pub avg_uptime: f64,
    pub open_incidents: usize,
    pub pending_tasks: usize,
    pub unread_notifications: usize,
    pub kpis: Vec<Kpi>,
    pub revenue_series: &'static [MonthlyFigure],
    pub category_split: &'static [CategoryShare],
    pub quick_actions: &'static [QuickLink],
}

impl DashboardView {
    pub fn build(state: &AppState) -> Self {
        let data = &state.data;

        let total_revenue: f64 = data.invoices.iter().map(|i| i.total).sum();
        let total_expenses: f64 = data.expenses.iter().map(|e| e.total).sum();
        let paid_invoices = data
            .invoices
            .iter()
            .filter(|i| i.status == InvoiceStatus::Paid)
            .count();
        let (pending_invoices, pending_invoice_total) = data
            .invoices
            .iter()
            .filter(|i| i.status.is_outstanding())
            .fold((0, 0.0), |(n, sum), i| (n + 1, sum + i.total));
        let low_stock = data.products.iter().filter(|p| p.is_low_stock()).count();
        let servers_online = data
            .servers
            .iter()
            .filter(|s| s.status == ServerStatus::Online)
            .count();
        let servers_total = data.servers.len();
        let avg_uptime = average_uptime(data.servers.iter().map(|s| s.uptime));
        let open_incidents = data
            .incidents
            .iter()
            .filter(|i| i.status != IncidentStatus::Resolved)
            .count();
        let pending_tasks = data
            .tasks
            .iter()
            .filter(|t| t.status != TaskStatus::Done)
            .count();

        let first_name = state.current_user().map(|u| u.first_name()).unwrap_or("User");

        let kpis = vec![
            Kpi::new("Total Revenue", money(total_revenue)),
            Kpi::new("Total Expenses", money(total_expenses)),
            Kpi::new("Pending Invoices", pending_invoices)
                .detail(format!("{} total", money(pending_invoice_total))),
            if low_stock > 0 {
                Kpi::new("Low Stock Items", low_stock)
                    .detail("Needs attention")
                    .trend(Trend::Down)
            } else {
                Kpi::new("Low Stock Items", low_stock)
                    .detail("All stocked")
                    .trend(Trend::Neutral)
            },
            Kpi::new(
                "Servers Online",
                format!("{}/{}", servers_online, servers_total),
            )
            .trend(if servers_online == servers_total {
                Trend::Up
            } else {
                Trend::Down
            }),
            Kpi::new("Avg Uptime", format!("{:.2}%", avg_uptime)),
            Kpi::new("Open Incidents", open_incidents).detail(if open_incidents > 0 {
                "Requires attention"
            } else {
                "No active issues"
            }),
            Kpi::new("Tasks Due", pending_tasks),
        ];

        Self {
            greeting: format!("Welcome back, {}", first_name),
            total_revenue,
            total_expenses,
            paid_invoices,
            pending_invoices,
            pending_invoice_total,
            low_stock,
            servers_online,
            servers_total,
            avg_uptime,
            open_incidents,
            pending_tasks,
            unread_notifications: state.unread_notifications(),
            kpis,
            revenue_series: &REVENUE_SERIES,
            category_split: &CATEGORY_SPLIT,
            quick_actions: &QUICK_ACTIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Invoice;
    use serde_json::json;

    fn seeded() -> AppState {
        let mut state = AppState::new();
        state.login("finance@acme.com", "demo123");
        state
    }

    #[test]
    fn kpis_from_seed() {
        let state = seeded();
        let view = DashboardView::build(&state);
        let invoices = state.data.invoices.as_slice();

        assert_eq!(
            view.total_revenue,
            invoices.iter().map(|i| i.total).sum::<f64>()
        );
        assert_eq!(view.pending_invoices, 3);
        assert_eq!(view.low_stock, 4);
        assert_eq!((view.servers_online, view.servers_total), (3, 5));
        assert_eq!(view.open_incidents, 2);
        assert_eq!(view.pending_tasks, 4);
        assert_eq!(view.greeting, "Welcome back, Priya");
    }

    #[test]
    fn empty_state_has_zero_uptime_and_generic_greeting() {
        let view = DashboardView::build(&AppState::new());
        assert_eq!(view.avg_uptime, 0.0);
        assert_eq!(view.total_revenue, 0.0);
        assert_eq!(view.greeting, "Welcome back, User");
        assert_eq!(view.kpis[5].value, "0.00%");
    }

    #[test]
    fn kpi_cues_follow_the_figures() {
        let view = DashboardView::build(&seeded());
        assert_eq!(view.kpis[3].detail.as_deref(), Some("Needs attention"));
        assert_eq!(view.kpis[3].trend, Some(Trend::Down));
        assert_eq!(view.kpis[4].trend, Some(Trend::Down));
        assert_eq!(view.kpis[6].detail.as_deref(), Some("Requires attention"));

        let quiet = DashboardView::build(&AppState::new());
        assert_eq!(quiet.kpis[3].detail.as_deref(), Some("All stocked"));
        assert_eq!(quiet.kpis[3].trend, Some(Trend::Neutral));
        assert_eq!(quiet.kpis[4].trend, Some(Trend::Up));
        assert_eq!(quiet.kpis[6].detail.as_deref(), Some("No active issues"));
    }

    #[test]
    fn stored_totals_are_used_as_is() {
        let mut state = seeded();
        let before = DashboardView::build(&state).total_revenue;
        state
            .of_mut::<Invoice>()
            .update("inv-1", &json!({"subtotal": 0.0}))
            .unwrap();

        assert_eq!(DashboardView::build(&state).total_revenue, before);
    }

    #[test]
    fn static_series_are_fixed() {
        let view = DashboardView::build(&AppState::new());
        assert_eq!(view.revenue_series.len(), 6);
        assert_eq!(view.revenue_series[5].revenue, 67_000.0);
        assert_eq!(view.category_split.iter().map(|c| c.percent).sum::<u32>(), 100);
    }
}
