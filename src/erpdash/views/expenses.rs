use super::{money, quick_link, Kpi, QuickLink, Trend};
use crate::model::{ExpenseStatus, SubscriptionStatus};
use crate::state::AppState;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Reference figure the month-over-month change is measured against.
pub const LAST_MONTH_TOTAL: f64 = 8_500.0;

/// How many categories the spending legend lists.
const CATEGORY_LEGEND: usize = 5;

const QUICK_LINKS: [QuickLink; 5] = [
    quick_link("View All Expenses", "/expenses/list"),
    quick_link("Manage Categories", "/expenses/categories"),
    quick_link("Budget Settings", "/expenses/budgets"),
    quick_link("Subscriptions", "/expenses/subscriptions"),
    quick_link("Reimbursements", "/expenses/reimbursements"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpend {
    pub name: String,
    pub color: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetProgress {
    pub category: String,
    pub spent: f64,
    pub amount: f64,
    pub percent: f64,
    pub alert: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpensesOverview {
    pub this_month_total: f64,
    pub last_month_total: f64,
    /// Percent change against [`LAST_MONTH_TOTAL`], one decimal.
    pub month_change: f64,
    pub subscriptions_monthly: f64,
    pub active_subscriptions: usize,
    pub pending_reimbursements: usize,
    pub by_category: Vec<CategorySpend>,
    pub budgets: Vec<BudgetProgress>,
    pub kpis: Vec<Kpi>,
    pub quick_links: &'static [QuickLink],
}

impl ExpensesOverview {
    pub fn build(state: &AppState, today: NaiveDate) -> Self {
        let data = &state.data;

        let this_month_total: f64 = data
            .expenses
            .iter()
            .filter(|e| e.date.year() == today.year() && e.date.month() == today.month())
            .map(|e| e.total)
            .sum();
        let month_change = ((this_month_total - LAST_MONTH_TOTAL) / LAST_MONTH_TOTAL * 1000.0)
            .round()
            / 10.0;

        let (active_subscriptions, subscriptions_monthly) = data
            .subscriptions
            .iter()
            .filter(|s| s.status == SubscriptionStatus::Active)
            .fold((0, 0.0), |(n, sum), s| (n + 1, sum + s.amount));

        let pending_reimbursements = data
            .expenses
            .iter()
            .filter(|e| e.reimbursable && e.status == ExpenseStatus::Submitted)
            .count();

        let by_category: Vec<CategorySpend> = data
            .expense_categories
            .iter()
            .map(|cat| CategorySpend {
                name: cat.name.clone(),
                color: cat.color.clone(),
                total: data
                    .expenses
                    .iter()
                    .filter(|e| e.category_id == cat.id)
                    .map(|e| e.total)
                    .sum(),
            })
            .filter(|c| c.total > 0.0)
            .collect();

        let budgets = data
            .budgets
            .iter()
            .map(|b| BudgetProgress {
                category: b.category_name.clone(),
                spent: b.spent,
                amount: b.amount,
                percent: if b.amount > 0.0 {
                    (b.spent / b.amount * 1000.0).round() / 10.0
                } else {
                    0.0
                },
                alert: b.is_over_threshold(),
            })
            .collect();

        let kpis = vec![
            Kpi::new("This Month", money(this_month_total))
                .detail(format!("{:+.1}%", month_change))
                .trend(if month_change > 0.0 { Trend::Up } else { Trend::Down }),
            Kpi::new("Last Month", money(LAST_MONTH_TOTAL)),
            Kpi::new(
                "Active Subscriptions",
                format!("{}/mo", money(subscriptions_monthly)),
            )
            .detail(format!("{} services", active_subscriptions)),
            Kpi::new("Pending Reimbursements", pending_reimbursements)
                .detail("awaiting approval"),
        ];

        Self {
            this_month_total,
            last_month_total: LAST_MONTH_TOTAL,
            month_change,
            subscriptions_monthly,
            active_subscriptions,
            pending_reimbursements,
            by_category,
            budgets,
            kpis,
            quick_links: &QUICK_LINKS,
        }
    }

    /// The categories shown in the legend.
    pub fn legend(&self) -> &[CategorySpend] {
        &self.by_category[..self.by_category.len().min(CATEGORY_LEGEND)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> AppState {
        let mut state = AppState::new();
        state.initialize_data();
        state
    }

    fn feb_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 20).unwrap()
    }

    #[test]
    fn this_month_counts_only_matching_month() {
        let state = seeded();
        let overview = ExpensesOverview::build(&state, feb_2024());
        let expected: f64 = state
            .data
            .expenses
            .iter()
            .filter(|e| e.date.month() == 2)
            .map(|e| e.total)
            .sum();

        assert_eq!(overview.this_month_total, expected);
        assert_eq!(overview.last_month_total, 8_500.0);
    }

    #[test]
    fn other_years_do_not_count_as_this_month() {
        let state = seeded();
        let next_year = NaiveDate::from_ymd_opt(2025, 2, 20).unwrap();
        let overview = ExpensesOverview::build(&state, next_year);

        assert_eq!(overview.this_month_total, 0.0);
        assert_eq!(overview.month_change, -100.0);
    }

    #[test]
    fn subscriptions_and_reimbursements() {
        let overview = ExpensesOverview::build(&seeded(), feb_2024());
        assert_eq!(overview.active_subscriptions, 4);
        assert_eq!(overview.subscriptions_monthly, 84.0 + 145.0 + 5_400.0 + 460.0);
        assert_eq!(overview.pending_reimbursements, 2);
    }

    #[test]
    fn categories_without_spend_are_dropped() {
        let mut state = seeded();
        state.data.expenses.clear();
        let overview = ExpensesOverview::build(&state, feb_2024());
        assert!(overview.by_category.is_empty());

        let overview = ExpensesOverview::build(&seeded(), feb_2024());
        assert!(overview.by_category.iter().all(|c| c.total > 0.0));
        assert!(overview.legend().len() <= 5);
    }

    #[test]
    fn budget_alerts() {
        let overview = ExpensesOverview::build(&seeded(), feb_2024());
        let travel = overview
            .budgets
            .iter()
            .find(|b| b.category == "Travel")
            .unwrap();
        assert!(travel.alert);
        assert_eq!(travel.percent, 90.0);
    }
}
