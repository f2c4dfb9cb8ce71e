//! # Page Views
//!
//! View models for the pages a route can render. Each one is computed from an
//! [`AppState`](crate::state::AppState) snapshot and carries no behavior:
//! KPI figures, summary lists and, for list pages, a configured
//! [`TableView`](crate::table::TableView).
//!
//! Computations that depend on the calendar take "today" as an argument, so
//! they stay deterministic under test.

use serde::Serialize;

pub mod customers;
pub mod dashboard;
pub mod expenses;
pub mod invoices;
pub mod products;
pub mod servers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpi {
    pub title: &'static str,
    pub value: String,
    pub detail: Option<String>,
    pub trend: Option<Trend>,
}

impl Kpi {
    pub fn new(title: &'static str, value: impl ToString) -> Self {
        Self {
            title,
            value: value.to_string(),
            detail: None,
            trend: None,
        }
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn trend(mut self, trend: Trend) -> Self {
        self.trend = Some(trend);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub(crate) const fn quick_link(label: &'static str, href: &'static str) -> QuickLink {
    QuickLink { label, href }
}

/// `$1,234.5` style amounts: thousands grouped, at most two decimals.
pub fn money(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        0 => format!("{}${}", sign, grouped),
        f if f % 10 == 0 => format!("{}${}.{}", sign, grouped, f / 10),
        f => format!("{}${}.{:02}", sign, grouped, f),
    }
}

/// Mean uptime across `uptimes`, rounded to two decimals; zero when empty.
pub fn average_uptime(uptimes: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = uptimes.fold((0.0, 0usize), |(sum, n), u| (sum + u, n + 1));
    if count == 0 {
        return 0.0;
    }
    (sum / count as f64 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(money(0.0), "$0");
        assert_eq!(money(999.0), "$999");
        assert_eq!(money(45_200.0), "$45,200");
        assert_eq!(money(1_234_567.891), "$1,234,567.89");
        assert_eq!(money(12.5), "$12.5");
        assert_eq!(money(-8_500.0), "-$8,500");
    }

    #[test]
    fn average_uptime_rounds_and_handles_empty() {
        assert_eq!(average_uptime([99.98, 99.95, 99.5].into_iter()), 99.81);
        assert_eq!(average_uptime(std::iter::empty()), 0.0);
    }
}
