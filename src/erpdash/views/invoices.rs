use super::{money, Kpi};
use crate::model::{Invoice, InvoiceStatus};
use crate::status::badge;
use crate::table::{Column, TableView};
use serde::Serialize;

pub const TITLE: &str = "Invoices";
pub const DESCRIPTION: &str = "Create, send and track customer invoices.";

pub fn table(invoices: Vec<Invoice>) -> TableView<Invoice> {
    let columns = vec![
        Column::new("number", "Invoice", |i: &Invoice| i.number.clone())
            .sortable_by(|a: &Invoice, b: &Invoice| a.number.cmp(&b.number)),
        Column::new("customer", "Customer", |i: &Invoice| i.customer_name.clone()),
        Column::new("total", "Amount", |i: &Invoice| money(i.total))
            .sortable_by_key(|i: &Invoice| i.total),
        Column::new("dueDate", "Due Date", |i: &Invoice| {
            i.due_date.format("%Y-%m-%d").to_string()
        })
        .sortable_by_key(|i: &Invoice| i.due_date),
        Column::new("status", "Status", |i: &Invoice| badge(i.status.as_str())),
    ];

    TableView::new(invoices, columns)
        .with_search(|i| i.number.clone())
        .with_empty_state(
            "No invoices yet",
            "Create your first invoice to start billing customers.",
        )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceSummary {
    pub kpis: Vec<Kpi>,
}

impl InvoiceSummary {
    pub fn build(invoices: &[Invoice]) -> Self {
        let sum_where = |pred: &dyn Fn(&Invoice) -> bool| -> (usize, f64) {
            invoices
                .iter()
                .filter(|i| pred(i))
                .fold((0, 0.0), |(n, total), i| (n + 1, total + i.total))
        };
        let (outstanding, outstanding_total) = sum_where(&|i| i.status.is_outstanding());
        let (paid, paid_total) = sum_where(&|i| i.status == InvoiceStatus::Paid);
        let (overdue, overdue_total) = sum_where(&|i| i.status == InvoiceStatus::Overdue);

        Self {
            kpis: vec![
                Kpi::new("Outstanding", money(outstanding_total))
                    .detail(format!("{} invoices", outstanding)),
                Kpi::new("Paid", money(paid_total)).detail(format!("{} invoices", paid)),
                Kpi::new("Overdue", money(overdue_total)).detail(format!("{} invoices", overdue)),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_data;

    fn invoices() -> Vec<Invoice> {
        demo_data().collections.invoices.as_slice().to_vec()
    }

    #[test]
    fn searches_by_number() {
        let mut view = table(invoices());
        view.set_search("inv-2024-00");
        assert_eq!(view.filtered_len(), 8);

        view.set_search("007");
        assert_eq!(view.page_ids(), vec!["inv-7".to_string()]);
    }

    #[test]
    fn sorts_by_due_date() {
        let mut view = table(invoices());
        view.sort_by("dueDate");
        assert_eq!(view.page_ids()[0], "inv-4");
    }

    #[test]
    fn summary_counts_by_status() {
        let summary = InvoiceSummary::build(&invoices());
        assert_eq!(summary.kpis[0].detail.as_deref(), Some("3 invoices"));
        assert_eq!(summary.kpis[1].detail.as_deref(), Some("2 invoices"));
        assert_eq!(summary.kpis[2].detail.as_deref(), Some("1 invoices"));
    }
}
