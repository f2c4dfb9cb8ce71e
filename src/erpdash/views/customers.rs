use super::money;
use crate::model::Customer;
use crate::status::badge;
use crate::table::{Column, TableView};

pub const TITLE: &str = "Customers";
pub const DESCRIPTION: &str = "Manage your customer relationships and accounts.";

pub fn table(customers: Vec<Customer>) -> TableView<Customer> {
    let columns = vec![
        Column::new("name", "Customer", |c: &Customer| match &c.company {
            Some(company) => format!("{} ({})", c.name, company),
            None => c.name.clone(),
        })
        .sortable_by(|a: &Customer, b: &Customer| a.name.cmp(&b.name)),
        Column::new("email", "Email", |c: &Customer| c.email.clone()),
        Column::new("phone", "Phone", |c: &Customer| {
            c.phone.clone().unwrap_or_else(|| "-".to_string())
        }),
        Column::new("totalSpent", "Total Spent", |c: &Customer| money(c.total_spent))
            .sortable_by_key(|c: &Customer| c.total_spent),
        Column::new("status", "Status", |c: &Customer| badge(c.status.as_str())),
    ];

    TableView::new(customers, columns)
        .with_search(|c| c.name.clone())
        .with_empty_state(
            "No customers yet",
            "Get started by adding your first customer to the system.",
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_data;

    #[test]
    fn searches_by_name_only() {
        let customers = demo_data().collections.customers.as_slice().to_vec();
        let mut view = table(customers);

        view.set_search("wilson");
        assert_eq!(view.page_ids(), vec!["cust-1".to_string()]);

        // company names are shown but not searched
        view.set_search("globex");
        assert!(view.page_rows().is_empty());
    }

    #[test]
    fn renders_company_and_money() {
        let customers = demo_data().collections.customers.as_slice().to_vec();
        let snapshot = table(customers).snapshot();
        let first = &snapshot.rows[0];

        assert_eq!(first.cells[0].text, "James Wilson (TechStart Inc)");
        assert_eq!(first.cells[3].text, "$45,200");
        assert_eq!(first.cells[4].style.as_deref(), Some("success"));
    }

    #[test]
    fn empty_collection_shows_empty_state() {
        let snapshot = table(Vec::new()).snapshot();
        assert_eq!(
            snapshot.empty.map(|e| e.title),
            Some("No customers yet".to_string())
        );
    }
}
