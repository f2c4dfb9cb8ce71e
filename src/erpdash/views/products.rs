use super::{money, Kpi};
use crate::model::Product;
use crate::status::badge;
use crate::table::{Cell, Column, TableView};
use serde::Serialize;

pub const TITLE: &str = "Products";
pub const DESCRIPTION: &str = "Manage your product catalog and inventory.";

pub fn table(products: Vec<Product>) -> TableView<Product> {
    let columns = vec![
        Column::new("name", "Product", |p: &Product| format!("{} [{}]", p.name, p.sku))
            .sortable_by(|a: &Product, b: &Product| a.name.cmp(&b.name)),
        Column::new("category", "Category", |p: &Product| p.category.clone()),
        Column::new("price", "Price", |p: &Product| {
            format!("{} (cost {})", money(p.selling_price), money(p.purchase_price))
        })
        .sortable_by_key(|p: &Product| p.selling_price),
        Column::new("stock", "Stock", stock_cell).sortable_by_key(|p: &Product| p.current_stock),
        Column::new("status", "Status", |p: &Product| badge(p.status.as_str())),
    ];

    TableView::new(products, columns)
        .with_search(|p| p.name.clone())
        .with_empty_state(
            "No products yet",
            "Add your first product to start managing inventory.",
        )
}

fn stock_cell(product: &Product) -> Cell {
    if product.is_low_stock() {
        Cell::styled(format!("{} low", product.current_stock), "error")
    } else {
        Cell::from(product.current_stock.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSummary {
    pub total_products: usize,
    pub inventory_value: f64,
    pub low_stock: usize,
    pub kpis: Vec<Kpi>,
}

impl ProductSummary {
    pub fn build(products: &[Product]) -> Self {
        let inventory_value = products
            .iter()
            .map(|p| p.current_stock as f64 * p.selling_price)
            .sum();
        let low_stock = products.iter().filter(|p| p.is_low_stock()).count();
        Self {
            total_products: products.len(),
            inventory_value,
            low_stock,
            kpis: vec![
                Kpi::new("Total Products", products.len()),
                Kpi::new("Inventory Value", money(inventory_value)),
                Kpi::new("Low Stock Items", low_stock),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_data;

    fn products() -> Vec<Product> {
        demo_data().collections.products.as_slice().to_vec()
    }

    #[test]
    fn low_stock_rows_are_flagged() {
        let snapshot = table(products()).snapshot();
        let stock = |id: &str| {
            snapshot
                .rows
                .iter()
                .find(|r| r.id == id)
                .map(|r| r.cells[3].clone())
        };

        assert_eq!(stock("prod-5"), Some(Cell::styled("2 low", "error")));
        assert_eq!(stock("prod-1"), Some(Cell::from("24")));
    }

    #[test]
    fn summary_values_stock_at_selling_price() {
        let summary = ProductSummary::build(&products());
        let expected: f64 = products()
            .iter()
            .map(|p| p.current_stock as f64 * p.selling_price)
            .sum();

        assert_eq!(summary.total_products, 8);
        assert_eq!(summary.inventory_value, expected);
        assert_eq!(summary.low_stock, 4);
    }
}
