use crate::commands::{CmdMessage, CmdResult, ListOptions};
use crate::demo;
use crate::error::Result;
use crate::nav::{self, header, Page, Resolution};
use crate::state::AppState;
use crate::table::{TableRow, TableSnapshot, TableView};
use crate::views::dashboard::DashboardView;
use crate::views::expenses::ExpensesOverview;
use crate::views::invoices::InvoiceSummary;
use crate::views::products::ProductSummary;
use crate::views::servers::ServersOverview;
use crate::views::{customers, invoices, products, Kpi};
use chrono::NaiveDate;
use serde::Serialize;

/// A list page: heading, optional KPI strip and the table.
#[derive(Debug, Clone, Serialize)]
pub struct TablePage {
    pub title: &'static str,
    pub description: &'static str,
    pub kpis: Vec<Kpi>,
    pub table: TableSnapshot,
}

/// What a route renders.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageView {
    Home {
        organization: Option<String>,
        signed_in: bool,
    },
    Login {
        demo_accounts: Vec<String>,
        redirected_from: Option<String>,
    },
    Dashboard(DashboardView),
    Table(TablePage),
    Expenses(ExpensesOverview),
    Servers(ServersOverview),
    NotFound {
        path: String,
    },
}

/// Resolves `path` and builds the page it renders. `list` drives the table on
/// list pages; `today` anchors the expenses overview.
pub fn run(
    state: &mut AppState,
    path: &str,
    list: &ListOptions,
    today: NaiveDate,
) -> Result<CmdResult> {
    let navigation = nav::resolve(state, path);
    let mut result = CmdResult {
        changed: navigation.seeded,
        ..Default::default()
    };

    let view = match navigation.resolution {
        Resolution::Render { page, .. } => build(state, page, list, today, None),
        Resolution::Redirect { from, to } if to == nav::LOGIN_PATH => {
            result.add_message(CmdMessage::warning(format!(
                "Sign in to view {}. Run `erpdash login <email>`",
                from
            )));
            build(state, Page::Login, list, today, Some(from))
        }
        Resolution::Redirect { to, .. } => {
            let target = nav::resolve(state, to);
            result.changed |= target.seeded;
            match target.resolution {
                Resolution::Render { page, .. } => build(state, page, list, today, None),
                _ => PageView::NotFound { path: to.to_string() },
            }
        }
        Resolution::NotFound { path } => {
            result.add_message(CmdMessage::error(format!("Page not found: {}", path)));
            PageView::NotFound { path }
        }
    };

    if state.is_authenticated() {
        result.header = Some(header(state));
    }
    Ok(result.with_page(view))
}

fn build(
    state: &AppState,
    page: Page,
    list: &ListOptions,
    today: NaiveDate,
    redirected_from: Option<String>,
) -> PageView {
    let data = &state.data;
    match page {
        Page::Home => PageView::Home {
            organization: state.session.organization.as_ref().map(|o| o.name.clone()),
            signed_in: state.is_authenticated(),
        },
        Page::Login => PageView::Login {
            demo_accounts: demo::demo_data().users.into_iter().map(|u| u.email).collect(),
            redirected_from,
        },
        Page::Dashboard => PageView::Dashboard(DashboardView::build(state)),
        Page::Customers => PageView::Table(TablePage {
            title: customers::TITLE,
            description: customers::DESCRIPTION,
            kpis: Vec::new(),
            table: drive(customers::table(data.customers.as_slice().to_vec()), list),
        }),
        Page::Invoices => PageView::Table(TablePage {
            title: invoices::TITLE,
            description: invoices::DESCRIPTION,
            kpis: InvoiceSummary::build(data.invoices.as_slice()).kpis,
            table: drive(invoices::table(data.invoices.as_slice().to_vec()), list),
        }),
        Page::Products => PageView::Table(TablePage {
            title: products::TITLE,
            description: products::DESCRIPTION,
            kpis: ProductSummary::build(data.products.as_slice()).kpis,
            table: drive(products::table(data.products.as_slice().to_vec()), list),
        }),
        Page::ExpensesOverview => PageView::Expenses(ExpensesOverview::build(state, today)),
        Page::ServersOverview => PageView::Servers(ServersOverview::build(state)),
    }
}

fn drive<T: TableRow>(view: TableView<T>, list: &ListOptions) -> TableSnapshot {
    let mut view = if list.wants_selection() {
        view.selectable()
    } else {
        view
    };
    list.apply(&mut view);
    view.snapshot()
}
