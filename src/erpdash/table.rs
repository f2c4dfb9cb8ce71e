//! # Table View
//!
//! A generic list view: searchable, paginated, optionally selectable and
//! sortable, over any row type that exposes an id ([`TableRow`]).
//!
//! The view never mutates its rows. It owns only view state: the search
//! query, the current page and page size, the sort column and the selection.
//!
//! ## Rules
//!
//! - Search is a case-insensitive substring match on the search accessor's
//!   text. Every change of the query goes back to page 1.
//! - The page count is `ceil(matches / page_size)`, reported as at least 1.
//!   Navigation clamps into `[1, page_count]`. Changing the page size goes
//!   back to page 1.
//! - Select-all works on the current page only: checking it replaces the
//!   selection with exactly the current page's ids, unchecking clears it.
//!   The header checkbox state is computed against the current page only.
//!   Selected ids survive page changes.
//! - Sorting a sortable column twice flips the direction. Sorting keeps the
//!   current page.
//!
//! [`TableView::snapshot`] flattens everything a renderer needs into a
//! serializable value.

use serde::Serialize;
use serde_json::Value;
use std::cmp::Ordering;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page sizes offered by the page-size picker.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

pub trait TableRow {
    fn row_id(&self) -> String;
}

impl<T: crate::collection::Record> TableRow for T {
    fn row_id(&self) -> String {
        self.id().to_string()
    }
}

impl TableRow for Value {
    fn row_id(&self) -> String {
        id_text(self.get("id").unwrap_or(&Value::Null))
    }
}

/// Stringifies a JSON id exactly: strings as-is, other scalars as JSON text.
/// Only a missing or null id is empty.
pub fn id_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Stringifies a JSON field the way a loosely typed lookup would:
/// missing, null, `false`, `0` and `""` all read as empty text.
pub fn search_text(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Bool(true) => "true".to_string(),
        Value::Number(n) if n.as_f64() == Some(0.0) => String::new(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => String::new(),
    }
}

/// Rendered cell content, with an optional semantic style name
/// (a status badge variant such as `success` or `warning`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub text: String,
    pub style: Option<String>,
}

impl Cell {
    pub fn styled(text: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Some(style.into()),
        }
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self { text, style: None }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::from(text.to_string())
    }
}

type CellFn<T> = Box<dyn Fn(&T) -> Cell>;
type CompareFn<T> = Box<dyn Fn(&T, &T) -> Ordering>;

pub struct Column<T> {
    pub key: String,
    pub header: String,
    cell: CellFn<T>,
    compare: Option<CompareFn<T>>,
}

impl<T> Column<T> {
    pub fn new<C: Into<Cell>>(
        key: impl Into<String>,
        header: impl Into<String>,
        cell: impl Fn(&T) -> C + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            cell: Box::new(move |row| cell(row).into()),
            compare: None,
        }
    }

    pub fn sortable_by(mut self, compare: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        self.compare = Some(Box::new(compare));
        self
    }

    pub fn sortable_by_key<K: PartialOrd>(self, key: impl Fn(&T) -> K + 'static) -> Self {
        self.sortable_by(move |a, b| key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal))
    }

    pub fn is_sortable(&self) -> bool {
        self.compare.is_some()
    }

    pub fn render(&self, row: &T) -> Cell {
        (self.cell)(row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderCheck {
    Unchecked,
    Indeterminate,
    Checked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: String,
    pub description: String,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            title: "No data found".to_string(),
            description: "Try adjusting your search or filters".to_string(),
        }
    }
}

/// Pagination summary, present when at least one row matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub start: usize,
    pub end: usize,
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
}

impl Footer {
    pub fn showing(&self) -> String {
        format!(
            "Showing {} to {} of {} results",
            self.start, self.end, self.total
        )
    }

    pub fn pages(&self) -> String {
        format!("Page {} of {}", self.page, self.page_count)
    }
}

pub struct TableView<T> {
    rows: Vec<T>,
    columns: Vec<Column<T>>,
    search: Option<Box<dyn Fn(&T) -> String>>,
    query: String,
    page: usize,
    page_size: usize,
    selectable: bool,
    selected: Vec<String>,
    sort: Option<(usize, SortDirection)>,
    on_selection_change: Option<Box<dyn FnMut(&[String])>>,
    empty_state: EmptyState,
}

impl<T: TableRow> TableView<T> {
    pub fn new(rows: Vec<T>, columns: Vec<Column<T>>) -> Self {
        Self {
            rows,
            columns,
            search: None,
            query: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            selectable: false,
            selected: Vec::new(),
            sort: None,
            on_selection_change: None,
            empty_state: EmptyState::default(),
        }
    }

    pub fn with_search(mut self, accessor: impl Fn(&T) -> String + 'static) -> Self {
        self.search = Some(Box::new(accessor));
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn selectable(mut self) -> Self {
        self.selectable = true;
        self
    }

    pub fn on_selection_change(mut self, callback: impl FnMut(&[String]) + 'static) -> Self {
        self.on_selection_change = Some(Box::new(callback));
        self
    }

    pub fn with_empty_state(
        mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.empty_state = EmptyState {
            title: title.into(),
            description: description.into(),
        };
        self
    }

    // --- Search ---

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    pub fn clear_search(&mut self) {
        self.set_search(String::new());
    }

    fn matches(&self, row: &T) -> bool {
        match &self.search {
            Some(accessor) if !self.query.is_empty() => accessor(row)
                .to_lowercase()
                .contains(&self.query.to_lowercase()),
            _ => true,
        }
    }

    /// Matching rows, in sort order when a sort is active.
    pub fn filtered(&self) -> Vec<&T> {
        let mut rows: Vec<&T> = self.rows.iter().filter(|row| self.matches(row)).collect();
        if let Some((index, direction)) = self.sort {
            if let Some(compare) = self.columns.get(index).and_then(|c| c.compare.as_ref()) {
                rows.sort_by(|a, b| match direction {
                    SortDirection::Asc => compare(*a, *b),
                    SortDirection::Desc => compare(*b, *a),
                });
            }
        }
        rows
    }

    pub fn filtered_len(&self) -> usize {
        self.rows.iter().filter(|row| self.matches(row)).count()
    }

    // --- Pagination ---

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    pub fn page_count(&self) -> usize {
        self.filtered_len().div_ceil(self.page_size).max(1)
    }

    /// The page being shown, clamped in case the rows shrank beneath it.
    pub fn current_page(&self) -> usize {
        self.page.clamp(1, self.page_count())
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page.clamp(1, self.page_count());
    }

    pub fn first(&mut self) {
        self.go_to(1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.current_page().saturating_sub(1));
    }

    pub fn next(&mut self) {
        self.go_to(self.current_page() + 1);
    }

    pub fn last(&mut self) {
        self.go_to(self.page_count());
    }

    pub fn can_go_back(&self) -> bool {
        self.current_page() > 1
    }

    pub fn can_go_forward(&self) -> bool {
        self.current_page() < self.page_count()
    }

    pub fn page_rows(&self) -> Vec<&T> {
        let start = (self.current_page() - 1) * self.page_size;
        self.filtered()
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect()
    }

    pub fn page_ids(&self) -> Vec<String> {
        self.page_rows().iter().map(|row| row.row_id()).collect()
    }

    pub fn footer(&self) -> Option<Footer> {
        let total = self.filtered_len();
        if total == 0 {
            return None;
        }
        let page = self.current_page();
        let start = (page - 1) * self.page_size;
        Some(Footer {
            start: start + 1,
            end: (start + self.page_size).min(total),
            total,
            page,
            page_count: self.page_count(),
        })
    }

    // --- Selection ---

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    pub fn selected_ids(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn set_row_selected(&mut self, id: &str, checked: bool) {
        if !self.selectable {
            return;
        }
        if checked {
            if !self.is_selected(id) {
                self.selected.push(id.to_string());
            }
        } else {
            self.selected.retain(|s| s != id);
        }
        self.notify_selection();
    }

    pub fn toggle_row(&mut self, id: &str) {
        let checked = !self.is_selected(id);
        self.set_row_selected(id, checked);
    }

    /// Header checkbox: replaces the selection with the current page, or clears it.
    pub fn set_all_selected(&mut self, checked: bool) {
        if !self.selectable {
            return;
        }
        self.selected = if checked { self.page_ids() } else { Vec::new() };
        self.notify_selection();
    }

    pub fn header_check(&self) -> HeaderCheck {
        let ids = self.page_ids();
        let hits = ids.iter().filter(|id| self.is_selected(id)).count();
        if !ids.is_empty() && hits == ids.len() {
            HeaderCheck::Checked
        } else if hits > 0 {
            HeaderCheck::Indeterminate
        } else {
            HeaderCheck::Unchecked
        }
    }

    fn notify_selection(&mut self) {
        if let Some(callback) = self.on_selection_change.as_mut() {
            callback(&self.selected);
        }
    }

    // --- Sorting ---

    pub fn sort(&self) -> Option<(&str, SortDirection)> {
        self.sort
            .and_then(|(index, dir)| self.columns.get(index).map(|c| (c.key.as_str(), dir)))
    }

    /// Sorts by the column with `key`. Unknown or unsortable columns are ignored.
    pub fn sort_by(&mut self, key: &str) {
        let Some(index) = self.columns.iter().position(|c| c.key == key) else {
            return;
        };
        if !self.columns[index].is_sortable() {
            return;
        }
        self.sort = match self.sort {
            Some((current, SortDirection::Asc)) if current == index => {
                Some((index, SortDirection::Desc))
            }
            _ => Some((index, SortDirection::Asc)),
        };
    }

    pub fn sort_by_direction(&mut self, key: &str, direction: SortDirection) {
        if let Some(index) = self
            .columns
            .iter()
            .position(|c| c.key == key && c.is_sortable())
        {
            self.sort = Some((index, direction));
        }
    }

    // --- Output ---

    pub fn empty_state(&self) -> &EmptyState {
        &self.empty_state
    }

    pub fn snapshot(&self) -> TableSnapshot {
        let sort = self.sort;
        let headers = self
            .columns
            .iter()
            .enumerate()
            .map(|(index, column)| HeaderSnapshot {
                key: column.key.clone(),
                header: column.header.clone(),
                sortable: column.is_sortable(),
                sorted: sort.filter(|(i, _)| *i == index).map(|(_, dir)| dir),
            })
            .collect();
        let rows: Vec<RowSnapshot> = self
            .page_rows()
            .into_iter()
            .map(|row| {
                let id = row.row_id();
                RowSnapshot {
                    selected: self.is_selected(&id),
                    id,
                    cells: self.columns.iter().map(|c| c.render(row)).collect(),
                }
            })
            .collect();
        let empty = rows.is_empty().then(|| self.empty_state.clone());
        TableSnapshot {
            headers,
            rows,
            selectable: self.selectable,
            header_check: self.header_check(),
            selected_count: self.selected.len(),
            query: self.query.clone(),
            page_size: self.page_size,
            footer: self.footer(),
            empty,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HeaderSnapshot {
    pub key: String,
    pub header: String,
    pub sortable: bool,
    pub sorted: Option<SortDirection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RowSnapshot {
    pub id: String,
    pub selected: bool,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableSnapshot {
    pub headers: Vec<HeaderSnapshot>,
    pub rows: Vec<RowSnapshot>,
    pub selectable: bool,
    pub header_check: HeaderCheck,
    pub selected_count: usize,
    pub query: String,
    pub page_size: usize,
    pub footer: Option<Footer>,
    pub empty: Option<EmptyState>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone)]
    struct Row {
        id: String,
        name: String,
        amount: f64,
    }

    impl TableRow for Row {
        fn row_id(&self) -> String {
            self.id.clone()
        }
    }

    fn rows(n: usize) -> Vec<Row> {
        (1..=n)
            .map(|i| Row {
                id: format!("r{}", i),
                name: if i % 2 == 0 {
                    format!("Even {}", i)
                } else {
                    format!("Odd {}", i)
                },
                amount: (n - i) as f64,
            })
            .collect()
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::new("name", "Name", |r: &Row| r.name.clone())
                .sortable_by(|a: &Row, b: &Row| a.name.cmp(&b.name)),
            Column::new("amount", "Amount", |r: &Row| format!("{:.2}", r.amount))
                .sortable_by_key(|r: &Row| r.amount),
            Column::new("id", "Id", |r: &Row| r.id.clone()),
        ]
    }

    fn table(n: usize) -> TableView<Row> {
        TableView::new(rows(n), columns()).with_search(|r| r.name.clone())
    }

    #[test]
    fn page_count_is_ceiling_with_floor_of_one() {
        assert_eq!(table(25).page_count(), 3);
        assert_eq!(table(30).page_count(), 3);
        assert_eq!(table(31).page_count(), 4);
        assert_eq!(table(0).page_count(), 1);
    }

    #[test]
    fn last_page_holds_remainder() {
        let mut t = table(25);
        t.last();
        assert_eq!(t.current_page(), 3);
        assert_eq!(t.page_rows().len(), 5);
        assert_eq!(t.page_ids().first().map(String::as_str), Some("r21"));
    }

    #[test]
    fn navigation_clamps() {
        let mut t = table(25);
        t.prev();
        assert_eq!(t.current_page(), 1);
        t.go_to(99);
        assert_eq!(t.current_page(), 3);
        t.next();
        assert_eq!(t.current_page(), 3);
        t.go_to(0);
        assert_eq!(t.current_page(), 1);
        assert!(!t.can_go_back());
        assert!(t.can_go_forward());
    }

    #[test]
    fn search_is_case_insensitive_and_resets_page() {
        let mut t = table(25);
        t.go_to(3);
        t.set_search("EVEN");

        assert_eq!(t.current_page(), 1);
        assert_eq!(t.filtered_len(), 12);
        assert!(t.page_rows().iter().all(|r| r.name.starts_with("Even")));
    }

    #[test]
    fn search_without_matches_gives_empty_page() {
        let mut t = table(25);
        t.set_search("zzz");

        assert!(t.page_rows().is_empty());
        assert_eq!(t.page_count(), 1);
        assert!(t.footer().is_none());
        assert_eq!(t.snapshot().empty, Some(EmptyState::default()));
    }

    #[test]
    fn page_size_change_resets_page() {
        let mut t = table(25);
        t.go_to(2);
        t.set_page_size(25);

        assert_eq!(t.current_page(), 1);
        assert_eq!(t.page_count(), 1);
        assert_eq!(t.page_rows().len(), 25);
    }

    #[test]
    fn footer_summarizes_current_page() {
        let mut t = table(25);
        t.go_to(3);
        let footer = t.footer().unwrap();
        assert_eq!(footer.showing(), "Showing 21 to 25 of 25 results");
        assert_eq!(footer.pages(), "Page 3 of 3");
    }

    #[test]
    fn select_all_selects_exactly_current_page() {
        let mut t = table(25).selectable();
        t.go_to(2);
        t.set_all_selected(true);

        assert_eq!(t.selected_ids(), t.page_ids().as_slice());
        assert_eq!(t.header_check(), HeaderCheck::Checked);

        t.go_to(1);
        assert_eq!(t.header_check(), HeaderCheck::Unchecked);
        assert_eq!(t.selected_ids().len(), 10);

        t.set_all_selected(false);
        assert!(t.selected_ids().is_empty());
    }

    #[test]
    fn select_all_replaces_previous_selection() {
        let mut t = table(25).selectable();
        t.set_row_selected("r15", true);
        t.set_all_selected(true);

        assert!(!t.is_selected("r15"));
        assert_eq!(t.selected_ids().len(), 10);
    }

    #[test]
    fn partial_selection_is_indeterminate() {
        let mut t = table(25).selectable();
        t.toggle_row("r2");
        assert_eq!(t.header_check(), HeaderCheck::Indeterminate);

        t.toggle_row("r2");
        assert_eq!(t.header_check(), HeaderCheck::Unchecked);
    }

    #[test]
    fn selection_survives_page_changes() {
        let mut t = table(25).selectable();
        t.toggle_row("r3");
        t.next();
        t.toggle_row("r12");
        t.first();

        assert_eq!(t.selected_ids(), &["r3".to_string(), "r12".to_string()]);
    }

    #[test]
    fn selection_callback_sees_every_change() {
        let seen: Rc<RefCell<Vec<Vec<String>>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut t = table(5)
            .selectable()
            .on_selection_change(move |ids| sink.borrow_mut().push(ids.to_vec()));

        t.toggle_row("r1");
        t.set_all_selected(true);
        t.set_all_selected(false);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0], vec!["r1".to_string()]);
        assert_eq!(seen[1].len(), 5);
        assert!(seen[2].is_empty());
    }

    #[test]
    fn unselectable_table_ignores_selection() {
        let mut t = table(5);
        t.set_all_selected(true);
        t.toggle_row("r1");
        assert!(t.selected_ids().is_empty());
    }

    #[test]
    fn sorting_flips_and_keeps_page() {
        let mut t = table(25);
        t.go_to(2);
        t.sort_by("amount");
        assert_eq!(t.current_page(), 2);
        assert_eq!(t.sort(), Some(("amount", SortDirection::Asc)));

        t.first();
        assert_eq!(t.page_ids()[0], "r25");

        t.sort_by("amount");
        assert_eq!(t.sort(), Some(("amount", SortDirection::Desc)));
        assert_eq!(t.page_ids()[0], "r1");
    }

    #[test]
    fn unsortable_column_is_ignored() {
        let mut t = table(5);
        t.sort_by("id");
        assert_eq!(t.sort(), None);
        t.sort_by("missing");
        assert_eq!(t.sort(), None);
    }

    #[test]
    fn displayed_page_clamps_when_data_shrinks() {
        let mut t = table(25);
        t.last();
        t.set_search("Odd 1");
        t.page = 3;
        assert_eq!(t.current_page(), 1);
    }

    #[test]
    fn json_rows_search_like_loose_lookup() {
        let data = vec![
            json!({"id": "a", "name": "Alpha", "stock": 0}),
            json!({"id": "b", "name": null, "stock": 12}),
            json!({"id": "c", "stock": 3}),
        ];
        let mut t = TableView::new(
            data,
            vec![Column::new("name", "Name", |v: &Value| search_text(&v["name"]))],
        )
        .with_search(|v: &Value| search_text(&v["name"]));

        t.set_search("alp");
        assert_eq!(t.page_ids(), vec!["a".to_string()]);

        t.set_search("");
        assert_eq!(t.filtered_len(), 3);
        assert_eq!(search_text(&json!(0)), "");
        assert_eq!(search_text(&json!(12)), "12");
    }

    #[test]
    fn json_row_ids_keep_zero_and_false() {
        assert_eq!(json!({"id": 0}).row_id(), "0");
        assert_eq!(json!({"id": false}).row_id(), "false");
        assert_eq!(json!({"id": "inv-1"}).row_id(), "inv-1");
        assert_eq!(json!({"name": "x"}).row_id(), "");

        let mut t = TableView::new(
            vec![json!({"id": 0}), json!({"id": 1})],
            vec![Column::new("id", "Id", |v: &Value| id_text(&v["id"]))],
        )
        .selectable();
        t.set_row_selected("0", true);
        assert_eq!(t.selected_ids(), &["0".to_string()]);
    }

    #[test]
    fn snapshot_carries_cells_and_header_state() {
        let mut t = table(3).selectable();
        t.toggle_row("r1");
        let snapshot = t.snapshot();

        assert_eq!(snapshot.headers.len(), 3);
        assert!(snapshot.headers[0].sortable);
        assert!(!snapshot.headers[2].sortable);
        assert_eq!(snapshot.rows[0].cells[0].text, "Odd 1");
        assert!(snapshot.rows[0].selected);
        assert_eq!(snapshot.header_check, HeaderCheck::Indeterminate);
        assert_eq!(snapshot.selected_count, 1);
    }
}
