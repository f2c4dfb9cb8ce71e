//! # Rendering Module
//!
//! Turns command results into styled terminal text through the templates in
//! `templates.rs`, with colors decided by terminal detection.
//!
//! ## Design Philosophy
//!
//! Layout calculations (width, truncation, padding) stay in Rust because they
//! require Unicode-aware processing. Everything reaching a template is
//! already a list of lines made of [`Span`]s: text plus a style name.
//! Templates decide line structure and section spacing, the theme decides
//! what a style name looks like.

use super::styles::{names, ERP_THEME};
use super::templates::{LINES_TEMPLATE, MESSAGES_TEMPLATE, PAGE_TEMPLATE, TABLE_TEMPLATE};
use chrono::{DateTime, Utc};
use erpdash::commands::{CmdMessage, MessageLevel, PageView};
use erpdash::config::ErpConfig;
use erpdash::model::Notification;
use erpdash::nav::{HeaderView, NavSection, PaletteItem};
use erpdash::status::status_variant;
use erpdash::table::{EmptyState, HeaderCheck, SortDirection, TableSnapshot};
use erpdash::views::dashboard::DashboardView;
use erpdash::views::expenses::ExpensesOverview;
use erpdash::views::servers::ServersOverview;
use erpdash::views::{money, Kpi, QuickLink, Trend};
use minijinja::{Environment, Value};
use serde::Serialize;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

pub const MAX_CELL_WIDTH: usize = 36;
pub const COLUMN_GAP: &str = "  ";
pub const TIME_WIDTH: usize = 14;
const UNREAD_MARKER: &str = "●";

#[derive(Debug, Clone, Serialize)]
struct Span {
    text: String,
    style: String,
}

fn span(text: impl Into<String>, style: &str) -> Span {
    Span {
        text: text.into(),
        style: style.to_string(),
    }
}

type Line = Vec<Span>;

#[derive(Serialize)]
struct Block {
    heading: Option<String>,
    lines: Vec<Line>,
}

impl Block {
    fn new(heading: impl Into<String>, lines: Vec<Line>) -> Self {
        Self {
            heading: Some(heading.into()),
            lines,
        }
    }

    fn untitled(lines: Vec<Line>) -> Self {
        Self {
            heading: None,
            lines,
        }
    }
}

#[derive(Serialize)]
struct LinesData {
    blocks: Vec<Block>,
    empty_message: String,
}

#[derive(Serialize)]
struct TableData {
    headers: Line,
    rows: Vec<Line>,
    footer: Option<String>,
    empty: Option<EmptyState>,
    selection: Option<String>,
}

#[derive(Serialize)]
struct TableContext<'a> {
    table: &'a TableData,
}

#[derive(Serialize)]
struct KpiLine {
    label: String,
    value: String,
    detail: Option<String>,
    detail_style: &'static str,
}

#[derive(Serialize)]
struct PageData {
    title: String,
    subtitle: Option<String>,
    kpis: Vec<KpiLine>,
    blocks: Vec<Block>,
    table: Option<TableData>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

/// Whether stdout should get ANSI styling.
pub fn use_color() -> bool {
    console::colors_enabled()
}

fn environment(use_color: bool) -> Environment<'static> {
    let mut env = Environment::new();
    env.add_filter("style", move |value: Value, name: String| -> String {
        ERP_THEME.apply(&name, &value.to_string(), use_color)
    });
    for (name, source) in [
        ("messages.tmp", MESSAGES_TEMPLATE),
        ("lines.tmp", LINES_TEMPLATE),
        ("table.tmp", TABLE_TEMPLATE),
        ("page.tmp", PAGE_TEMPLATE),
    ] {
        if let Err(e) = env.add_template(name, source) {
            log::error!("Template {} failed to load: {}", name, e);
        }
    }
    env
}

fn render<T: Serialize>(
    name: &str,
    data: &T,
    use_color: bool,
) -> Result<String, minijinja::Error> {
    let env = environment(use_color);
    env.get_template(name)?.render(data)
}

fn render_lines(blocks: Vec<Block>, empty_message: &str, use_color: bool) -> String {
    let data = LinesData {
        blocks,
        empty_message: empty_message.to_string(),
    };
    render("lines.tmp", &data, use_color).unwrap_or_else(|e| {
        log::error!("Rendering failed: {}", e);
        plain_lines(&data)
    })
}

fn plain_lines(data: &LinesData) -> String {
    let mut out = String::new();
    for block in &data.blocks {
        if let Some(heading) = &block.heading {
            out.push_str(heading);
            out.push('\n');
        }
        for line in &block.lines {
            for s in line {
                out.push_str(&s.text);
            }
            out.push('\n');
        }
    }
    out
}

// --- Messages ---

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render("messages.tmp", &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

/// Errors and warnings go to stderr, everything else to stdout.
pub fn print_messages(messages: &[CmdMessage]) {
    let (problems, notes): (Vec<CmdMessage>, Vec<CmdMessage>) = messages
        .iter()
        .cloned()
        .partition(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error));
    print!("{}", render_messages(&notes, use_color()));
    eprint!(
        "{}",
        render_messages(&problems, console::colors_enabled_stderr())
    );
}

// --- Layout helpers ---

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

/// Pads every column but the last to its widest cell and joins columns with
/// [`COLUMN_GAP`].
fn align(rows: Vec<Line>) -> Vec<Line> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|i| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|s| s.text.width())
                .max()
                .unwrap_or(0)
        })
        .collect();

    rows.into_iter()
        .map(|row| {
            let last = row.len().saturating_sub(1);
            let mut line = Vec::with_capacity(row.len() * 2);
            for (i, cell) in row.into_iter().enumerate() {
                if i > 0 {
                    line.push(span(COLUMN_GAP, names::REGULAR));
                }
                let text = if i == last {
                    cell.text
                } else {
                    pad_to_width(&cell.text, widths[i])
                };
                line.push(Span {
                    text,
                    style: cell.style,
                });
            }
            line
        })
        .collect()
}

pub fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}

// --- Tables ---

fn table_data(table: &TableSnapshot) -> TableData {
    let selection = (table.selectable && table.selected_count > 0).then(|| {
        format!(
            "{} row{} selected",
            table.selected_count,
            if table.selected_count == 1 { "" } else { "s" }
        )
    });

    if table.rows.is_empty() {
        return TableData {
            headers: Vec::new(),
            rows: Vec::new(),
            footer: None,
            empty: Some(table.empty.clone().unwrap_or_default()),
            selection,
        };
    }

    let mut header: Line = Vec::new();
    if table.selectable {
        let check = match table.header_check {
            HeaderCheck::Checked => "[x]",
            HeaderCheck::Indeterminate => "[-]",
            HeaderCheck::Unchecked => "[ ]",
        };
        header.push(span(check, names::HEADER));
    }
    for h in &table.headers {
        let marker = match h.sorted {
            Some(SortDirection::Asc) => " ↑",
            Some(SortDirection::Desc) => " ↓",
            None => "",
        };
        header.push(span(format!("{}{}", h.header, marker), names::HEADER));
    }

    let mut lines = vec![header];
    for row in &table.rows {
        let mut line: Line = Vec::new();
        if table.selectable {
            if row.selected {
                line.push(span("[x]", names::SELECTED));
            } else {
                line.push(span("[ ]", names::MUTED));
            }
        }
        for cell in &row.cells {
            line.push(span(
                truncate_to_width(&cell.text, MAX_CELL_WIDTH),
                cell.style.as_deref().unwrap_or(names::REGULAR),
            ));
        }
        lines.push(line);
    }

    let mut lines = align(lines).into_iter();
    let headers = lines.next().unwrap_or_default();

    TableData {
        headers,
        rows: lines.collect(),
        footer: table
            .footer
            .as_ref()
            .map(|f| format!("{} · {}", f.showing(), f.pages())),
        empty: None,
        selection,
    }
}

pub fn render_table(table: &TableSnapshot, use_color: bool) -> String {
    let data = table_data(table);
    render("table.tmp", &TableContext { table: &data }, use_color).unwrap_or_else(|e| {
        log::error!("Rendering failed: {}", e);
        String::new()
    })
}

// --- Pages ---

fn kpi_lines(kpis: &[Kpi]) -> Vec<KpiLine> {
    let label_width = kpis.iter().map(|k| k.title.width()).max().unwrap_or(0) + 2;
    kpis.iter()
        .map(|k| KpiLine {
            label: pad_to_width(k.title, label_width),
            value: k.value.clone(),
            detail: k.detail.clone().or_else(|| {
                k.trend.map(|t| match t {
                    Trend::Up => "↑".to_string(),
                    Trend::Down => "↓".to_string(),
                    Trend::Neutral => "→".to_string(),
                })
            }),
            detail_style: match k.trend {
                Some(Trend::Up) => names::TREND_UP,
                Some(Trend::Down) => names::TREND_DOWN,
                Some(Trend::Neutral) => names::MUTED,
                None => names::FAINT,
            },
        })
        .collect()
}

fn links(heading: &str, quick: &[QuickLink]) -> Block {
    Block::new(
        heading,
        align(
            quick
                .iter()
                .map(|q| vec![span(q.label, names::REGULAR), span(q.href, names::LINK)])
                .collect(),
        ),
    )
}

fn badge_span(status: &str) -> Span {
    span(status.replace('_', " "), status_variant(status).as_str())
}

fn page(title: impl Into<String>, subtitle: Option<String>) -> PageData {
    PageData {
        title: title.into(),
        subtitle,
        kpis: Vec::new(),
        blocks: Vec::new(),
        table: None,
    }
}

fn dashboard_page(d: &DashboardView) -> PageData {
    let mut data = page(
        d.greeting.clone(),
        Some(format!(
            "{} tasks due · {} unread notifications",
            d.pending_tasks, d.unread_notifications
        )),
    );
    data.kpis = kpi_lines(&d.kpis);
    data.blocks.push(Block::new(
        "Revenue vs expenses",
        align(
            d.revenue_series
                .iter()
                .map(|m| {
                    vec![
                        span(m.month, names::MUTED),
                        span(money(m.revenue), names::REGULAR),
                        span(money(m.expenses), names::MUTED),
                    ]
                })
                .collect(),
        ),
    ));
    data.blocks.push(Block::new(
        "Expenses by category",
        align(
            d.category_split
                .iter()
                .map(|c| {
                    vec![
                        span(c.name, names::REGULAR),
                        span(format!("{}%", c.percent), names::MUTED),
                    ]
                })
                .collect(),
        ),
    ));
    data.blocks.push(links("Quick actions", d.quick_actions));
    data
}

fn expenses_page(e: &ExpensesOverview) -> PageData {
    let mut data = page("Expenses", Some("Overview of company spending".to_string()));
    data.kpis = kpi_lines(&e.kpis);
    data.blocks.push(Block::new(
        "Spending by category",
        align(
            e.legend()
                .iter()
                .map(|c| {
                    vec![
                        span(c.name.clone(), names::REGULAR),
                        span(money(c.total), names::REGULAR),
                    ]
                })
                .collect(),
        ),
    ));
    data.blocks.push(Block::new(
        "Budgets",
        align(
            e.budgets
                .iter()
                .map(|b| {
                    vec![
                        span(b.category.clone(), names::REGULAR),
                        span(
                            format!("{} of {}", money(b.spent), money(b.amount)),
                            names::MUTED,
                        ),
                        span(
                            format!("{:.1}%", b.percent),
                            if b.alert {
                                names::WARNING
                            } else {
                                names::SUCCESS
                            },
                        ),
                    ]
                })
                .collect(),
        ),
    ));
    data.blocks.push(links("Quick links", e.quick_links));
    data
}

fn servers_page(s: &ServersOverview, now: DateTime<Utc>) -> PageData {
    let mut data = page("Servers", Some("Infrastructure health".to_string()));
    data.kpis = kpi_lines(&s.kpis);
    data.blocks.push(Block::new(
        "Servers",
        align(
            s.servers
                .iter()
                .map(|srv| {
                    vec![
                        span(srv.name.clone(), names::REGULAR),
                        span(srv.provider.to_string(), names::MUTED),
                        span(srv.region.clone(), names::MUTED),
                        badge_span(srv.status.as_str()),
                        span(format!("{:.2}% uptime", srv.uptime), names::REGULAR),
                        span(
                            srv.cpu_usage
                                .map(|cpu| format!("{:.0}% cpu", cpu))
                                .unwrap_or_else(|| "-".to_string()),
                            names::MUTED,
                        ),
                    ]
                })
                .collect(),
        ),
    ));
    if !s.incidents.is_empty() {
        data.blocks.push(Block::new(
            "Open incidents",
            align(
                s.incidents
                    .iter()
                    .map(|i| {
                        vec![
                            span(i.title.clone(), names::REGULAR),
                            badge_span(i.severity.as_str()),
                            badge_span(i.status.as_str()),
                            span(format_time_ago(i.created_at, now), names::TIME),
                        ]
                    })
                    .collect(),
            ),
        ));
    }
    if !s.maintenance.is_empty() {
        data.blocks.push(Block::new(
            "Maintenance",
            align(
                s.maintenance
                    .iter()
                    .map(|m| {
                        vec![
                            span(m.target.clone(), names::REGULAR),
                            span(m.reason.clone(), names::MUTED),
                            badge_span(m.status.as_str()),
                            span(
                                m.scheduled_start.format("%Y-%m-%d %H:%M").to_string(),
                                names::TIME,
                            ),
                        ]
                    })
                    .collect(),
            ),
        ));
    }
    data.blocks.push(links("Quick actions", s.quick_actions));
    data
}

fn page_data(view: &PageView, now: DateTime<Utc>) -> PageData {
    match view {
        PageView::Home {
            organization,
            signed_in,
        } => {
            let title = organization.clone().unwrap_or_else(|| "erpdash".to_string());
            let hint = if *signed_in {
                "Run `erpdash dashboard` to see today's numbers"
            } else {
                "Run `erpdash login <email>` to sign in"
            };
            page(title, Some(hint.to_string()))
        }
        PageView::Login {
            demo_accounts,
            redirected_from,
        } => {
            let mut data = page(
                "Sign in",
                redirected_from
                    .as_ref()
                    .map(|from| format!("Sign in to continue to {}", from)),
            );
            data.blocks.push(Block::new(
                "Demo accounts (password: demo123)",
                demo_accounts
                    .iter()
                    .map(|email| vec![span(email.clone(), names::REGULAR)])
                    .collect(),
            ));
            data
        }
        PageView::Dashboard(d) => dashboard_page(d),
        PageView::Table(t) => {
            let mut data = page(t.title, Some(t.description.to_string()));
            data.kpis = kpi_lines(&t.kpis);
            data.table = Some(table_data(&t.table));
            data
        }
        PageView::Expenses(e) => expenses_page(e),
        PageView::Servers(s) => servers_page(s, now),
        PageView::NotFound { path } => page(
            "Page not found",
            Some(format!("Nothing lives at {}", path)),
        ),
    }
}

pub fn render_page(view: &PageView, now: DateTime<Utc>, use_color: bool) -> String {
    let data = page_data(view, now);
    render("page.tmp", &data, use_color).unwrap_or_else(|e| {
        log::error!("Rendering failed: {}", e);
        format!("{}\n", data.title)
    })
}

// --- Navigation ---

pub fn render_header(header: &HeaderView, use_color: bool) -> String {
    let mut line = vec![span(
        header.user_name.clone().unwrap_or_default(),
        names::TITLE,
    )];
    if let Some(email) = &header.user_email {
        line.push(span(format!(" <{}>", email), names::MUTED));
    }
    if let Some(role) = header.role {
        line.push(span(format!(" · {}", role), names::REGULAR));
    }
    if let Some(org) = &header.organization {
        line.push(span(format!(" · {}", org), names::REGULAR));
    }
    let unread_style = if header.unread_notifications > 0 {
        names::UNREAD
    } else {
        names::MUTED
    };
    line.push(span(
        format!(" · {} unread", header.unread_notifications),
        unread_style,
    ));
    render_lines(vec![Block::untitled(vec![line])], "", use_color)
}

pub fn render_sidebar(sections: &[NavSection], use_color: bool) -> String {
    let blocks = sections
        .iter()
        .map(|section| {
            let mut rows: Vec<Line> = Vec::new();
            if let Some(href) = section.href {
                rows.push(vec![span(href, names::LINK)]);
            }
            rows.extend(
                section
                    .children
                    .iter()
                    .map(|c| vec![span(c.title, names::REGULAR), span(c.href, names::LINK)]),
            );
            Block::new(section.title, align(rows))
        })
        .collect();
    render_lines(blocks, "No sections available.", use_color)
}

pub fn render_palette(items: &[PaletteItem], use_color: bool) -> String {
    let mut blocks: Vec<Block> = Vec::new();
    let mut current: Option<(String, Vec<Line>)> = None;
    for item in items {
        let heading = item.group.heading().to_string();
        let line = vec![
            span(item.label.clone(), names::REGULAR),
            span(item.href.clone(), names::LINK),
        ];
        match current.as_mut() {
            Some((h, lines)) if *h == heading => lines.push(line),
            _ => {
                if let Some((h, lines)) = current.take() {
                    blocks.push(Block::new(h, lines));
                }
                current = Some((heading, vec![line]));
            }
        }
    }
    if let Some((h, lines)) = current {
        blocks.push(Block::new(h, lines));
    }
    let blocks = blocks
        .into_iter()
        .map(|b| Block {
            heading: b.heading,
            lines: align(b.lines),
        })
        .collect();
    render_lines(blocks, "", use_color)
}

pub fn render_notifications(
    notifications: &[Notification],
    now: DateTime<Utc>,
    use_color: bool,
) -> String {
    if notifications.is_empty() {
        return String::new();
    }
    let rows = notifications
        .iter()
        .map(|n| {
            let (marker, title_style) = if n.read {
                (" ", names::REGULAR)
            } else {
                (UNREAD_MARKER, names::UNREAD)
            };
            vec![
                span(marker, names::UNREAD),
                span(n.id.clone(), names::MUTED),
                span(truncate_to_width(&n.title, MAX_CELL_WIDTH), title_style),
                span(
                    format!(
                        "{:>width$}",
                        format_time_ago(n.created_at, now),
                        width = TIME_WIDTH
                    ),
                    names::TIME,
                ),
                span(truncate_to_width(&n.message, MAX_CELL_WIDTH * 2), names::MUTED),
            ]
        })
        .collect();
    render_lines(vec![Block::untitled(align(rows))], "", use_color)
}

// --- Local ---

pub fn render_config(config: &ErpConfig, use_color: bool) -> String {
    let rows = ErpConfig::KEYS
        .iter()
        .map(|key| {
            vec![
                span(*key, names::REGULAR),
                span("=", names::FAINT),
                span(config.get(key).unwrap_or_default(), names::KPI),
            ]
        })
        .collect();
    render_lines(vec![Block::untitled(align(rows))], "", use_color)
}

pub fn render_paths(paths: &[PathBuf], use_color: bool) -> String {
    let lines = paths
        .iter()
        .map(|p| vec![span(p.display().to_string(), names::REGULAR)])
        .collect();
    render_lines(vec![Block::untitled(lines)], "", use_color)
}

/// Records as pretty JSON: a single record prints as an object.
pub fn render_records(records: &[serde_json::Value]) -> String {
    let text = match records {
        [one] => serde_json::to_string_pretty(one),
        many => serde_json::to_string_pretty(many),
    };
    text.map(|t| format!("{}\n", t)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use erpdash::commands::ListOptions;
    use erpdash::state::AppState;
    use erpdash::table::{Cell, Footer, HeaderSnapshot, RowSnapshot};
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 20, 12, 0, 0).unwrap()
    }

    fn snapshot(rows: Vec<RowSnapshot>, selectable: bool) -> TableSnapshot {
        TableSnapshot {
            headers: vec![
                HeaderSnapshot {
                    key: "id".into(),
                    header: "ID".into(),
                    sortable: true,
                    sorted: Some(SortDirection::Desc),
                },
                HeaderSnapshot {
                    key: "status".into(),
                    header: "Status".into(),
                    sortable: true,
                    sorted: None,
                },
            ],
            footer: (!rows.is_empty()).then(|| Footer {
                start: 1,
                end: rows.len(),
                total: rows.len(),
                page: 1,
                page_count: 1,
            }),
            selected_count: rows.iter().filter(|r| r.selected).count(),
            empty: rows.is_empty().then(|| EmptyState {
                title: "No invoices found".into(),
                description: "Try adjusting your search or filters".into(),
            }),
            rows,
            selectable,
            header_check: HeaderCheck::Indeterminate,
            query: String::new(),
            page_size: 10,
        }
    }

    fn row(id: &str, status: &str, selected: bool) -> RowSnapshot {
        RowSnapshot {
            id: id.into(),
            selected,
            cells: vec![
                Cell::from(id.to_string()),
                Cell::styled(status, status_variant(status).as_str()),
            ],
        }
    }

    #[test]
    fn truncates_by_display_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_to_width("a much longer title", 10), "a much lo…");
        assert_eq!(truncate_to_width("日本語テキスト", 7), "日本語…");
    }

    #[test]
    fn align_pads_all_but_last_column() {
        let lines = align(vec![
            vec![span("a", "regular"), span("x", "regular")],
            vec![span("long", "regular"), span("y", "regular")],
        ]);
        let text: Vec<String> = lines
            .iter()
            .map(|l| l.iter().map(|s| s.text.as_str()).collect())
            .collect();
        assert_eq!(text, vec!["a     x", "long  y"]);
    }

    #[test]
    fn table_renders_headers_rows_and_footer() {
        let table = snapshot(
            vec![row("inv-4", "overdue", false), row("inv-10", "paid", false)],
            false,
        );
        let out = render_table(&table, false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "ID ↓    Status");
        assert_eq!(lines[1], "inv-4   overdue");
        assert_eq!(lines[2], "inv-10  paid");
        assert_eq!(lines[3], "Showing 1 to 2 of 2 results · Page 1 of 1");
    }

    #[test]
    fn selectable_table_shows_checkboxes_and_count() {
        let table = snapshot(
            vec![row("inv-1", "paid", true), row("inv-2", "sent", false)],
            true,
        );
        let out = render_table(&table, false);
        assert!(out.starts_with("[-]  ID ↓"));
        assert!(out.contains("[x]  inv-1"));
        assert!(out.contains("[ ]  inv-2"));
        assert!(out.ends_with("1 row selected\n"));
    }

    #[test]
    fn empty_table_shows_empty_state() {
        let out = render_table(&snapshot(vec![], false), false);
        assert_eq!(out, "No invoices found\nTry adjusting your search or filters\n");
    }

    #[test]
    fn colored_table_styles_badges() {
        let table = snapshot(vec![row("inv-4", "overdue", false)], false);
        let plain = render_table(&table, false);
        let colored = render_table(&table, true);
        assert!(!plain.contains('\u{1b}'));
        assert!(colored.contains('\u{1b}'));
        assert!(!colored.contains("(!?)"));
    }

    #[test]
    fn messages_render_one_per_line() {
        let out = render_messages(
            &[CmdMessage::success("Saved"), CmdMessage::info("Nothing else")],
            false,
        );
        assert_eq!(out, "Saved\nNothing else\n");
        assert_eq!(render_messages(&[], false), "");
    }

    fn signed_in() -> AppState {
        let mut state = AppState::new();
        state.login("admin@acme.com", "demo123");
        state
    }

    #[test]
    fn dashboard_page_has_kpis_and_sections() {
        let state = signed_in();
        let view = PageView::Dashboard(DashboardView::build(&state));
        let out = render_page(&view, now(), false);
        assert!(out.starts_with("Welcome back, Alex"));
        assert!(out.contains("Total Revenue"));
        assert!(out.contains("Revenue vs expenses"));
        assert!(out.contains("Quick actions"));
        assert!(!out.contains("(!?)"));
    }

    #[test]
    fn servers_page_colors_every_status() {
        let state = signed_in();
        let view = PageView::Servers(ServersOverview::build(&state));
        assert!(!render_page(&view, now(), true).contains("(!?)"));
        let plain = render_page(&view, now(), false);
        assert!(plain.starts_with("Servers\n"));
        assert!(plain.contains("staging-app-01"));
    }

    #[test]
    fn login_page_lists_demo_accounts() {
        let view = PageView::Login {
            demo_accounts: vec!["admin@acme.com".into()],
            redirected_from: Some("/invoices".into()),
        };
        let out = render_page(&view, now(), false);
        assert_eq!(
            out,
            "Sign in\nSign in to continue to /invoices\n\nDemo accounts (password: demo123)\nadmin@acme.com\n"
        );
    }

    #[test]
    fn table_page_includes_the_table() {
        let mut state = signed_in();
        let res = erpdash::commands::page::run(
            &mut state,
            "/invoices",
            &ListOptions::default(),
            now().date_naive(),
        )
        .unwrap();
        let out = render_page(&res.page.unwrap(), now(), false);
        assert!(out.starts_with("Invoices\n"));
        assert!(out.contains("Showing 1 to "));
        assert!(out.contains("Outstanding"));
    }

    #[test]
    fn header_line() {
        let state = signed_in();
        let out = render_header(&erpdash::nav::header(&state), false);
        assert!(out.starts_with("Alex Morgan <admin@acme.com> · admin · "));
        assert!(out.ends_with(" unread\n"));
    }

    #[test]
    fn palette_groups_items_under_headings() {
        let state = signed_in();
        let items = erpdash::nav::filter_palette(erpdash::nav::palette_items(&state), "invoice");
        let out = render_palette(&items, false);
        assert_eq!(
            out,
            "Quick Actions\nCreate Invoice  /invoices/new\n\nNavigation\nInvoices  /invoices\n"
        );
    }

    #[test]
    fn notifications_mark_unread() {
        let state = signed_in();
        let notifications = state.data.notifications.as_slice();
        let out = render_notifications(notifications, now(), false);
        assert_eq!(out.lines().count(), notifications.len());
        assert!(out.lines().any(|l| l.starts_with(UNREAD_MARKER)));
    }

    #[test]
    fn time_ago_is_relative_to_now() {
        let out = format_time_ago(now() - Duration::hours(3), now());
        assert_eq!(out, "3 hours ago");
    }

    #[test]
    fn config_lists_every_key() {
        let out = render_config(&ErpConfig::default(), false);
        assert_eq!(out, "page-size       =  10\nlogin-delay-ms  =  500\n");
    }

    #[test]
    fn single_record_prints_as_object() {
        let out = render_records(&[json!({"id": "cust-1"})]);
        assert!(out.starts_with('{'));
        let out = render_records(&[json!({"id": "a"}), json!({"id": "b"})]);
        assert!(out.starts_with('['));
    }
}
