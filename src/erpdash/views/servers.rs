use super::{average_uptime, money, quick_link, Kpi, QuickLink, Trend};
use crate::model::{
    Environment, IncidentStatus, MaintenanceStatus, Provider, ServerStatus, Severity,
};
use crate::state::AppState;
use chrono::{DateTime, Utc};
use serde::Serialize;

const RECENT_LIMIT: usize = 5;

const QUICK_ACTIONS: [QuickLink; 5] = [
    quick_link("All Servers", "/servers/list"),
    quick_link("Services", "/servers/services"),
    quick_link("Log Incident", "/servers/incidents/new"),
    quick_link("Maintenance", "/servers/maintenance"),
    quick_link("Cost Report", "/servers/costs"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerLine {
    pub id: String,
    pub name: String,
    pub provider: Provider,
    pub region: String,
    pub status: ServerStatus,
    pub uptime: f64,
    pub cpu_usage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncidentLine {
    pub id: String,
    pub title: String,
    pub severity: Severity,
    pub status: IncidentStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenanceLine {
    pub id: String,
    pub target: String,
    pub reason: String,
    pub status: MaintenanceStatus,
    pub scheduled_start: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServersOverview {
    pub online: usize,
    pub total: usize,
    pub avg_uptime: f64,
    pub open_incidents: usize,
    pub monthly_cost: f64,
    pub production: usize,
    pub servers: Vec<ServerLine>,
    pub incidents: Vec<IncidentLine>,
    pub maintenance: Vec<MaintenanceLine>,
    pub kpis: Vec<Kpi>,
    pub quick_actions: &'static [QuickLink],
}

impl ServersOverview {
    pub fn build(state: &AppState) -> Self {
        let data = &state.data;

        let online = data
            .servers
            .iter()
            .filter(|s| s.status == ServerStatus::Online)
            .count();
        let total = data.servers.len();
        let avg_uptime = average_uptime(data.servers.iter().map(|s| s.uptime));
        let open_incidents = data.incidents.iter().filter(|i| i.is_open()).count();
        let monthly_cost: f64 = data.servers.iter().map(|s| s.monthly_cost).sum();
        let production = data
            .servers
            .iter()
            .filter(|s| s.environment == Environment::Production)
            .count();

        let servers = data
            .servers
            .iter()
            .take(RECENT_LIMIT)
            .map(|s| ServerLine {
                id: s.id.clone(),
                name: s.name.clone(),
                provider: s.provider,
                region: s.region.clone(),
                status: s.status,
                uptime: s.uptime,
                cpu_usage: s.cpu_usage,
            })
            .collect();
        let incidents = data
            .incidents
            .iter()
            .take(RECENT_LIMIT)
            .map(|i| IncidentLine {
                id: i.id.clone(),
                title: i.title.clone(),
                severity: i.severity,
                status: i.status,
                created_at: i.created_at,
            })
            .collect();
        let maintenance = data
            .maintenance_windows
            .iter()
            .filter(|w| {
                matches!(
                    w.status,
                    MaintenanceStatus::Scheduled | MaintenanceStatus::InProgress
                )
            })
            .map(|w| MaintenanceLine {
                id: w.id.clone(),
                target: w
                    .server_name
                    .clone()
                    .or_else(|| w.service_name.clone())
                    .unwrap_or_default(),
                reason: w.reason.clone(),
                status: w.status,
                scheduled_start: w.scheduled_start,
            })
            .collect();

        let kpis = vec![
            Kpi::new("Servers Online", format!("{}/{}", online, total)).trend(
                if online == total {
                    Trend::Up
                } else {
                    Trend::Down
                },
            ),
            Kpi::new("Avg Uptime", format!("{:.2}%", avg_uptime)).trend(Trend::Up),
            Kpi::new("Open Incidents", open_incidents).trend(if open_incidents == 0 {
                Trend::Up
            } else {
                Trend::Down
            }),
            Kpi::new("Monthly Cost", money(monthly_cost))
                .detail(format!("{} production", production)),
        ];

        Self {
            online,
            total,
            avg_uptime,
            open_incidents,
            monthly_cost,
            production,
            servers,
            incidents,
            maintenance,
            kpis,
            quick_actions: &QUICK_ACTIONS,
        }
    }
}
