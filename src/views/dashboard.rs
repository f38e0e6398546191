// ============================================================================
// DASHBOARD VIEW - Página de dashboard (cards de stats + reports recientes)
// ============================================================================

use crate::dom::events::on_click;
use crate::dom::{append_child, ElementBuilder};
use crate::models::{DashboardStats, Report};
use crate::router::{navigate_to_route, Route};
use crate::state::AppState;
use crate::utils::format::format_report_date;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Qué mostrar en el panel de reports recientes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecentReportsBranch {
    Loading,
    Empty,
    List,
}

impl RecentReportsBranch {
    /// Seleccionar rama según el estado del fetch
    pub fn from_state(stats_loading: bool, has_reports: bool) -> Self {
        if stats_loading {
            RecentReportsBranch::Loading
        } else if !has_reports {
            RecentReportsBranch::Empty
        } else {
            RecentReportsBranch::List
        }
    }
}

/// Texto de un stat card: placeholder "..." mientras el fetch no resuelve
pub fn stat_value_text(loading: bool, value: usize) -> String {
    if loading {
        "...".to_string()
    } else {
        value.to_string()
    }
}

/// Renderizar la página de dashboard completa
pub fn render_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .class("dashboard-container")
        .build();

    let header = create_dashboard_header()?;
    append_child(&container, &header)?;

    let content = ElementBuilder::new("div")?
        .class("dashboard-content")
        .build();

    let welcome = create_welcome_section()?;
    append_child(&content, &welcome)?;

    let stats_grid = create_stats_grid(state)?;
    append_child(&content, &stats_grid)?;

    let recent = create_recent_reports_panel(state)?;
    append_child(&content, &recent)?;

    append_child(&container, &content)?;

    Ok(container)
}

/// Header de la página
fn create_dashboard_header() -> Result<Element, JsValue> {
    let header = ElementBuilder::new("div")?
        .class("app-header")
        .build();

    let title = ElementBuilder::new("h1")?
        .text("Dashboard")
        .build();
    append_child(&header, &title)?;

    Ok(header)
}

/// Sección de bienvenida
fn create_welcome_section() -> Result<Element, JsValue> {
    let section = ElementBuilder::new("div")?
        .class("welcome-section")
        .build();

    let title = ElementBuilder::new("h2")?
        .text("Welcome back!")
        .build();
    append_child(&section, &title)?;

    let subtitle = ElementBuilder::new("p")?
        .class("welcome-subtitle")
        .text("Here's what's happening with your reports today.")
        .build();
    append_child(&section, &subtitle)?;

    Ok(section)
}

/// Grid con los tres cards: clientes, reports y quick start
fn create_stats_grid(state: &AppState) -> Result<Element, JsValue> {
    let loading = state.get_stats_loading();
    let stats = state.get_stats();

    let grid = ElementBuilder::new("div")?
        .class("stats-grid")
        .build();

    let clients_card = create_stat_card(
        "👥",
        &stat_value_text(loading, stats.total_clients),
        "Total Clients",
    )?;
    append_child(&grid, &clients_card)?;

    let reports_card = create_stat_card(
        "📄",
        &stat_value_text(loading, stats.total_reports),
        "Total Reports",
    )?;
    append_child(&grid, &reports_card)?;

    let quick_start = create_quick_start_card()?;
    append_child(&grid, &quick_start)?;

    Ok(grid)
}

/// Crear stat card
fn create_stat_card(icon: &str, value: &str, label: &str) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?
        .class("stat-card")
        .build();

    let label_el = ElementBuilder::new("div")?
        .class("stat-label")
        .text(&format!("{} {}", icon, label))
        .build();

    let value_el = ElementBuilder::new("div")?
        .class("stat-value")
        .text(value)
        .build();

    append_child(&card, &label_el)?;
    append_child(&card, &value_el)?;

    Ok(card)
}

/// Card de quick start con el botón de crear report
fn create_quick_start_card() -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?
        .class("stat-card quick-start-card")
        .build();

    let label = ElementBuilder::new("div")?
        .class("stat-label")
        .text("📈 Quick Start")
        .build();
    append_child(&card, &label)?;

    let button = ElementBuilder::new("button")?
        .class("btn-create-report")
        .text("Create Report")
        .build();

    on_click(&button, move |_e| {
        navigate_to_route(&Route::NewReport);
    })?;

    append_child(&card, &button)?;

    Ok(card)
}

/// Panel de reports recientes (loading / vacío / lista)
fn create_recent_reports_panel(state: &AppState) -> Result<Element, JsValue> {
    let stats = state.get_stats();
    let branch = RecentReportsBranch::from_state(state.get_stats_loading(), stats.has_recent_reports());

    let panel = ElementBuilder::new("div")?
        .class("recent-reports-panel")
        .build();

    let title = ElementBuilder::new("h3")?
        .text("Recent Reports")
        .build();
    append_child(&panel, &title)?;

    match branch {
        RecentReportsBranch::Loading => {
            let loading = ElementBuilder::new("p")?
                .class("reports-loading")
                .text("Loading...")
                .build();
            append_child(&panel, &loading)?;
        }
        RecentReportsBranch::Empty => {
            let empty = create_empty_state()?;
            append_child(&panel, &empty)?;
        }
        RecentReportsBranch::List => {
            let list = ElementBuilder::new("div")?
                .class("reports-list")
                .build();

            for report in reports_to_list(&stats) {
                let row = create_report_row(report)?;
                append_child(&list, &row)?;
            }

            append_child(&panel, &list)?;
        }
    }

    Ok(panel)
}

/// Reports a listar: TODOS los recibidos, en el orden que devolvió el
/// backend. El backend ya limita la actividad reciente; acá no se trunca.
fn reports_to_list(stats: &DashboardStats) -> &[Report] {
    &stats.recent_reports
}

/// Empty state con call-to-action
fn create_empty_state() -> Result<Element, JsValue> {
    let empty = ElementBuilder::new("div")?
        .class("no-reports")
        .build();

    let icon = ElementBuilder::new("div")?
        .class("no-reports-icon")
        .text("📄")
        .build();
    append_child(&empty, &icon)?;

    let text = ElementBuilder::new("p")?
        .class("no-reports-text")
        .text("No reports yet")
        .build();
    append_child(&empty, &text)?;

    let button = ElementBuilder::new("button")?
        .class("btn-create-first")
        .text("Create your first report")
        .build();

    on_click(&button, move |_e| {
        navigate_to_route(&Route::NewReport);
    })?;

    append_child(&empty, &button)?;

    Ok(empty)
}

/// Fila de un report: título + cliente + fecha, navega al detalle
fn create_report_row(report: &Report) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("div")?
        .class("report-row")
        .attr("data-report-id", &report.id)?
        .build();

    let info = ElementBuilder::new("div")?
        .class("report-info")
        .build();

    let title = ElementBuilder::new("h4")?
        .class("report-title")
        .text(&report.title)
        .build();
    append_child(&info, &title)?;

    let subtitle = ElementBuilder::new("p")?
        .class("report-subtitle")
        .text(&format!(
            "{} • {}",
            report.client_name,
            format_report_date(&report.created_at)
        ))
        .build();
    append_child(&info, &subtitle)?;

    append_child(&row, &info)?;

    let report_id = report.id.clone();
    on_click(&row, move |_e| {
        navigate_to_route(&Route::ReportDetail(report_id.clone()));
    })?;

    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_mientras_carga() {
        assert_eq!(stat_value_text(true, 5), "...");
        assert_eq!(stat_value_text(false, 5), "5");
        assert_eq!(stat_value_text(false, 0), "0");
    }

    #[test]
    fn rama_loading_mientras_el_fetch_no_resuelve() {
        assert_eq!(
            RecentReportsBranch::from_state(true, false),
            RecentReportsBranch::Loading
        );
        // loading manda aunque haya datos viejos (no existen estados parciales)
        assert_eq!(
            RecentReportsBranch::from_state(true, true),
            RecentReportsBranch::Loading
        );
    }

    #[test]
    fn rama_vacia_con_cero_reports() {
        assert_eq!(
            RecentReportsBranch::from_state(false, false),
            RecentReportsBranch::Empty
        );
    }

    #[test]
    fn lista_todos_los_reports_recibidos() {
        use chrono::{TimeZone, Utc};

        let recent_reports: Vec<Report> = (1..=6)
            .map(|i| Report {
                id: format!("r{}", i),
                title: format!("Q{}", i),
                client_name: "Acme".to_string(),
                created_at: Utc.with_ymd_and_hms(2024, 1, i, 0, 0, 0).unwrap(),
            })
            .collect();

        let stats = DashboardStats {
            total_clients: 6,
            total_reports: 6,
            recent_reports,
        };

        let rows = reports_to_list(&stats);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].id, "r1");
        assert_eq!(rows[5].id, "r6");
    }

    #[test]
    fn rama_lista_con_reports() {
        assert_eq!(
            RecentReportsBranch::from_state(false, true),
            RecentReportsBranch::List
        );
    }
}
