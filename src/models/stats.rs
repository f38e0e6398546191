// ============================================================================
// DASHBOARD STATS - Agregados mostrados en el dashboard
// ============================================================================

use crate::models::Report;
use serde::{Deserialize, Serialize};

/// Stats agregadas del dashboard. Se crea con ceros al montar la página y
/// se reemplaza COMPLETA cuando el fetch resuelve (nunca merges parciales).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Total de clientes del usuario
    pub total_clients: usize,

    /// Total de reports creados
    pub total_reports: usize,

    /// Reports recientes, en el orden que los devuelve el backend
    pub recent_reports: Vec<Report>,
}

impl DashboardStats {
    /// ¿Hay actividad reciente que listar?
    pub fn has_recent_reports(&self) -> bool {
        !self.recent_reports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_es_todo_en_cero() {
        let stats = DashboardStats::default();
        assert_eq!(stats.total_clients, 0);
        assert_eq!(stats.total_reports, 0);
        assert!(!stats.has_recent_reports());
    }

    #[test]
    fn parsea_respuesta_del_endpoint() {
        let json = r#"{
            "totalClients": 5,
            "totalReports": 3,
            "recentReports": []
        }"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_clients, 5);
        assert_eq!(stats.total_reports, 3);
        assert!(stats.recent_reports.is_empty());
    }

    #[test]
    fn conserva_el_orden_de_reports_recibido() {
        let json = r#"{
            "totalClients": 2,
            "totalReports": 2,
            "recentReports": [
                {"id":"r2","title":"Q2","client_name":"Acme","created_at":"2024-04-01T00:00:00Z"},
                {"id":"r1","title":"Q1","client_name":"Acme","created_at":"2024-01-01T00:00:00Z"}
            ]
        }"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = stats.recent_reports.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r2", "r1"]);
    }
}
