// ============================================================================
// REPORT MODEL - Resumen de report en el dashboard
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Resumen de un report tal como lo devuelve el endpoint de stats.
/// Es el subconjunto que necesita la lista de actividad reciente,
/// NO el documento completo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    /// ID único del report (se usa para navegar al detalle)
    pub id: String,

    /// Título del report
    pub title: String,

    /// Nombre del cliente asociado
    pub client_name: String,

    /// Timestamp de creación (RFC 3339)
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn parsea_report_del_wire() {
        let json = r#"{
            "id": "r1",
            "title": "Q1",
            "client_name": "Acme",
            "created_at": "2024-01-01T00:00:00Z"
        }"#;
        let report: Report = serde_json::from_str(json).unwrap();
        assert_eq!(report.id, "r1");
        assert_eq!(report.title, "Q1");
        assert_eq!(report.client_name, "Acme");
        assert_eq!(report.created_at.year(), 2024);
    }
}
