// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use crate::config::CONFIG;
use crate::models::{DashboardStats, User};
use crate::utils::constants::{SESSION_ENDPOINT, STATS_ENDPOINT};
use gloo_net::http::Request;
use web_sys::AbortSignal;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
        }
    }

    /// Resolver el usuario de la sesión actual.
    /// 401 NO es un error: significa sesión ausente (Ok(None)).
    pub async fn get_session_user(
        &self,
        signal: Option<&AbortSignal>,
    ) -> Result<Option<User>, String> {
        let url = format!("{}{}", self.base_url, SESSION_ENDPOINT);

        log::info!("🔐 Resolviendo sesión");

        let response = Request::get(&url)
            .abort_signal(signal)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.status() == 401 {
            log::info!("⚠️ Sesión ausente (401)");
            return Ok(None);
        }

        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }

        let session = response
            .json::<SessionResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        if let Some(ref user) = session.user {
            log::info!("✅ Sesión resuelta: {}", user.email);
        }

        Ok(session.user)
    }

    /// Obtener las stats agregadas del dashboard
    pub async fn fetch_dashboard_stats(
        &self,
        signal: Option<&AbortSignal>,
    ) -> Result<DashboardStats, String> {
        let url = format!("{}{}", self.base_url, STATS_ENDPOINT);

        log::info!("📊 Obteniendo stats del dashboard");

        let response = Request::get(&url)
            .abort_signal(signal)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }

        let stats = response
            .json::<DashboardStats>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        log::info!(
            "✅ Stats obtenidas: {} clientes, {} reports, {} recientes",
            stats.total_clients,
            stats.total_reports,
            stats.recent_reports.len()
        );

        Ok(stats)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(serde::Deserialize)]
struct SessionResponse {
    pub user: Option<User>,
}
