// ============================================================================
// ROUTER - Rutas + guard de acceso
// ============================================================================
// La protección de rutas vive AQUÍ, no en las vistas: el controller evalúa
// el guard antes de renderizar y las vistas solo navegan en respuesta a
// clicks del usuario.
// ============================================================================

use crate::state::AuthState;
use crate::utils::constants::{DASHBOARD_PATH, NEW_REPORT_PATH, REPORTS_PATH, SIGNIN_PATH};

/// Rutas que conoce el frontend
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Dashboard,
    SignIn,
    NewReport,
    ReportDetail(String),
    NotFound,
}

impl Route {
    /// Parsear una ruta desde un pathname
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/" => Route::Dashboard,
            p if p == DASHBOARD_PATH => Route::Dashboard,
            p if p == SIGNIN_PATH => Route::SignIn,
            p if p == NEW_REPORT_PATH => Route::NewReport,
            p => {
                if let Some(id) = p.strip_prefix(REPORTS_PATH).and_then(|rest| rest.strip_prefix('/')) {
                    if !id.is_empty() && !id.contains('/') {
                        return Route::ReportDetail(id.to_string());
                    }
                }
                Route::NotFound
            }
        }
    }

    /// Pathname de la ruta
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => DASHBOARD_PATH.to_string(),
            Route::SignIn => SIGNIN_PATH.to_string(),
            Route::NewReport => NEW_REPORT_PATH.to_string(),
            Route::ReportDetail(id) => format!("{}/{}", REPORTS_PATH, id),
            Route::NotFound => "/404".to_string(),
        }
    }
}

/// Decisión del guard de acceso al dashboard
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GuardDecision {
    /// Sesión sin resolver: no renderizar nada todavía
    Wait,
    /// Sesión resuelta sin usuario: redirigir al signin
    RedirectToSignIn,
    /// Usuario presente: renderizar la página
    Allow,
}

/// Guard del dashboard: decide acceso a partir del estado de auth
pub fn guard_dashboard(auth: &AuthState) -> GuardDecision {
    guard_from_flags(auth.get_loading(), auth.has_user())
}

/// Versión pura del guard (los flags ya leídos)
pub fn guard_from_flags(session_loading: bool, has_user: bool) -> GuardDecision {
    if session_loading {
        GuardDecision::Wait
    } else if !has_user {
        GuardDecision::RedirectToSignIn
    } else {
        GuardDecision::Allow
    }
}

/// Ruta actual según window.location.pathname
pub fn current_route() -> Route {
    web_sys::window()
        .map(|win| win.location())
        .and_then(|loc| loc.pathname().ok())
        .map(|path| Route::parse(&path))
        .unwrap_or(Route::Dashboard)
}

/// Navegar con cambio de documento completo (window.location)
pub fn navigate_to(path: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.location().set_href(path) {
            log::error!("❌ [ROUTER] Error navegando a {}: {:?}", path, e);
        }
    }
}

/// Navegar a una ruta conocida
pub fn navigate_to_route(route: &Route) {
    navigate_to(&route.path());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsea_rutas_conocidas() {
        assert_eq!(Route::parse("/dashboard"), Route::Dashboard);
        assert_eq!(Route::parse("/"), Route::Dashboard);
        assert_eq!(Route::parse("/account/signin"), Route::SignIn);
        assert_eq!(Route::parse("/reports/new"), Route::NewReport);
        assert_eq!(
            Route::parse("/reports/r1"),
            Route::ReportDetail("r1".to_string())
        );
        assert_eq!(Route::parse("/otra/cosa"), Route::NotFound);
    }

    #[test]
    fn detalle_ida_y_vuelta() {
        let route = Route::ReportDetail("abc123".to_string());
        assert_eq!(Route::parse(&route.path()), route);
    }

    #[test]
    fn guard_espera_mientras_resuelve() {
        assert_eq!(guard_from_flags(true, false), GuardDecision::Wait);
        // Aunque haya usuario cacheado, loading manda
        assert_eq!(guard_from_flags(true, true), GuardDecision::Wait);
    }

    #[test]
    fn guard_redirige_sin_usuario() {
        assert_eq!(guard_from_flags(false, false), GuardDecision::RedirectToSignIn);
    }

    #[test]
    fn guard_permite_con_usuario() {
        assert_eq!(guard_from_flags(false, true), GuardDecision::Allow);
    }
}
