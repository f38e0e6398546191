// ============================================================================
// APP - Controller de la página de dashboard
// ============================================================================
// Responsable de: resolver la sesión al montar, aplicar el guard del router
// antes de renderizar, disparar UN fetch de stats (abortable) cuando hay
// usuario, y re-renderizar cuando cambia el estado.
// ============================================================================

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::router::{self, GuardDecision, Route};
use crate::services::{ApiClient, SessionService};
use crate::state::AppState;
use crate::views::render_app;
use wasm_bindgen::prelude::*;
use web_sys::{AbortController, Element};

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Option<Element>,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Resolver sesión al montar (cache primero, backend si no hay)
        {
            let state_clone = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let service = SessionService::new();
                let user = service.resolve_user().await;
                let has_user = user.is_some();

                state_clone.auth.resolve(user);
                state_clone.notify_subscribers();

                // El fetch de stats está gateado en la sesión resuelta
                if has_user {
                    load_dashboard_stats(&state_clone);
                }
            });
        }

        // Suscribirse a cambios de estado para re-renderizar automáticamente
        state.subscribe_to_changes(move || {
            // Usar gloo_timers para batchear múltiples updates
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self {
            state,
            root: Some(root),
        })
    }

    /// Renderizar aplicación (aplica el guard ANTES de tocar el DOM)
    pub fn render(&mut self) -> Result<(), JsValue> {
        let root = match &self.root {
            Some(root) => root,
            None => return Ok(()),
        };

        // Este bundle solo maneja el dashboard; el resto de rutas son
        // documentos propios servidos por el backend
        let route = router::current_route();
        if route != Route::Dashboard {
            log::warn!("⚠️ [APP] Ruta {:?} no la maneja este bundle", route);
            set_inner_html(root, "");
            return Ok(());
        }

        match router::guard_dashboard(&self.state.auth) {
            GuardDecision::Wait => {
                // Sesión sin resolver: no renderizar nada
                set_inner_html(root, "");
            }
            GuardDecision::RedirectToSignIn => {
                log::info!("🔒 [APP] Sesión ausente, redirigiendo al signin");
                // No dejar ningún fetch en vuelo cuando abandonamos la página
                self.state.abort_pending_fetch();
                set_inner_html(root, "");
                router::navigate_to_route(&Route::SignIn);
            }
            GuardDecision::Allow => {
                // Limpiar contenido anterior
                set_inner_html(root, "");

                let app_view = render_app(&self.state)?;
                append_child(root, &app_view)?;
            }
        }

        Ok(())
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Disparar el fetch único de stats del dashboard (abortable).
/// Éxito reemplaza las stats completas; fallo se loguea y quedan los
/// defaults en cero. stats_loading se limpia en ambos casos.
pub fn load_dashboard_stats(state: &AppState) {
    // AbortController con scope del montaje: si la página se descarga,
    // la respuesta tardía no puede tocar el estado.
    let controller = AbortController::new().ok();
    let signal = controller.as_ref().map(|c| c.signal());

    if let Some(controller) = controller {
        state.track_pending_fetch(controller);
    }

    let state_clone = state.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let api = ApiClient::new();

        match api.fetch_dashboard_stats(signal.as_ref()).await {
            Ok(stats) => {
                state_clone.clear_pending_fetch();
                state_clone.set_stats(stats);
            }
            Err(e) => {
                if signal.as_ref().map(|s| s.aborted()).unwrap_or(false) {
                    // Abortado por teardown: no tocar el estado
                    log::info!("🛑 [APP] Fetch de stats abortado");
                    return;
                }
                state_clone.clear_pending_fetch();
                // Fallo silencioso: se muestran los defaults en cero
                log::error!("❌ [APP] Error obteniendo stats: {}", e);
            }
        }

        state_clone.set_stats_loading(false);
    });
}
