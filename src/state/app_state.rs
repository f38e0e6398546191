// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use crate::models::DashboardStats;
use crate::state::AuthState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::AbortController;

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,

    // Dashboard State
    pub stats: Rc<RefCell<DashboardStats>>,
    pub stats_loading: Rc<RefCell<bool>>,

    // AbortController del fetch de stats en vuelo (uno por montaje).
    // Se aborta en pagehide y antes de redirigir al signin, para que
    // ninguna respuesta tardía toque el estado después del desmontaje.
    pub pending_fetch: Rc<RefCell<Option<AbortController>>>,

    // Reactivity: Callbacks para notificar cambios (usamos Rc para poder compartir)
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new() -> Self {
        Self {
            auth: AuthState::new(),
            stats: Rc::new(RefCell::new(DashboardStats::default())),
            stats_loading: Rc::new(RefCell::new(true)),
            pending_fetch: Rc::new(RefCell::new(None)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Reemplazar las stats completas (nunca merge parcial)
    pub fn set_stats(&self, stats: DashboardStats) {
        *self.stats.borrow_mut() = stats;
        self.notify_subscribers();
    }

    /// Obtener stats actuales
    pub fn get_stats(&self) -> DashboardStats {
        self.stats.borrow().clone()
    }

    /// Establecer stats_loading
    pub fn set_stats_loading(&self, loading: bool) {
        *self.stats_loading.borrow_mut() = loading;
        self.notify_subscribers();
    }

    /// Obtener stats_loading
    pub fn get_stats_loading(&self) -> bool {
        *self.stats_loading.borrow()
    }

    /// Registrar el AbortController del fetch en vuelo
    pub fn track_pending_fetch(&self, controller: AbortController) {
        *self.pending_fetch.borrow_mut() = Some(controller);
    }

    /// Olvidar el fetch en vuelo (ya resolvió)
    pub fn clear_pending_fetch(&self) {
        *self.pending_fetch.borrow_mut() = None;
    }

    /// Abortar el fetch en vuelo si existe
    pub fn abort_pending_fetch(&self) {
        if let Some(controller) = self.pending_fetch.borrow_mut().take() {
            log::info!("🛑 [STATE] Abortando fetch de stats en vuelo");
            controller.abort();
        }
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers de cambios
    pub fn notify_subscribers(&self) {
        let subscribers: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DashboardStats;

    #[test]
    fn set_stats_reemplaza_completo() {
        let state = AppState::new();
        let stats = DashboardStats {
            total_clients: 5,
            total_reports: 3,
            recent_reports: Vec::new(),
        };
        state.set_stats(stats);
        assert_eq!(state.get_stats().total_clients, 5);
        assert_eq!(state.get_stats().total_reports, 3);
    }

    #[test]
    fn notifica_a_los_subscribers() {
        let state = AppState::new();
        let hits = Rc::new(RefCell::new(0));
        {
            let hits = hits.clone();
            state.subscribe_to_changes(move || {
                *hits.borrow_mut() += 1;
            });
        }
        state.set_stats_loading(false);
        state.set_stats(DashboardStats::default());
        assert_eq!(*hits.borrow(), 2);
    }
}
