// ============================================================================
// SESSION SERVICE - Resolución de sesión + cache en localStorage
// ============================================================================

use crate::models::User;
use crate::services::api_client::ApiClient;
use crate::utils::constants::CACHED_USER_KEY;
use crate::utils::storage::{load_from_storage, remove_from_storage, save_to_storage};

/// Service de sesión: usuario cacheado como fast path, backend como verdad.
pub struct SessionService;

impl SessionService {
    pub fn new() -> Self {
        Self
    }

    /// Cargar usuario cacheado desde localStorage
    pub fn load_cached_user(&self) -> Option<User> {
        load_from_storage::<User>(CACHED_USER_KEY)
    }

    /// Guardar usuario en cache
    pub fn cache_user(&self, user: &User) -> Result<(), String> {
        save_to_storage(CACHED_USER_KEY, user)?;
        log::info!("💾 Usuario cacheado en storage");
        Ok(())
    }

    /// Limpiar usuario cacheado
    pub fn clear_cached_user(&self) -> Result<(), String> {
        remove_from_storage(CACHED_USER_KEY)
    }

    /// Resolver la sesión: primero el cache, si no hay se consulta el backend.
    /// Un fallo de red del endpoint de sesión se trata como sesión ausente
    /// (el guard redirige al signin), no como error fatal.
    pub async fn resolve_user(&self) -> Option<User> {
        if let Some(user) = self.load_cached_user() {
            log::info!("💾 [SESSION] Usuario restaurado desde storage: {}", user.email);
            return Some(user);
        }

        let api = ApiClient::new();
        match api.get_session_user(None).await {
            Ok(Some(user)) => {
                if let Err(e) = self.cache_user(&user) {
                    log::error!("❌ Error cacheando usuario: {}", e);
                }
                Some(user)
            }
            Ok(None) => None,
            Err(e) => {
                log::error!("❌ [SESSION] Error resolviendo sesión: {}", e);
                None
            }
        }
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}
