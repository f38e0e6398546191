// ============================================================================
// AUTH STATE - Estado de autenticación de la sesión
// ============================================================================

use crate::models::User;
use std::cell::RefCell;
use std::rc::Rc;

/// Estado de autenticación. `loading` arranca en true: mientras la sesión
/// no está resuelta el guard del router no deja renderizar nada.
#[derive(Clone)]
pub struct AuthState {
    pub loading: Rc<RefCell<bool>>,
    pub user: Rc<RefCell<Option<User>>>,
}

impl AuthState {
    /// Crear nuevo estado de autenticación (sesión sin resolver)
    pub fn new() -> Self {
        Self {
            loading: Rc::new(RefCell::new(true)),
            user: Rc::new(RefCell::new(None)),
        }
    }

    /// Establecer loading
    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
    }

    /// Obtener loading
    pub fn get_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Establecer usuario
    pub fn set_user(&self, user: Option<User>) {
        *self.user.borrow_mut() = user;
    }

    /// Obtener usuario
    pub fn get_user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    /// ¿Hay un usuario autenticado?
    pub fn has_user(&self) -> bool {
        self.user.borrow().is_some()
    }

    /// Marcar la sesión como resuelta con (o sin) usuario
    pub fn resolve(&self, user: Option<User>) {
        *self.user.borrow_mut() = user;
        *self.loading.borrow_mut() = false;
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arranca_sin_resolver() {
        let auth = AuthState::new();
        assert!(auth.get_loading());
        assert!(!auth.has_user());
    }

    #[test]
    fn resolve_limpia_loading() {
        let auth = AuthState::new();
        auth.resolve(None);
        assert!(!auth.get_loading());
        assert!(!auth.has_user());
    }
}
