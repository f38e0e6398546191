// ============================================================================
// APP VIEW - Dispatcher de vistas
// ============================================================================
// El guard ya se aplicó en el controller (App::render): cuando llegamos acá
// hay un usuario autenticado. Las vistas nunca redirigen por su cuenta.
// ============================================================================

use crate::state::AppState;
use crate::views::render_dashboard;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Renderizar la aplicación completa
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    render_dashboard(state)
}
