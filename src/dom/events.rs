// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Para listeners en elementos del DOM: cuando el elemento se destruye
//   (p.ej. con set_inner_html("")), el navegador automáticamente limpia los
//   listeners asociados. Por lo tanto, closure.forget() es seguro para
//   listeners locales.
// - Para listeners globales (window/document): solo deben registrarse UNA VEZ
//   al inicio de la app (ver el listener de pagehide en lib.rs).
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

/// Helper para crear click handler simple
/// Nota: Cuando el elemento se destruye del DOM (p.ej. con set_inner_html("")),
/// el navegador automáticamente limpia los listeners, por lo que closure.forget() es seguro.
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    // Nota: closure.forget() es necesario para mantener el closure vivo en Rust WASM
    closure.forget();
    Ok(())
}
