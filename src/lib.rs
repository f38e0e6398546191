// ============================================================================
// REPORTFLOW DASHBOARD - FRONTEND MVVM (RUST PURO)
// ============================================================================
// Arquitectura:
// - Views: Funciones que renderizan DOM (sin lógica de acceso)
// - Services: SOLO comunicación API + storage
// - State: State Management con Rc<RefCell>
// - Router: Parsing de rutas + guard de acceso (las vistas NO redirigen)
// - Models: Estructuras compartidas con backend
// ============================================================================

mod app;
mod config;
mod dom;
mod models;
mod router;
mod services;
mod state;
mod utils;
mod views;

use crate::app::App;
use console_error_panic_hook;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_logger::Config;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging (desactivable via ENABLE_LOGGING)
    if config::CONFIG.is_logging_enabled() {
        wasm_logger::init(Config::default());
    }
    log::info!("🚀 ReportFlow Dashboard - Rust Puro + MVVM");

    // Crear y renderizar app
    let mut app = App::new()?;
    app.render()?;

    // Abortar el fetch pendiente cuando la página se descarga.
    // Este listener global solo se registra UNA VEZ en init(), por lo que es seguro.
    {
        let state = app.state().clone();
        if let Some(win) = web_sys::window() {
            let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_e: web_sys::Event| {
                log::info!("👋 [MAIN] pagehide recibido, abortando fetch pendiente");
                state.abort_pending_fetch();
            }) as Box<dyn FnMut(web_sys::Event)>);

            win.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())?;
            // Nota: closure.forget() es necesario para mantener el closure vivo en Rust WASM.
            // Como este listener solo se registra una vez en init(), no hay riesgo de acumulación.
            closure.forget();
        }
    }

    // Guardar app en variable global
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Función pública para re-renderizar la app (re-render completo)
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(ref mut app_mut) = *app_cell.borrow_mut() {
            if let Err(e) = app_mut.render() {
                web_sys::console::error_1(&JsValue::from_str(&format!(
                    "❌ Error re-renderizando: {:?}",
                    e
                )));
            }
        } else {
            web_sys::console::warn_1(&JsValue::from_str("⚠️ [RERENDER] App no está inicializada"));
        }
    });
}

/// Función pública WASM para re-renderizar la app (llamable desde JavaScript)
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
