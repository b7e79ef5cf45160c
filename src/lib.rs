// ============================================================================
// AI-RESUME - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Gate de autenticación + composición de páginas
// - Router: Tabla de rutas estática + History API
// - Services: SOLO carga de catálogo y persistencia de sesión
// - State: State Management con Rc<RefCell> + suscripciones
// - Models: Estructuras del catálogo
// ============================================================================

pub mod models;
pub mod state;
pub mod router;
pub mod services;
pub mod viewmodels;
pub mod dom;
pub mod views;
pub mod utils;
pub mod app;

use std::cell::{Cell, RefCell};
use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use gloo_timers::callback::Timeout;
use crate::app::App;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
    static RERENDER_PENDING: Cell<bool> = Cell::new(false);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    wasm_logger::init(Config::default());
    log::info!("🚀 AI-Resume - Rust Puro + MVVM");

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    router::listen_popstate()?;
    Ok(())
}

/// Re-render completo de la ruta actual
pub fn rerender_app() {
    APP.with(|app_cell| {
        // Ocupado = ya hay un render en curso; se reintenta en el siguiente tick
        let mut app_ref = match app_cell.try_borrow_mut() {
            Ok(app_ref) => app_ref,
            Err(_) => {
                log::warn!("⚠️ [RERENDER] App ocupada, reprogramando");
                schedule_rerender();
                return;
            }
        };
        match app_ref.as_mut() {
            Some(app) => {
                if let Err(e) = app.render() {
                    log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
        }
    });
}

/// Programar re-render para el siguiente tick.
/// Varias llamadas antes del tick producen un solo render.
pub fn schedule_rerender() {
    if RERENDER_PENDING.with(|pending| pending.replace(true)) {
        return;
    }
    Timeout::new(0, || {
        RERENDER_PENDING.with(|pending| pending.set(false));
        rerender_app();
    })
    .forget();
}
