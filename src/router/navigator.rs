// ============================================================================
// NAVIGATOR - Navegación programática (History API)
// ============================================================================
// navigate() es fire-and-forget: empuja la entrada en el historial y programa
// un re-render (Timeout 0), nunca re-renderiza dentro del render actual.
// ============================================================================

use std::cell::Cell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Navegación client-side hacia un path (con query opcional)
pub trait Navigator {
    fn navigate(&self, to: &str);
}

/// Navigator del navegador: `history.pushState` + re-render diferido
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, to: &str) {
        log::info!("🧭 [ROUTER] Navegando a {}", to);

        let history = web_sys::window().and_then(|w| w.history().ok());
        match history {
            Some(history) => {
                if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(to)) {
                    log::error!("❌ [ROUTER] pushState falló para {}: {:?}", to, e);
                    return;
                }
            }
            None => {
                log::warn!("⚠️ [ROUTER] History API no disponible");
                return;
            }
        }

        crate::schedule_rerender();
    }
}

/// URL actual (pathname + query cruda, sin decodificar)
pub fn current_location() -> String {
    let location = match web_sys::window() {
        Some(w) => w.location(),
        None => return "/".to_string(),
    };
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    format!("{}{}", path, search)
}

thread_local! {
    static POPSTATE_REGISTERED: Cell<bool> = Cell::new(false);
}

/// Re-renderizar en back/forward del navegador.
/// Listener global: solo se registra una vez.
pub fn listen_popstate() -> Result<(), JsValue> {
    if POPSTATE_REGISTERED.with(|flag| flag.replace(true)) {
        log::warn!("⚠️ [ROUTER] listener popstate ya registrado, ignorando");
        return Ok(());
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let closure = Closure::wrap(Box::new(move |_e: web_sys::PopStateEvent| {
        log::info!("🔙 [ROUTER] popstate, re-renderizando");
        crate::rerender_app();
    }) as Box<dyn FnMut(web_sys::PopStateEvent)>);

    window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
    // Listener global registrado una sola vez: forget() no acumula closures
    closure.forget();
    Ok(())
}
