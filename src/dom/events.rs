// ============================================================================
// EVENT HANDLING - Listeners sobre elementos
// ============================================================================
// Listeners en elementos del DOM: al destruir el elemento (clear_children en
// cada render) el navegador limpia sus listeners, por eso forget() no acumula.
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, MouseEvent};
use crate::router::Navigator;

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Enlace client-side: el click navega con `navigator` en lugar de recargar.
/// Ctrl/Cmd/Shift/click medio mantienen el comportamiento nativo.
pub fn on_link_click(element: &Element, to: String, navigator: Rc<dyn Navigator>) -> Result<(), JsValue> {
    on_click(element, move |e: MouseEvent| {
        if e.button() != 0 || e.ctrl_key() || e.meta_key() || e.shift_key() || e.alt_key() {
            return;
        }
        e.prevent_default();
        navigator.navigate(&to);
    })
}
