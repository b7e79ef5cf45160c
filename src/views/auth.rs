// ============================================================================
// AUTH VIEW - Login / logout mínimo
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{apply_page_meta, on_click, text_element, ElementBuilder};
use crate::models::AUTH_META;
use crate::viewmodels::AuthViewModel;

/// Renderizar /auth. `current_url` conserva el `next` para volver tras el login.
pub fn render_auth(vm: Rc<AuthViewModel>, current_url: &str) -> Result<Element, JsValue> {
    apply_page_meta(&AUTH_META)?;

    let button = ElementBuilder::new("button")?
        .class("auth-button")
        .attr("type", "button")?
        .text(vm.button_label())
        .build();
    {
        let url = current_url.to_string();
        on_click(&button, move |_e| {
            vm.toggle(&url);
        })?;
    }

    let card = ElementBuilder::new("section")?
        .class("flex flex-col gap-8 bg-white rounded-2xl p-10")
        .child(
            ElementBuilder::new("div")?
                .class("flex flex-col items-center gap-2 text-center")
                .child(text_element("h1", "Welcome")?)?
                .child(text_element("h2", "Log In to Continue Your Job Journey")?)?
                .build(),
        )?
        .child(button)?
        .build();

    Ok(ElementBuilder::new("main")?
        .class("bg-[url('/images/bg-auth.svg')] bg-cover min-h-screen flex items-center justify-center")
        .child(
            ElementBuilder::new("div")?
                .class("gradient-border shadow-lg")
                .child(card)?
                .build(),
        )?
        .build())
}
