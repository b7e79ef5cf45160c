// ============================================================================
// NAVBAR VIEW - Enlaces a home y subida de CV
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::router::{Navigator, Route};
use crate::utils::constants::UPLOAD_PATH;

/// Renderizar navbar
pub fn render_navbar(navigator: Rc<dyn Navigator>) -> Result<Element, JsValue> {
    let home_label = ElementBuilder::new("p")?
        .class("text-2xl font-bold text-gradient")
        .text("Ai resume")
        .build();

    let home_link = ElementBuilder::new("a")?
        .link(Route::Home.path(), navigator.clone())?
        .child(home_label)?
        .build();

    let upload_link = ElementBuilder::new("a")?
        .class("primary-button w-fit")
        .link(UPLOAD_PATH, navigator)?
        .text("Upload Resume")
        .build();

    Ok(ElementBuilder::new("nav")?
        .class("navbar")
        .child(home_link)?
        .child(upload_link)?
        .build())
}
