use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{text_element, ElementBuilder};
use crate::router::{Navigator, Route};

/// Fallback para paths sin ruta registrada
pub fn render_not_found(navigator: Rc<dyn Navigator>) -> Result<Element, JsValue> {
    let home_link = ElementBuilder::new("a")?
        .class("primary-button w-fit")
        .link(Route::Home.path(), navigator)?
        .text("Back to home")
        .build();

    Ok(ElementBuilder::new("main")?
        .class("not-found")
        .child(text_element("h1", "404")?)?
        .child(text_element("p", "Page not found")?)?
        .child(home_link)?
        .build())
}
