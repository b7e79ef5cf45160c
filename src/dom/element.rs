// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};
use crate::models::PageMeta;

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Establecer class name (reemplaza todas las clases)
pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Vaciar contenido
pub fn clear_children(element: &Element) {
    element.set_inner_html("");
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Aplicar metadatos de página: `<title>` y `<meta name="description">`
pub fn apply_page_meta(meta: &PageMeta) -> Result<(), JsValue> {
    let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;
    doc.set_title(meta.title);

    let description = match doc.query_selector("meta[name=\"description\"]")? {
        Some(existing) => existing,
        None => {
            let created = doc.create_element("meta")?;
            created.set_attribute("name", "description")?;
            let head = doc.head().ok_or_else(|| JsValue::from_str("No <head>"))?;
            head.append_child(&created)?;
            created
        }
    };
    description.set_attribute("content", meta.description)
}
