// ============================================================================
// ELEMENT BUILDER - Construcción encadenada de nodos para las vistas
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, create_element, on_link_click, set_attribute, set_class_name, set_text_content};
use crate::router::Navigator;

pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    pub fn new(tag: &str) -> Result<Self, JsValue> {
        Ok(Self {
            element: create_element(tag)?,
        })
    }

    /// Reemplaza todas las clases
    pub fn class(self, class: &str) -> Self {
        set_class_name(&self.element, class);
        self
    }

    pub fn text(self, text: &str) -> Self {
        set_text_content(&self.element, text);
        self
    }

    pub fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, name, value)?;
        Ok(self)
    }

    /// Destino de un enlace
    pub fn href(self, href: &str) -> Result<Self, JsValue> {
        self.attr("href", href)
    }

    /// Enlace interno: `href` + navegación sin recarga vía `navigator`
    pub fn link(self, to: &str, navigator: Rc<dyn Navigator>) -> Result<Self, JsValue> {
        let builder = self.href(to)?;
        on_link_click(&builder.element, to.to_string(), navigator)?;
        Ok(builder)
    }

    /// Clave de render de un item de lista (`data-key`)
    pub fn key(self, key: &str) -> Result<Self, JsValue> {
        self.attr("data-key", key)
    }

    pub fn child(self, child: Element) -> Result<Self, JsValue> {
        append_child(&self.element, &child)?;
        Ok(self)
    }

    /// `None` no agrega nada
    pub fn child_opt(self, child: Option<Element>) -> Result<Self, JsValue> {
        match child {
            Some(child) => self.child(child),
            None => Ok(self),
        }
    }

    /// Agrega los hijos en el orden del iterador
    pub fn children<I>(self, children: I) -> Result<Self, JsValue>
    where
        I: IntoIterator<Item = Element>,
    {
        for child in children {
            append_child(&self.element, &child)?;
        }
        Ok(self)
    }

    pub fn build(self) -> Element {
        self.element
    }
}

/// Elemento de solo texto (`<h1>`, `<p>`...)
pub fn text_element(tag: &str, text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new(tag)?.text(text).build())
}
