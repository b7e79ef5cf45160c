// ============================================================================
// HOME VIEW - Navbar + cabecera + lista de CVs
// ============================================================================
// Sin lógica: el gate y la composición viven en HomeViewModel.
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{apply_page_meta, text_element, ElementBuilder};
use crate::router::Navigator;
use crate::viewmodels::{HomePage, HomeScreen, HomeViewModel};
use crate::views::{render_navbar, render_resume_card};

/// Renderizar la home. `None` si el gate está activo (redirect en curso).
pub fn render_home(vm: &HomeViewModel, navigator: Rc<dyn Navigator>) -> Result<Option<Element>, JsValue> {
    apply_page_meta(&vm.meta())?;

    match vm.render() {
        HomeScreen::Redirecting => Ok(None),
        HomeScreen::Page(page) => render_page(&page, navigator).map(Some),
    }
}

fn render_page(page: &HomePage, navigator: Rc<dyn Navigator>) -> Result<Element, JsValue> {
    let heading = ElementBuilder::new("div")?
        .class("page-heading py-16")
        .child(text_element("h1", page.heading)?)?
        .child(text_element("h2", page.subheading)?)?
        .build();

    // Sin CVs no se dibuja la sección de lista
    let list = match &page.resumes {
        Some(resumes) => {
            let cards = resumes
                .iter()
                .map(|resume| render_resume_card(resume, navigator.clone()))
                .collect::<Result<Vec<_>, _>>()?;
            Some(ElementBuilder::new("div")?
                .class("resumes-section")
                .children(cards)?
                .build())
        }
        None => None,
    };

    let section = ElementBuilder::new("section")?
        .class("main-section")
        .child(heading)?
        .child_opt(list)?
        .build();

    Ok(ElementBuilder::new("main")?
        .class("bg-[url('/images/bg-main.svg')] bg-cover")
        .child(render_navbar(navigator)?)?
        .child(section)?
        .build())
}
