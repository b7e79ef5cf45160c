//! Tests de render DOM. Ejecutar con `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

use ai_resume_pwa::models::{Feedback, ResumeSummary};
use ai_resume_pwa::router::Navigator;
use ai_resume_pwa::services::session_service;
use ai_resume_pwa::state::{AuthState, CatalogState};
use ai_resume_pwa::utils::constants::AUTH_STORAGE_KEY;
use ai_resume_pwa::viewmodels::{AuthViewModel, HomeViewModel};
use ai_resume_pwa::views::{render_auth, render_home, render_navbar, render_resume_card};

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Default)]
struct RecordingNavigator {
    visits: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, to: &str) {
        self.visits.borrow_mut().push(to.to_string());
    }
}

fn resume(id: &str, score: u32) -> ResumeSummary {
    ResumeSummary {
        id: id.to_string(),
        company_name: Some(format!("Company {}", id)),
        job_title: Some("Engineer".to_string()),
        image_path: format!("/images/{}.png", id),
        resume_path: format!("/resumes/{}.pdf", id),
        feedback: Feedback { overall_score: score },
    }
}

fn home(authenticated: bool, resumes: Vec<ResumeSummary>) -> (HomeViewModel, Rc<RecordingNavigator>) {
    let auth = AuthState::new();
    auth.set_authenticated(authenticated);
    let catalog = CatalogState::new();
    catalog.replace(resumes);
    let navigator = Rc::new(RecordingNavigator::default());
    let vm = HomeViewModel::new(Rc::new(auth), Rc::new(catalog), navigator.clone());
    (vm, navigator)
}

fn card_keys(root: &Element) -> Vec<String> {
    let cards = root.query_selector_all(".resume-card").unwrap();
    (0..cards.length())
        .filter_map(|i| cards.item(i))
        .filter_map(|node| {
            node.dyn_into::<Element>().ok()?.get_attribute("data-key")
        })
        .collect()
}

#[wasm_bindgen_test]
fn navbar_has_home_and_upload_links() {
    let navigator = Rc::new(RecordingNavigator::default());
    let nav = render_navbar(navigator).unwrap();

    assert_eq!(nav.tag_name(), "NAV");
    let links = nav.query_selector_all("a").unwrap();
    assert_eq!(links.length(), 2);

    let home = nav.query_selector("a[href=\"/\"]").unwrap().unwrap();
    assert_eq!(home.text_content().unwrap(), "Ai resume");
    let upload = nav.query_selector("a[href=\"/upload\"]").unwrap().unwrap();
    assert_eq!(upload.text_content().unwrap(), "Upload Resume");
}

#[wasm_bindgen_test]
fn resume_card_is_keyed_and_shows_score() {
    let navigator = Rc::new(RecordingNavigator::default());
    let card = render_resume_card(&resume("r1", 82), navigator).unwrap();

    assert_eq!(card.get_attribute("data-key").as_deref(), Some("r1"));
    assert_eq!(card.get_attribute("href").as_deref(), Some("/resume/r1"));
    let badge = card.query_selector(".score-badge").unwrap().unwrap();
    assert_eq!(badge.text_content().unwrap(), "82/100");
    assert!(badge.class_list().contains("score-strong"));
}

#[wasm_bindgen_test]
fn home_with_single_resume() {
    let (vm, navigator) = home(false, vec![resume("r1", 60)]);
    let main = render_home(&vm, navigator.clone()).unwrap().unwrap();

    assert!(main.query_selector("nav.navbar").unwrap().is_some());
    let h1 = main.query_selector(".page-heading h1").unwrap().unwrap();
    assert_eq!(h1.text_content().unwrap(), "Track Your Applications and Resume Ratings");
    assert_eq!(card_keys(&main), vec!["r1"]);
    assert!(navigator.visits.borrow().is_empty());

    let doc = web_sys::window().unwrap().document().unwrap();
    assert_eq!(doc.title(), "AI-Resume");
}

#[wasm_bindgen_test]
fn home_with_empty_catalog_omits_list_container() {
    let (vm, navigator) = home(false, Vec::new());
    let main = render_home(&vm, navigator).unwrap().unwrap();

    assert!(main.query_selector("nav.navbar").unwrap().is_some());
    assert!(main.query_selector(".page-heading").unwrap().is_some());
    assert!(main.query_selector(".resumes-section").unwrap().is_none());
}

#[wasm_bindgen_test]
fn home_cards_follow_catalog_order() {
    let (vm, navigator) = home(false, vec![resume("A", 10), resume("B", 55), resume("C", 90)]);
    let main = render_home(&vm, navigator).unwrap().unwrap();

    assert_eq!(card_keys(&main), vec!["A", "B", "C"]);
}

#[wasm_bindgen_test]
fn authenticated_home_redirects_without_body() {
    let (vm, navigator) = home(true, vec![resume("r1", 60)]);
    vm.mount();

    assert!(render_home(&vm, navigator.clone()).unwrap().is_none());
    assert!(render_home(&vm, navigator.clone()).unwrap().is_none());
    assert_eq!(*navigator.visits.borrow(), vec!["/auth?next=/"]);
}

// ============================================================================
// SESSION - localStorage
// ============================================================================

fn stored_flag() -> Option<bool> {
    LocalStorage::get::<bool>(AUTH_STORAGE_KEY).ok()
}

#[wasm_bindgen_test]
fn session_restores_stored_login() {
    LocalStorage::delete(AUTH_STORAGE_KEY);
    LocalStorage::set(AUTH_STORAGE_KEY, true).unwrap();

    let auth = AuthState::new();
    let _persist = session_service::restore_and_persist(&auth);

    assert!(auth.get_authenticated());
    LocalStorage::delete(AUTH_STORAGE_KEY);
}

#[wasm_bindgen_test]
fn session_logout_deletes_key() {
    LocalStorage::set(AUTH_STORAGE_KEY, true).unwrap();

    session_service::save_authenticated(false).unwrap();

    assert!(LocalStorage::get::<bool>(AUTH_STORAGE_KEY).is_err());
    assert_eq!(session_service::load_authenticated(), None);
}

#[wasm_bindgen_test]
fn session_persists_later_changes() {
    LocalStorage::delete(AUTH_STORAGE_KEY);

    let auth = AuthState::new();
    let persist = session_service::restore_and_persist(&auth);
    assert!(!auth.get_authenticated());
    assert_eq!(stored_flag(), None);

    auth.set_authenticated(true);
    assert_eq!(stored_flag(), Some(true));

    auth.logout();
    assert_eq!(stored_flag(), None);

    // Sin suscripción ya no se escribe nada
    drop(persist);
    auth.set_authenticated(true);
    assert_eq!(stored_flag(), None);
}

// ============================================================================
// AUTH VIEW
// ============================================================================

fn auth_button(main: &Element) -> HtmlElement {
    main.query_selector("button.auth-button")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

#[wasm_bindgen_test]
fn auth_view_sets_meta_and_login_label() {
    let navigator = Rc::new(RecordingNavigator::default());
    let vm = Rc::new(AuthViewModel::new(AuthState::new(), navigator));
    let main = render_auth(vm, "/auth?next=/").unwrap();

    assert_eq!(auth_button(&main).text_content().unwrap(), "Log In");

    let doc = web_sys::window().unwrap().document().unwrap();
    assert_eq!(doc.title(), "AI-Resume | Auth");
    let description = doc.query_selector("meta[name=\"description\"]").unwrap().unwrap();
    assert_eq!(
        description.get_attribute("content").as_deref(),
        Some("Log in to track your resumes and AI feedback")
    );
}

#[wasm_bindgen_test]
fn auth_button_click_logs_in_and_returns_to_next() {
    let auth = AuthState::new();
    let navigator = Rc::new(RecordingNavigator::default());
    let vm = Rc::new(AuthViewModel::new(auth.clone(), navigator.clone()));

    let main = render_auth(vm.clone(), "/auth?next=%2Fresume%2F7%3Ftab%3Dscore%26x%3D1").unwrap();
    auth_button(&main).click();

    assert!(auth.get_authenticated());
    assert_eq!(*navigator.visits.borrow(), vec!["/resume/7?tab=score&x=1"]);

    let rerendered = render_auth(vm, "/auth?next=/").unwrap();
    let button = auth_button(&rerendered);
    assert_eq!(button.text_content().unwrap(), "Log Out");

    button.click();
    assert!(!auth.get_authenticated());
    assert_eq!(navigator.visits.borrow().len(), 1);
}
