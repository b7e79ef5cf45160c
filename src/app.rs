// ============================================================================
// APP - Aplicación principal: estado, router y montaje de vistas
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, clear_children, get_element_by_id};
use crate::router::{current_location, BrowserNavigator, Navigator, Route};
use crate::services::{catalog_service, session_service};
use crate::state::{AppState, Subscription};
use crate::utils::constants::{APP_ROOT_ID, RESUME_CATALOG_URL};
use crate::viewmodels::{AuthViewModel, HomeViewModel};
use crate::views::{render_auth, render_home, render_not_found};

/// Aplicación principal
pub struct App {
    root: Element,
    navigator: Rc<dyn Navigator>,
    home: HomeViewModel,
    auth: Rc<AuthViewModel>,
    /// Ruta montada en el último render
    current: Option<Route>,
    _subscriptions: Vec<Subscription>,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(APP_ROOT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();
        let navigator: Rc<dyn Navigator> = Rc::new(BrowserNavigator);

        let mut subscriptions = vec![session_service::restore_and_persist(&state.auth)];

        // Suscribirse a cambios de estado para re-renderizar (batcheado)
        subscriptions.push(state.auth.subscribe(|_| crate::schedule_rerender()));
        subscriptions.push(state.catalog.subscribe(crate::schedule_rerender));

        catalog_service::load_into(&state.catalog, RESUME_CATALOG_URL);

        let home = HomeViewModel::new(
            Rc::new(state.auth.clone()),
            Rc::new(state.catalog.clone()),
            navigator.clone(),
        );
        let auth = Rc::new(AuthViewModel::new(state.auth.clone(), navigator.clone()));

        log::info!(
            "✅ [APP] Inicializada (authenticated={}, {} CVs)",
            state.auth.get_authenticated(),
            state.catalog.count()
        );

        Ok(Self {
            root,
            navigator,
            home,
            auth,
            current: None,
            _subscriptions: subscriptions,
        })
    }

    /// Renderizar la ruta actual
    pub fn render(&mut self) -> Result<(), JsValue> {
        let url = current_location();
        let route = Route::resolve(&url);
        log::info!("🎬 [APP] render {} -> {:?}", url, route);

        self.update_mounts(route);

        clear_children(&self.root);
        let view = match route {
            Some(Route::Home) => render_home(&self.home, self.navigator.clone())?,
            Some(Route::Auth) => Some(render_auth(self.auth.clone(), &url)?),
            None => Some(render_not_found(self.navigator.clone())?),
        };
        if let Some(view) = view {
            append_child(&self.root, &view)?;
        }
        Ok(())
    }

    /// Montar/desmontar la home según la ruta. Re-renders sobre la misma
    /// ruta no vuelven a montar.
    fn update_mounts(&mut self, route: Option<Route>) {
        if route == self.current {
            return;
        }
        if route == Some(Route::Home) {
            self.home.mount();
        } else {
            self.home.unmount();
        }
        self.current = route;
    }
}
