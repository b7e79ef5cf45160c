// ============================================================================
// AUTH VIEWMODEL - Login / logout y retorno a `next`
// ============================================================================

use std::rc::Rc;
use crate::router::{query_param, Navigator};
use crate::state::AuthState;

/// ViewModel de la vista /auth
pub struct AuthViewModel {
    auth: AuthState,
    navigator: Rc<dyn Navigator>,
}

impl AuthViewModel {
    pub fn new(auth: AuthState, navigator: Rc<dyn Navigator>) -> Self {
        Self { auth, navigator }
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.get_authenticated()
    }

    /// Texto del botón principal
    pub fn button_label(&self) -> &'static str {
        if self.is_authenticated() {
            "Log Out"
        } else {
            "Log In"
        }
    }

    /// Login y vuelta al destino `next` de la URL actual
    pub fn log_in(&self, current_url: &str) {
        let next = next_path(current_url);
        log::info!("🔐 [AUTH] Login, volviendo a {}", next);
        self.auth.set_authenticated(true);
        self.navigator.navigate(&next);
    }

    pub fn log_out(&self) {
        log::info!("👋 [AUTH] Logout");
        self.auth.logout();
    }

    /// Acción del botón según el estado actual
    pub fn toggle(&self, current_url: &str) {
        if self.is_authenticated() {
            self.log_out();
        } else {
            self.log_in(current_url);
        }
    }
}

/// Destino `next` de la URL. Solo paths del mismo origen (`/...` pero no `//...`);
/// cualquier otro valor cae a `/`.
pub fn next_path(url: &str) -> String {
    match query_param(url, "next") {
        Some(next) if next.starts_with('/') && !next.starts_with("//") => next,
        Some(other) => {
            log::warn!("⚠️ [AUTH] next no permitido, se ignora: {}", other);
            "/".to_string()
        }
        None => "/".to_string(),
    }
}
