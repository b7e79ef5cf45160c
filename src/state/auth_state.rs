// ============================================================================
// AUTH STATE - Estado de autenticación observable
// ============================================================================

use crate::state::{ReactiveState, SessionReader, Subscription};

/// Estado de autenticación
#[derive(Clone)]
pub struct AuthState {
    is_authenticated: ReactiveState<bool>,
}

impl AuthState {
    /// Crear nuevo estado de autenticación (sin sesión)
    pub fn new() -> Self {
        Self {
            is_authenticated: ReactiveState::new(false),
        }
    }

    /// Establecer flag de autenticación (notifica si cambia)
    pub fn set_authenticated(&self, authenticated: bool) {
        self.is_authenticated.set(authenticated);
    }

    /// Obtener flag de autenticación
    pub fn get_authenticated(&self) -> bool {
        self.is_authenticated.get()
    }

    /// Logout - vuelve al estado inicial
    pub fn logout(&self) {
        self.set_authenticated(false);
    }

    /// Suscribirse a cambios del flag
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(bool) + 'static,
    {
        self.is_authenticated.subscribe(move |value| callback(*value))
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionReader for AuthState {
    fn is_authenticated(&self) -> bool {
        self.get_authenticated()
    }

    fn on_change(&self, callback: Box<dyn Fn(bool)>) -> Subscription {
        self.subscribe(callback)
    }
}
