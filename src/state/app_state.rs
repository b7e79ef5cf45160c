// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use crate::state::{AuthState, CatalogState};

/// Estado global de la aplicación
#[derive(Clone, Default)]
pub struct AppState {
    pub auth: AuthState,
    pub catalog: CatalogState,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new() -> Self {
        Self {
            auth: AuthState::new(),
            catalog: CatalogState::new(),
        }
    }
}
