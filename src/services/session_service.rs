// ============================================================================
// SESSION SERVICE - Persistencia del flag de autenticación (localStorage)
// ============================================================================

use gloo_storage::{LocalStorage, Storage};
use crate::state::{AuthState, Subscription};
use crate::utils::constants::AUTH_STORAGE_KEY;

/// Leer flag guardado. `None` si no hay nada o no se puede leer.
pub fn load_authenticated() -> Option<bool> {
    match LocalStorage::get::<bool>(AUTH_STORAGE_KEY) {
        Ok(value) => Some(value),
        Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => None,
        Err(e) => {
            log::warn!("⚠️ [SESSION] No se pudo leer {}: {}", AUTH_STORAGE_KEY, e);
            None
        }
    }
}

/// Guardar flag. Si es false se borra la clave.
pub fn save_authenticated(authenticated: bool) -> Result<(), String> {
    if authenticated {
        LocalStorage::set(AUTH_STORAGE_KEY, true)
            .map_err(|e| format!("Error guardando en localStorage: {}", e))
    } else {
        LocalStorage::delete(AUTH_STORAGE_KEY);
        Ok(())
    }
}

/// Restaurar el flag en `auth` y persistir cada cambio posterior.
/// La persistencia dura lo que viva el `Subscription` devuelto.
pub fn restore_and_persist(auth: &AuthState) -> Subscription {
    if let Some(authenticated) = load_authenticated() {
        log::info!("💾 [SESSION] Flag restaurado desde storage: {}", authenticated);
        auth.set_authenticated(authenticated);
    }

    auth.subscribe(|authenticated| {
        // Fallo de storage no invalida el estado en memoria
        if let Err(e) = save_authenticated(authenticated) {
            log::warn!("⚠️ [SESSION] {}", e);
        }
    })
}
