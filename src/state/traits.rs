use crate::models::ResumeSummary;
use crate::state::Subscription;

/// Lectura del estado de autenticación (observable)
pub trait SessionReader {
    /// Flag de autenticación actual
    fn is_authenticated(&self) -> bool;

    /// Registrar callback para cambios del flag. Se da de baja al soltar el guard.
    fn on_change(&self, callback: Box<dyn Fn(bool)>) -> Subscription;
}

/// Lectura del catálogo de CVs
pub trait CatalogReader {
    /// Resúmenes en orden de inserción del catálogo
    fn list_summaries(&self) -> Vec<ResumeSummary>;
}
