// ============================================================================
// CATALOG STATE - Lista de CVs que se muestra en la home
// ============================================================================

use crate::models::ResumeSummary;
use crate::state::{CatalogReader, ReactiveState, Subscription};

/// Estado del catálogo
#[derive(Clone)]
pub struct CatalogState {
    resumes: ReactiveState<Vec<ResumeSummary>>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            resumes: ReactiveState::new(Vec::new()),
        }
    }

    /// Reemplazar el catálogo completo (notifica si cambia)
    pub fn replace(&self, resumes: Vec<ResumeSummary>) {
        log::info!("📚 [CATALOG] {} CVs en catálogo", resumes.len());
        self.resumes.set(resumes);
    }

    pub fn count(&self) -> usize {
        self.resumes.get().len()
    }

    /// Suscribirse a cambios del catálogo
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        self.resumes.subscribe(move |_| callback())
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogReader for CatalogState {
    fn list_summaries(&self) -> Vec<ResumeSummary> {
        self.resumes.get()
    }
}
