// ============================================================================
// ROUTER - Tabla de rutas estática + navegación client-side
// ============================================================================

pub mod routes;
pub mod navigator;

pub use routes::*;
pub use navigator::*;
