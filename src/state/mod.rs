// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod traits;
pub mod auth_state;
pub mod catalog_state;
pub mod app_state;

pub use reactivity::*;
pub use traits::*;
pub use auth_state::*;
pub use catalog_state::*;
pub use app_state::*;
