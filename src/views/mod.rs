pub mod navbar;
pub mod resume_card;
pub mod home;
pub mod auth;
pub mod not_found;

pub use navbar::render_navbar;
pub use resume_card::render_resume_card;
pub use home::render_home;
pub use auth::render_auth;
pub use not_found::render_not_found;
