pub mod home_viewmodel;
pub mod auth_viewmodel;

pub use home_viewmodel::{HomeViewModel, HomeScreen, HomePage};
pub use auth_viewmodel::AuthViewModel;
