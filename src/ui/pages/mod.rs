//! Application pages
//!
//! - Auth page (signup / login / signed-in home)
//! - Not found page

mod auth;
mod home;
mod not_found;

pub use auth::AuthPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
