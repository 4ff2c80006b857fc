//! Authentication screens

mod login_screen;
mod signup_form;

pub use login_screen::LoginScreen;
pub use signup_form::SignupForm;
