//! Auth page
//!
//! Picks the screen from session state: the home view when signed in,
//! otherwise the signup form or the login screen.

use leptos::prelude::*;

use crate::core::AuthScreen;
use crate::ui::auth::{LoginScreen, SignupForm};
use crate::ui::pages::HomePage;
use crate::ui::session::use_session_context;

#[component]
pub fn AuthPage() -> impl IntoView {
    let session = use_session_context();

    move || {
        if session.is_signed_in() {
            view! { <HomePage/> }.into_any()
        } else {
            match session.screen.get() {
                AuthScreen::Signup => view! { <SignupForm/> }.into_any(),
                AuthScreen::Login => view! { <LoginScreen/> }.into_any(),
            }
        }
    }
}
