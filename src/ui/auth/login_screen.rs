//! Login screen placeholder
//!
//! Shown when the screen selector is set to login. Signing in is served by a
//! separate flow; this screen only offers the way back to signup.

use leptos::prelude::*;

use crate::core::AuthScreen;
use crate::ui::session::use_session_context;

#[component]
pub fn LoginScreen() -> impl IntoView {
    let session = use_session_context();

    view! {
        <div class="min-h-screen flex items-center justify-center p-4">
            <div class="w-full max-w-md mx-auto bg-theme-primary rounded-xl shadow-lg p-6 border border-theme space-y-5 text-center">
                <h2 class="text-2xl font-bold text-theme-primary">"Login"</h2>
                <p class="text-sm text-theme-secondary">
                    "Sign in with the account you created."
                </p>
                <p class="text-sm text-theme-secondary">
                    "Don't have an account? "
                    <button
                        type="button"
                        class="text-blue-400 hover:underline font-medium"
                        on:click=move |_| session.select_screen(AuthScreen::Signup)
                    >
                        "Sign up"
                    </button>
                </p>
            </div>
        </div>
    }
}
