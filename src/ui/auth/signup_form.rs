//! Signup form component
//!
//! Collects name, username, email, and password and submits them to the
//! signup endpoint. While mounted it suspends page scrolling.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::{
    AuthScreen, CancelToken, FormField, FormInputs, PasswordVisibility, SignupController,
};
use crate::ui::api::FetchSignupApi;
use crate::ui::common::{PasswordField, TextField};
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;
use crate::ui::scroll::use_scroll_lock;
use crate::ui::session::use_session_context;
use crate::ui::storage::BrowserStorage;

/// Decorative background behind the form, served from `public/`
const BACKGROUND_IMAGE: &str = "/assets/share.svg";

/// Signup form component
#[component]
pub fn SignupForm() -> impl IntoView {
    let session = use_session_context();
    let notifications = use_notifications();

    // Form state
    let inputs = RwSignal::new(FormInputs::default());
    let visibility = RwSignal::new(PasswordVisibility::default());
    let submitting = RwSignal::new(false);

    let controller = Arc::new(SignupController::new(FetchSignupApi, BrowserStorage));

    // Responses that arrive after unmount are dropped
    let lifetime = CancelToken::new();
    {
        let lifetime = lifetime.clone();
        on_cleanup(move || lifetime.cancel());
    }

    use_scroll_lock();

    let field_value =
        move |field: FormField| Signal::derive(move || inputs.with(|form| form.get(field).to_string()));
    let field_input = move |field: FormField| {
        Callback::new(move |value: String| inputs.update(|form| form.set(field, value)))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if controller.is_pending() {
            return;
        }

        let controller = Arc::clone(&controller);
        let lifetime = lifetime.clone();
        let draft = inputs.get_untracked();
        submitting.set(true);

        spawn_local(async move {
            controller
                .submit(&draft, &lifetime, &session, &notifications)
                .await;

            if !lifetime.is_cancelled() {
                submitting.set(controller.is_pending());
            }
        });
    };

    view! {
        <div class="relative min-h-screen flex items-center justify-center overflow-hidden">
            // Background
            <div
                class="absolute inset-0 -z-10 bg-cover bg-center bg-no-repeat opacity-50"
                style=format!("background-image: url('{}');", BACKGROUND_IMAGE)
            ></div>

            <div class="w-full max-w-lg mx-auto py-12 px-6 space-y-8 rounded-xl bg-white/20 animate-fade-in-up">
                // Header
                <h1 class="text-4xl font-bold text-center text-theme-primary">"Sign up"</h1>

                <form
                    on:submit=on_submit
                    class="space-y-4 p-8 rounded-lg shadow-lg bg-white/80 dark:bg-black/80"
                >
                    <div class="flex flex-col sm:flex-row gap-4">
                        <TextField
                            field=FormField::Name
                            autocomplete="name"
                            value=field_value(FormField::Name)
                            on_input=field_input(FormField::Name)
                        />
                        <TextField
                            field=FormField::Username
                            autocomplete="username"
                            value=field_value(FormField::Username)
                            on_input=field_input(FormField::Username)
                        />
                    </div>

                    <TextField
                        field=FormField::Email
                        input_type="email"
                        autocomplete="email"
                        value=field_value(FormField::Email)
                        on_input=field_input(FormField::Email)
                    />

                    <PasswordField
                        value=field_value(FormField::Password)
                        on_input=field_input(FormField::Password)
                        visibility=visibility
                    />

                    // Submit button
                    <div class="pt-2">
                        <button
                            type="submit"
                            class="w-full py-3 px-4 bg-gray-600 hover:bg-gray-700 dark:bg-gray-700 dark:hover:bg-gray-800
                                   text-white text-lg font-medium rounded-lg
                                   disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                            disabled=move || submitting.get()
                        >
                            {move || {
                                if submitting.get() {
                                    view! {
                                        <span class="flex items-center justify-center">
                                            <Icon icon=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4" />
                                            "Submitting"
                                        </span>
                                    }.into_any()
                                } else {
                                    view! { <span class="block">"Sign up"</span> }.into_any()
                                }
                            }}
                        </button>
                    </div>

                    // Login link
                    <p class="pt-6 text-center text-theme-secondary">
                        "Already a user? "
                        <button
                            type="button"
                            class="text-blue-400 hover:underline font-medium"
                            on:click=move |_| session.select_screen(AuthScreen::Login)
                        >
                            "Login"
                        </button>
                    </p>
                </form>
            </div>
        </div>
    }
}
