//! Signed-in landing view

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;
use crate::ui::session::use_session_context;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session_context();
    let notifications = use_notifications();

    let display_name = move || {
        session.session.with(|s| {
            s.as_ref()
                .and_then(|s| s.name().or(s.username()))
                .unwrap_or_default()
                .to_string()
        })
    };
    let username = move || {
        session.session.with(|s| {
            s.as_ref()
                .and_then(|s| s.username())
                .map(|u| format!("@{}", u))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="min-h-screen flex items-center justify-center p-4">
            <div class="w-full max-w-md mx-auto bg-theme-primary rounded-xl shadow-lg p-6 border border-theme text-center space-y-4">
                <div class="w-16 h-16 mx-auto bg-theme-secondary rounded-full flex items-center justify-center">
                    <Icon icon=icons::USER class="w-8 h-8 text-theme-tertiary" />
                </div>
                <h2 class="text-2xl font-bold text-theme-primary">"Welcome, " {display_name}</h2>
                <p class="text-sm text-theme-secondary">{username}</p>
                <button
                    type="button"
                    class="px-6 py-2 border border-theme text-theme-primary hover:bg-theme-secondary font-medium rounded-lg transition-colors"
                    on:click=move |_| session.sign_out(&notifications)
                >
                    "Sign out"
                </button>
            </div>
        </div>
    }
}
