use crate::core::{FormField, PasswordVisibility};
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Labeled text input bound to one signup form field
#[component]
pub fn TextField(
    /// Which form field this input edits
    field: FormField,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether the browser should require a value
    #[prop(default = true)]
    required: bool,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5 flex-1">
            <label for=field.as_str() class="label">
                {field.label()}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <input
                type=input_type
                id=field.as_str()
                name=field.as_str()
                autocomplete=autocomplete
                class="input-base"
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Password input with a show/hide toggle
#[component]
pub fn PasswordField(
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Masked or plain rendering, toggled by the eye button
    visibility: RwSignal<PasswordVisibility>,
    /// Browser autocomplete hint
    #[prop(default = "new-password")]
    autocomplete: &'static str,
) -> impl IntoView {
    let field = FormField::Password;

    view! {
        <div class="space-y-1.5">
            <label for=field.as_str() class="label">
                {field.label()}
                <span class="text-red-500 ml-0.5">"*"</span>
            </label>
            <div class="relative">
                <input
                    type=move || visibility.get().input_type()
                    id=field.as_str()
                    name=field.as_str()
                    autocomplete=autocomplete
                    class="input-base pr-10"
                    required=true
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="absolute inset-y-0 right-0 pr-3 flex items-center text-theme-tertiary hover:text-theme-secondary"
                    aria-label=move || if visibility.get().is_plain() { "Hide password" } else { "Show password" }
                    on:click=move |_| visibility.update(PasswordVisibility::toggle)
                >
                    {move || {
                        if visibility.get().is_plain() {
                            view! { <Icon icon=icons::EYE class="h-5 w-5" /> }.into_any()
                        } else {
                            view! { <Icon icon=icons::EYE_CLOSED class="h-5 w-5" /> }.into_any()
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
