//! Account sign-up form. New accounts are always gym owners.

#[cfg(test)]
#[path = "register_form_test.rs"]
mod register_form_test;

use gyms::SignupRequest;
use leptos::prelude::*;

use crate::app::ConfigSignal;

pub const REGISTERED_MESSAGE: &str = "Your account was created successfully. Log in to get started.";
pub const MISSING_FIELDS: &str = "Name, email and password are required";

/// Delay before the modal closes after a successful sign-up.
pub const CLOSE_AFTER_MS: u32 = 3_000;

/// Build the sign-up body.
///
/// # Errors
///
/// Returns [`MISSING_FIELDS`] when any field is blank.
pub fn validate_register_input(name: &str, email: &str, password: &str) -> Result<SignupRequest, &'static str> {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(SignupRequest::gym_owner(name, email, password))
}

#[must_use]
pub fn register_failed_message(detail: &str) -> String {
    format!("Registration failed: {detail}")
}

#[component]
pub fn RegisterForm(on_close: Callback<()>) -> impl IntoView {
    let config = expect_context::<ConfigSignal>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || success.get() {
            return;
        }
        let request = match validate_register_input(&name.get(), &email.get(), &password.get()) {
            Ok(request) => request,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        let Some(cfg) = config.get_untracked() else {
            error.set(Some(register_failed_message("configuration not loaded")));
            return;
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::backend(&cfg, None);
            match api.signup(&request).await {
                Ok(()) => {
                    success.set(true);
                    gloo_timers::future::TimeoutFuture::new(CLOSE_AFTER_MS).await;
                    on_close.run(());
                }
                Err(e) => {
                    log::warn!("signup failed: {e}");
                    error.set(Some(register_failed_message(&e.to_string())));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, cfg, on_close);
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || success.get()>
                <p class="form-success">{REGISTERED_MESSAGE}</p>
            </Show>
            <label class="dialog__label">
                "Name"
                <input
                    class="dialog__input"
                    type="text"
                    autocomplete="name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="dialog__label">
                "Email"
                <input
                    class="dialog__input"
                    type="email"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="dialog__label">
                "Password"
                <input
                    class="dialog__input"
                    type="password"
                    autocomplete="new-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get() || success.get()>
                "Register"
            </button>
        </form>
    }
}
