//! Admin login page: password form backed by the session login flow.
//!
//! The submit button stays disabled while a request is in flight, and the
//! flow itself refuses a second submission, so one form never has two
//! concurrent login requests.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

pub(crate) const PASSWORD_REQUIRED: &str = "Enter the admin password.";

/// Mandatory-field check; no other client-side validation.
pub(crate) fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.is_empty() { Err(PASSWORD_REQUIRED) } else { Ok(()) }
}

/// Lockout warning for the attempts-remaining count, if the backend sent one.
pub(crate) fn attempts_warning(remaining: Option<u32>) -> Option<String> {
    match remaining? {
        0 => Some("No attempts left. Login is temporarily locked.".to_owned()),
        1 => Some("1 attempt left before login is locked.".to_owned()),
        n => Some(format!("{n} attempts left before login is locked.")),
    }
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let attempts = RwSignal::new(None::<u32>);
    let busy = RwSignal::new(false);
    let flow = crate::net::api::login_flow();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() || flow.is_busy() {
            return;
        }
        let value = password.get_untracked();
        if let Err(message) = validate_password(&value) {
            error.set(Some(message.to_owned()));
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "csr")]
        {
            let flow = flow.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match flow.submit(&value).await {
                    Ok(outcome) => {
                        attempts.set(outcome.attempts_remaining());
                        error.set(outcome.error_message().map(str::to_owned));
                        if let Some(target) = outcome.redirect() {
                            password.set(String::new());
                            navigate(target, leptos_router::NavigateOptions::default());
                        }
                    }
                    Err(admin_session::SubmitError::EmptyPassword) => error.set(Some(PASSWORD_REQUIRED.to_owned())),
                    Err(admin_session::SubmitError::InFlight) => {}
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&navigate, value);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Administration"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="password"
                        required
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || attempts.get().is_some()>
                    <p class="login-message login-message--warning">
                        {move || attempts_warning(attempts.get()).unwrap_or_default()}
                    </p>
                </Show>
            </div>
        </div>
    }
}
