//! Admin area navigation bar with logout.
//!
//! Logout clears the stored token and returns to the login page. It is the
//! only way out of the `Authenticated` state besides a forced logout from a
//! rejected admin call.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use admin_session::LOGIN_ROUTE;

#[component]
pub fn AdminNav() -> impl IntoView {
    let navigate = use_navigate();

    let on_logout = move |_| {
        let target = crate::net::api::login_flow().logout().unwrap_or_else(|e| {
            leptos::logging::warn!("logout could not clear the session: {e}");
            LOGIN_ROUTE
        });
        navigate(target, NavigateOptions::default());
    };

    view! {
        <nav class="admin-nav">
            <A href="/admin/leads">"Leads"</A>
            <A href="/admin/pricing">"Pricing"</A>
            <span class="admin-nav__spacer"></span>
            <button class="btn admin-nav__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </nav>
    }
}
