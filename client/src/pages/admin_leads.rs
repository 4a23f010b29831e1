//! Lead list: the protected landing page after login.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard has already checked that a token exists. Whether it is
//! still valid is only learned from the leads request; a rejection sends the
//! visitor back to the login page with the token cleared.

#[cfg(test)]
#[path = "admin_leads_test.rs"]
mod admin_leads_test;

use admin_session::Lead;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::admin_nav::AdminNav;

pub(crate) fn lead_href(id: &str) -> String {
    format!("/admin/leads/{id}")
}

/// Placeholder for fields the backend left empty.
pub(crate) fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => "—".to_owned(),
    }
}

#[component]
pub fn LeadsPage() -> impl IntoView {
    let leads = RwSignal::new(Vec::<Lead>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    {
        let navigate = leptos_router::hooks::use_navigate();
        leptos::task::spawn_local(async move {
            match crate::net::api::admin_client().leads().await {
                Ok(items) => leads.set(items),
                Err(e) => crate::util::auth::handle_admin_error(&e, error, &navigate),
            }
            loading.set(false);
        });
    }

    view! {
        <div class="admin-page">
            <AdminNav/>
            <h1>"Leads"</h1>
            <Show when=move || error.get().is_some()>
                <p class="admin-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading leads..."</p> }>
                <Show
                    when=move || !leads.get().is_empty()
                    fallback=move || {
                        view! {
                            <Show when=move || error.get().is_none()>
                                <p>"No leads yet."</p>
                            </Show>
                        }
                    }
                >
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Service"</th>
                                <th>"Received"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                leads
                                    .get()
                                    .into_iter()
                                    .map(|lead| {
                                        view! {
                                            <tr>
                                                <td>
                                                    <A href=lead_href(&lead.id)>{or_dash(Some(&lead.name))}</A>
                                                </td>
                                                <td>{or_dash(Some(&lead.email))}</td>
                                                <td>{or_dash(lead.service.as_deref())}</td>
                                                <td>{or_dash(lead.created_at.as_deref())}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>
        </div>
    }
}
