//! Single lead detail.

use admin_session::Lead;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::admin_nav::AdminNav;
use crate::pages::admin_leads::or_dash;

#[component]
pub fn LeadDetailPage() -> impl IntoView {
    let params = use_params_map();
    let lead = RwSignal::new(None::<Lead>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    {
        let navigate = leptos_router::hooks::use_navigate();
        Effect::new(move || {
            let id = params.read().get("id").unwrap_or_default();
            let navigate = navigate.clone();
            loading.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::admin_client().lead(&id).await {
                    Ok(found) => lead.set(Some(found)),
                    Err(e) => crate::util::auth::handle_admin_error(&e, error, &navigate),
                }
                loading.set(false);
            });
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = params;

    view! {
        <div class="admin-page">
            <AdminNav/>
            <A href="/admin/leads">"← All leads"</A>
            <Show when=move || error.get().is_some()>
                <p class="admin-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading lead..."</p> }>
                {move || {
                    lead.get()
                        .map(|lead| {
                            view! {
                                <article class="lead-detail">
                                    <h1>{or_dash(Some(&lead.name))}</h1>
                                    <dl>
                                        <dt>"Email"</dt>
                                        <dd>{or_dash(Some(&lead.email))}</dd>
                                        <dt>"Phone"</dt>
                                        <dd>{or_dash(lead.phone.as_deref())}</dd>
                                        <dt>"Service"</dt>
                                        <dd>{or_dash(lead.service.as_deref())}</dd>
                                        <dt>"Status"</dt>
                                        <dd>{or_dash(lead.status.as_deref())}</dd>
                                        <dt>"Received"</dt>
                                        <dd>{or_dash(lead.created_at.as_deref())}</dd>
                                    </dl>
                                    <p class="lead-detail__message">{or_dash(lead.message.as_deref())}</p>
                                </article>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
