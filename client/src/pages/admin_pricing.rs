//! Price list maintained by the backend.

#[cfg(test)]
#[path = "admin_pricing_test.rs"]
mod admin_pricing_test;

use admin_session::PricingItem;
use leptos::prelude::*;

use crate::components::admin_nav::AdminNav;
use crate::pages::admin_leads::or_dash;

/// `25.5` -> `"25.50 €"`; unpriced items read "On quote".
pub(crate) fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p.is_finite() => format!("{p:.2} €"),
        _ => "On quote".to_owned(),
    }
}

#[component]
pub fn PricingPage() -> impl IntoView {
    let items = RwSignal::new(Vec::<PricingItem>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    {
        let navigate = leptos_router::hooks::use_navigate();
        leptos::task::spawn_local(async move {
            match crate::net::api::admin_client().pricing().await {
                Ok(list) => items.set(list),
                Err(e) => crate::util::auth::handle_admin_error(&e, error, &navigate),
            }
            loading.set(false);
        });
    }

    view! {
        <div class="admin-page">
            <AdminNav/>
            <h1>"Pricing"</h1>
            <Show when=move || error.get().is_some()>
                <p class="admin-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading prices..."</p> }>
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>"Service"</th>
                            <th>"Description"</th>
                            <th>"Unit"</th>
                            <th>"Price"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            items
                                .get()
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <tr>
                                            <td>{or_dash(Some(&item.service))}</td>
                                            <td>{or_dash(item.description.as_deref())}</td>
                                            <td>{or_dash(item.unit.as_deref())}</td>
                                            <td>{format_price(item.price)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
