//! Legal notices.

use leptos::prelude::*;

#[component]
pub fn LegalPage() -> impl IntoView {
    view! {
        <section class="legal">
            <h1>"Legal notices"</h1>
            <h2>"Publisher"</h2>
            <p>"Atelier Peinture, painting and decoration contractor."</p>
            <h2>"Personal data"</h2>
            <p>
                "Information sent through the contact page is used only to answer your request. "
                "You may ask for it to be corrected or deleted at any time."
            </p>
            <h2>"Local storage"</h2>
            <p>"The site stores no tracking data. The admin area keeps a session token in your browser while signed in."</p>
        </section>
    }
}
