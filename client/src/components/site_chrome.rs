//! Public header and footer.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <span class="site-header__brand">
                <A href="/">"Atelier Peinture"</A>
            </span>
            <nav class="site-header__nav">
                <A href="/services">"Services"</A>
                <A href="/references">"References"</A>
                <A href="/contact">"Contact"</A>
            </nav>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <A href="/legal">"Legal notices"</A>
            <span class="site-footer__admin">
                <A href="/admin/login">"Admin"</A>
            </span>
        </footer>
    }
}
