//! Landing page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Interior and exterior painting"</h1>
            <p>"Walls, ceilings, facades and woodwork, prepared and finished by a local team."</p>
            <A href="/contact">"Request a quote"</A>
        </section>
    }
}
