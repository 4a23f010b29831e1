//! Contact details.

use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="contact">
            <h1>"Contact"</h1>
            <p>"Tell us about your project and we will get back to you with a quote."</p>
            <address>
                <a href="mailto:contact@atelier-peinture.example">"contact@atelier-peinture.example"</a>
                <br/>
                <a href="tel:+33100000000">"+33 1 00 00 00 00"</a>
            </address>
        </section>
    }
}
