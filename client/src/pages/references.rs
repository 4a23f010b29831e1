//! Completed projects.

use leptos::prelude::*;

const PROJECTS: &[(&str, &str)] = &[
    ("Apartment renovation", "Full repaint of a four-room apartment, ceilings included."),
    ("Townhouse facade", "Cleaning, crack repair and mineral paint on a two-storey facade."),
    ("Office fit-out", "Low-odour finishes applied out of hours across three floors."),
];

#[component]
pub fn ReferencesPage() -> impl IntoView {
    view! {
        <section class="references">
            <h1>"References"</h1>
            {PROJECTS
                .iter()
                .map(|(title, text)| {
                    view! {
                        <article class="references__item">
                            <h2>{*title}</h2>
                            <p>{*text}</p>
                        </article>
                    }
                })
                .collect_view()}
        </section>
    }
}
