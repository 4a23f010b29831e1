//! Services overview.

use leptos::prelude::*;

const SERVICES: &[(&str, &str)] = &[
    ("Interior painting", "Walls, ceilings and trim, with surface preparation and protection of furnishings."),
    ("Exterior painting", "Facades, shutters and railings, with cleaning and weatherproof finishes."),
    ("Wall coverings", "Wallpaper, glass fibre and decorative coatings."),
    ("Renovation", "Plaster repair, crack filling and full room refreshes."),
];

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <section class="services">
            <h1>"Services"</h1>
            <ul class="services__list">
                {SERVICES
                    .iter()
                    .map(|(title, text)| {
                        view! {
                            <li>
                                <h2>{*title}</h2>
                                <p>{*text}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
