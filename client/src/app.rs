//! Root application component with routing.
//!
//! Admin routes sit behind `ProtectedRoute`, whose condition is the session
//! route guard. Public routes and the login page are plain routes.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ProtectedRoute, Redirect, Route, Router, Routes},
};

use admin_session::{LANDING_ROUTE, LOGIN_ROUTE};

use crate::components::site_chrome::{SiteFooter, SiteHeader};
use crate::pages::admin_lead::LeadDetailPage;
use crate::pages::admin_leads::LeadsPage;
use crate::pages::admin_pricing::PricingPage;
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;
use crate::pages::legal::LegalPage;
use crate::pages::login::AdminLoginPage;
use crate::pages::references::ReferencesPage;
use crate::pages::services::ServicesPage;
use crate::util::auth::admin_condition;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Atelier Peinture"/>

        <Router>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("services") view=ServicesPage/>
                    <Route path=StaticSegment("references") view=ReferencesPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("legal") view=LegalPage/>

                    <Route path=(StaticSegment("admin"), StaticSegment("login")) view=AdminLoginPage/>
                    <Route path=StaticSegment("admin") view=|| view! { <Redirect path=LANDING_ROUTE/> }/>
                    <ProtectedRoute
                        path=(StaticSegment("admin"), StaticSegment("leads"))
                        condition=admin_condition
                        redirect_path=|| LOGIN_ROUTE
                        view=LeadsPage
                    />
                    <ProtectedRoute
                        path=(StaticSegment("admin"), StaticSegment("leads"), ParamSegment("id"))
                        condition=admin_condition
                        redirect_path=|| LOGIN_ROUTE
                        view=LeadDetailPage
                    />
                    <ProtectedRoute
                        path=(StaticSegment("admin"), StaticSegment("pricing"))
                        condition=admin_condition
                        redirect_path=|| LOGIN_ROUTE
                        view=PricingPage
                    />
                </Routes>
            </main>
            <SiteFooter/>
        </Router>
    }
}
