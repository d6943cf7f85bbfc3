/// Main application entry point for acode.
/// Routes the perfume listings and the review form.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::pages::{home::HomePage, review::ReviewPage, spice::SpicePage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/acode.css" />
        <Title text="acode" />
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=HomePage />
                    // a listing without an ingredient has nothing to show
                    <Route path="/spices" view=|| view! { <Redirect path="/" /> } />
                    <Route path="/spices/:spice" view=SpicePage />
                    <Route path="/perfumes/:id/review" view=ReviewPage />
                </Routes>
            </main>
        </Router>
    }
}
