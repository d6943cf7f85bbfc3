use leptos::*;
use leptos_router::{use_params_map, Redirect};

use crate::components::review_form::ReviewContentContainer;

/// `/perfumes/:id/review`
#[component]
pub fn ReviewPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").cloned().filter(|id| !id.is_empty()));

    view! {
        <div class="review-page">
            <h2>{ "리뷰 작성" }</h2>
            {move || match id() {
                Some(id) => view! { <ReviewContentContainer id=id /> }.into_view(),
                None => view! { <Redirect path="/" /> }.into_view(),
            }}
        </div>
    }
}
