use leptos::*;
use crate::components::perfume_list::PerfumeList;
use crate::models::perfume::{DisplaySort, Perfume};

fn empty_message(sort: DisplaySort) -> &'static str {
    match sort {
        DisplaySort::Ingredient => "이 향료가 들어간 향수가 아직 없어요",
        DisplaySort::Category => "이 계열의 향수가 아직 없어요",
    }
}

/// Shared listing layout: a caller-supplied header above the perfume grid.
#[component]
pub fn DetailPageTemplate(sort: DisplaySort, perfumes: Vec<Perfume>, children: Children) -> impl IntoView {
    let body = if perfumes.is_empty() {
        view! { <p class="empty">{ empty_message(sort) }</p> }.into_view()
    } else {
        view! { <PerfumeList perfumes=perfumes /> }.into_view()
    };

    view! {
        <section class="detail-page" data-sort=sort.query_key()>
            {children()}
            {body}
        </section>
    }
}
