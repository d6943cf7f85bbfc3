use std::fmt::Display;

use leptos::*;
use crate::models::keyword::{Intensity, Longevity, Season};

/// One row of mutually exclusive keyword buttons.
fn keyword_row<K>(
    title: &'static str,
    all: &'static [K],
    selected: Signal<Option<K>>,
    on_select: Callback<K>,
) -> impl IntoView
where
    K: Copy + PartialEq + Display + 'static,
{
    view! {
        <div class="keyword-row">
            <h4>{title}</h4>
            {all.iter().copied().map(|keyword| view! {
                <button
                    type="button"
                    class:selected=move || selected.get() == Some(keyword)
                    on:click=move |_| on_select.call(keyword)
                >
                    {keyword.to_string()}
                </button>
            }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn KeywordReview(
    #[prop(into)] selected_season: Signal<Option<Season>>,
    #[prop(into)] selected_persistence: Signal<Option<Longevity>>,
    #[prop(into)] selected_intensity: Signal<Option<Intensity>>,
    on_season_select: Callback<Season>,
    on_persistence_select: Callback<Longevity>,
    on_intensity_select: Callback<Intensity>,
) -> impl IntoView {
    view! {
        <section>
            <h3>{ "키워드 리뷰" }</h3>
            {keyword_row("계절감", Season::ALL, selected_season, on_season_select)}
            {keyword_row("지속력", Longevity::ALL, selected_persistence, on_persistence_select)}
            {keyword_row("확산력", Intensity::ALL, selected_intensity, on_intensity_select)}
        </section>
    }
}
