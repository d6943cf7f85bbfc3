use leptos::*;
use leptos_router::{use_query_map, A};

use crate::api::fetch_display;
use crate::components::perfume_list::PerfumeList;
use crate::models::perfume::DisplaySort;

pub const DEFAULT_CATEGORY: &str = "우디";
pub const CATEGORIES: &[&str] = &["우디", "플로럴", "시트러스", "머스크", "프루티", "스파이시"];
pub const RECOMMENDED_SPICES: &[&str] = &["장미", "베르가못", "샌달우드", "바닐라", "재스민"];

pub fn category_or_default(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|category| !category.is_empty())
        .unwrap_or(DEFAULT_CATEGORY)
        .to_string()
}

pub fn spice_href(spice: &str) -> String {
    format!("/spices/{}", urlencoding::encode(spice))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let query = use_query_map();
    let category = move || query.with(|q| category_or_default(q.get("category").map(String::as_str)));
    let listing = create_resource(category, |category| fetch_display(DisplaySort::Category, category));

    view! {
        <div class="home">
            <section class="spice-recommendation">
                <h3>{ "오늘은 이런 향료 어때요?" }</h3>
                {RECOMMENDED_SPICES.iter().map(|spice| view! {
                    <A href=spice_href(spice)>{*spice}</A>
                }).collect::<Vec<_>>()}
            </section>
            <nav class="menu">
                {CATEGORIES.iter().map(|c| view! {
                    <A href=format!("/?category={}", urlencoding::encode(c))>{*c}</A>
                }).collect::<Vec<_>>()}
            </nav>
            <Suspense fallback=|| ()>
                {move || listing.get()
                    .and_then(|result| result.ok().flatten())
                    .map(|page| view! { <PerfumeList perfumes=page.data /> })}
            </Suspense>
            <h3><span class="accent">{category}</span>" 계열의 향수"</h3>
            <A href="/">{ "더 보러 가기" }</A>
        </div>
    }
}
