/// `/spices/:spice`: perfumes built on one ingredient.
use leptos::*;
use leptos_router::{use_params_map, Redirect};

use crate::api::fetch_display;
use crate::components::detail_template::DetailPageTemplate;
use crate::models::perfume::DisplaySort;

/// Route segment to query term; `None` sends the visitor home.
pub fn spice_query(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|spice| !spice.is_empty())
        .map(str::to_string)
}

/// Display form of a percent-encoded segment. Undecodable input is shown as is.
pub fn decode_label(query: &str) -> String {
    urlencoding::decode(query)
        .map(|label| label.into_owned())
        .unwrap_or_else(|_| query.to_string())
}

#[component]
pub fn SpiceHeader(#[prop(into)] label: String, total: u64) -> impl IntoView {
    view! {
        <div class="listing-header">
            <h3><span class="accent">{format!("{label} ")}</span>"베이스 향수"</h3>
            <span class="total">"총 "<span class="count">{total}</span>"건"</span>
        </div>
    }
}

#[component]
fn SpiceListing(query: String) -> impl IntoView {
    let label = decode_label(&query);
    let listing = create_resource(
        move || query.clone(),
        |query| fetch_display(DisplaySort::Ingredient, query),
    );

    view! {
        <Suspense fallback=|| ()>
            {
                let label = label.clone();
                move || {
                    let label = label.clone();
                    // a failed fetch renders nothing
                    listing.get().and_then(|result| result.ok().flatten()).map(move |page| {
                        let total = page.total_elements;
                        view! {
                            <DetailPageTemplate sort=DisplaySort::Ingredient perfumes=page.data>
                                <SpiceHeader label=label.clone() total=total />
                            </DetailPageTemplate>
                        }
                    })
                }
            }
        </Suspense>
    }
}

#[component]
pub fn SpicePage() -> impl IntoView {
    let params = use_params_map();
    let spice = move || params.with(|p| spice_query(p.get("spice").map(String::as_str)));

    move || match spice() {
        Some(query) => view! { <SpiceListing query=query /> }.into_view(),
        None => view! { <Redirect path="/" /> }.into_view(),
    }
}
