/// Grid of perfume cards. Each card links to the perfume's page.
use leptos::*;
use crate::models::perfume::Perfume;

pub fn perfume_path(perfume: &Perfume) -> String {
    format!("/perfumes/{}", perfume.perfume_id)
}

fn rating_label(perfume: &Perfume) -> Option<String> {
    let rate = perfume.rate?;
    Some(match perfume.review_count {
        Some(count) => format!("★ {:.1} ({})", rate, count),
        None => format!("★ {:.1}", rate),
    })
}

#[component]
pub fn PerfumeList(perfumes: Vec<Perfume>) -> impl IntoView {
    view! {
        <ul class="perfume-list">
            {perfumes.into_iter().map(|perfume| {
                let href = perfume_path(&perfume);
                let rating = rating_label(&perfume);
                view! {
                    <li key={perfume.perfume_id.to_string()}>
                        <a href=href>
                            <img src=perfume.thumbnail.clone() alt=perfume.name.clone() loading="lazy" />
                            <span class="brand">{ perfume.brand.clone() }</span>
                            <strong>{ perfume.name.clone() }</strong>
                            {rating.map(|r| view! { <span class="rating">{r}</span> })}
                        </a>
                    </li>
                }
            }).collect::<Vec<_>>()}
        </ul>
    }
}
