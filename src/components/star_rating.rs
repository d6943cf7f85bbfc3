use leptos::*;

pub const MAX_STARS: u8 = 5;

#[component]
pub fn StarRating(on_rating_change: Callback<u8>) -> impl IntoView {
    let (rating, set_rating) = create_signal(0u8);

    view! {
        <section>
            <h3>{ "이 향수를 평가해 주세요" }</h3>
            <div class="stars" role="radiogroup">
                {(1..=MAX_STARS).map(|star| view! {
                    <button
                        type="button"
                        aria-label=format!("{star}점")
                        class:filled=move || star <= rating.get()
                        on:click=move |_| {
                            set_rating.set(star);
                            on_rating_change.call(star);
                        }
                    >
                        { "★" }
                    </button>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
