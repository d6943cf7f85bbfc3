use leptos::*;

pub const COMMENT_MAX_CHARS: usize = 30;
pub const TEXT_REVIEW_MAX_CHARS: usize = 500;

/// Keeps at most `max` characters, counting Hangul syllables as one.
pub fn clamp_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

#[component]
pub fn OnelineComment(on_change: Callback<String>) -> impl IntoView {
    let (value, set_value) = create_signal(String::new());

    let handle_input = move |e: web_sys::Event| {
        let new_value = clamp_chars(&event_target_value(&e), COMMENT_MAX_CHARS);
        set_value.set(new_value.clone());
        on_change.call(new_value);
    };

    view! {
        <section>
            <h3>{ "한 줄 평" }</h3>
            <input
                type="text"
                placeholder="향수를 한 줄로 표현해 주세요"
                maxlength=COMMENT_MAX_CHARS
                prop:value=value
                on:input=handle_input
            />
            <span class="counter">{move || format!("{}/{}", value.get().chars().count(), COMMENT_MAX_CHARS)}</span>
        </section>
    }
}

#[component]
pub fn TextReview(on_change: Callback<String>) -> impl IntoView {
    let (value, set_value) = create_signal(String::new());

    view! {
        <section>
            <h3>{ "상세 리뷰" }<small>{ " (선택)" }</small></h3>
            <textarea
                placeholder="향수에 대한 자세한 후기를 남겨 주세요"
                prop:value=value
                on:input=move |e| {
                    let new_value = clamp_chars(&event_target_value(&e), TEXT_REVIEW_MAX_CHARS);
                    set_value.set(new_value.clone());
                    on_change.call(new_value);
                }
            />
        </section>
    }
}
