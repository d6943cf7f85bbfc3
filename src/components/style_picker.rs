use leptos::*;
use crate::models::keyword::{toggle_style, Style};

/// Modal for picking style keywords. Selections are handed back on "선택 완료".
#[component]
pub fn StylePicker(on_return: Callback<Vec<Style>>) -> impl IntoView {
    let (open, set_open) = create_signal(false);
    let (picked, set_picked) = create_signal(Vec::<Style>::new());
    let (confirmed, set_confirmed) = create_signal(Vec::<Style>::new());

    let toggle = move |style: Style| set_picked.update(|styles| toggle_style(styles, style));

    let confirm = move |_| {
        let styles = picked.get();
        set_confirmed.set(styles.clone());
        on_return.call(styles);
        set_open.set(false);
    };

    view! {
        <div class="style-picker">
            <button type="button" on:click=move |_| set_open.set(true)>
                {move || {
                    let styles = confirmed.get();
                    if styles.is_empty() {
                        "스타일 선택하기".to_string()
                    } else {
                        styles.iter().map(|s| format!("#{}", s.label())).collect::<Vec<_>>().join(" ")
                    }
                }}
            </button>
            <Show when=move || open.get()>
                <div class="modal" role="dialog">
                    <h4>{ "어떤 스타일의 향수인가요?" }</h4>
                    <ul>
                        {Style::ALL.iter().copied().map(|style| view! {
                            <li>
                                <button
                                    type="button"
                                    class:selected=move || picked.get().contains(&style)
                                    on:click=move |_| toggle(style)
                                >
                                    {style.label()}
                                </button>
                            </li>
                        }).collect::<Vec<_>>()}
                    </ul>
                    <button type="button" on:click=confirm>{ "선택 완료" }</button>
                    <button type="button" on:click=move |_| set_open.set(false)>{ "닫기" }</button>
                </div>
            </Show>
        </div>
    }
}
