use leptos::*;
use leptos::logging::{error, log};
use wasm_bindgen_futures::JsFuture;
use crate::models::review::{PhotoFile, MAX_PHOTOS};
use crate::utils::leptos_owner::with_owner_safe;

async fn read_file(file: &web_sys::File) -> Option<PhotoFile> {
    match JsFuture::from(file.array_buffer()).await {
        Ok(buffer) => Some(PhotoFile {
            name: file.name(),
            bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
        }),
        Err(e) => {
            error!("[PHOTO] Could not read {}: {:?}", file.name(), e);
            None
        }
    }
}

/// File picker for up to [`MAX_PHOTOS`] images, read into memory on selection.
#[component]
pub fn PhotoInput(on_change: Callback<Vec<PhotoFile>>) -> impl IntoView {
    let (names, set_names) = create_signal(Vec::<String>::new());
    let owner = Owner::current();

    let handle_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(list) = input.files() else { return };
        let files: Vec<web_sys::File> = (0..list.length())
            .filter_map(|i| list.get(i))
            .take(MAX_PHOTOS)
            .collect();
        if list.length() as usize > MAX_PHOTOS {
            log!("[PHOTO] {} files picked, keeping the first {}", list.length(), MAX_PHOTOS);
        }

        spawn_local(async move {
            let mut photos = Vec::with_capacity(files.len());
            for file in &files {
                if let Some(photo) = read_file(file).await {
                    photos.push(photo);
                }
            }
            with_owner_safe(owner, "photo selection", move || {
                set_names.set(photos.iter().map(|p| p.name.clone()).collect());
                on_change.call(photos);
            });
        });
    };

    view! {
        <section>
            <h3>{ "사진 첨부" }<small>{move || format!(" ({}/{})", names.get().len(), MAX_PHOTOS)}</small></h3>
            <input type="file" accept="image/*" multiple on:change=handle_change />
            <ul>
                {move || names.get().into_iter().map(|name| view! { <li>{name}</li> }).collect::<Vec<_>>()}
            </ul>
        </section>
    }
}
