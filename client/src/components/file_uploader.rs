//! Image picker with preview.
//!
//! The chosen file is read into memory in the browser and handed to the
//! owning form as a [`FileUpload`]; the form decides when to upload it.

#[cfg(test)]
#[path = "file_uploader_test.rs"]
mod file_uploader_test;

use leptos::prelude::*;

use crate::net::types::FileUpload;

/// MIME types the picker accepts.
pub const ACCEPTED_TYPES: [&str; 4] = ["image/png", "image/jpeg", "image/jpg", "image/svg+xml"];

#[must_use]
pub fn is_accepted(mime_type: &str) -> bool {
    ACCEPTED_TYPES.contains(&mime_type.to_ascii_lowercase().as_str())
}

#[component]
pub fn FileUploader(
    /// Called with the picked file, or `None` when the pick was rejected.
    on_change: Callback<Option<FileUpload>>,
    /// Existing image to preview before anything is picked.
    #[prop(optional, into)]
    media_url: String,
) -> impl IntoView {
    let preview = RwSignal::new(media_url);
    let rejected = RwSignal::new(false);

    let on_input = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            if !is_accepted(&file.type_()) {
                rejected.set(true);
                on_change.run(None);
                return;
            }
            rejected.set(false);
            if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
                preview.set(url);
            }
            leptos::task::spawn_local(async move {
                match wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await {
                    Ok(buffer) => on_change.run(Some(FileUpload {
                        name: file.name(),
                        mime_type: file.type_(),
                        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
                    })),
                    Err(e) => {
                        log::warn!("could not read picked file: {e:?}");
                        on_change.run(None);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ev, on_change);
    };

    view! {
        <div class="file-uploader">
            <Show
                when=move || !preview.get().is_empty()
                fallback=|| view! {
                    <div class="file-uploader__empty">
                        <img src="/assets/icons/file-upload.svg" alt="file upload" width="96" height="77"/>
                        <h3>"Drag photo here"</h3>
                        <p>"SVG, PNG, JPG"</p>
                    </div>
                }
            >
                <img class="file-uploader__preview" src=move || preview.get() alt="image"/>
                <p class="file-uploader__hint">"Click or drag photo to replace"</p>
            </Show>
            <input class="file-uploader__input" type="file" accept=ACCEPTED_TYPES.join(",") on:change=on_input/>
            <Show when=move || rejected.get()>
                <p class="form-message">"Only SVG, PNG and JPG images are supported"</p>
            </Show>
        </div>
    }
}
