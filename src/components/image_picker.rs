//! Image Picker Component
//!
//! File input bound to the selected `File`. The bytes are read only when the
//! owning form submits (see [`read_file`]). Setting `selected` back to `None`
//! also clears the input.

use habit_client::ImageUpload;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen_futures::JsFuture;

/// Read a browser `File` into an [`ImageUpload`]
pub async fn read_file(file: web_sys::File) -> Result<ImageUpload, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(ImageUpload::new(file.name(), &file.type_(), bytes))
}

#[component]
pub fn ImagePicker(selected: RwSignal<Option<web_sys::File>, LocalStorage>) -> impl IntoView {
    let input_ref = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        if selected.with(Option::is_none) {
            if let Some(input) = input_ref.get() {
                input.set_value("");
            }
        }
    });

    let on_change = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let file = input.files().and_then(|files| files.get(0));
        if let Some(file) = &file {
            tracing::debug!(name = %file.name(), size = file.size(), "image selected");
        }
        selected.set(file);
    };

    view! {
        <input
            node_ref=input_ref
            class="file-input"
            type="file"
            accept="image/*"
            on:change=on_change
        />
    }
}
