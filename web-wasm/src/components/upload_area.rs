//! アップロードエリアコンポーネント

use ks_detect_common::{content::UPLOAD_HINT, ImageFile};
use leptos::ev::{Event, MouseEvent};
use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{DragEvent, File, HtmlInputElement};

/// ブラウザのFileを読み込んでImageFileにする
pub async fn read_image_file(file: &File) -> Result<ImageFile, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(ImageFile::new(file.name(), file.type_(), bytes))
}

#[component]
pub fn UploadArea<F>(on_file: F) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref: NodeRef<Input> = NodeRef::new();

    let on_drop = {
        let on_file = on_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            // 先頭の1枚だけ扱う
            if let Some(file) = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0))
            {
                on_file(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_: MouseEvent| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file(file);
        }
        // 同じファイルを再選択してもchangeが発火するように
        input.set_value("");
    };

    view! {
        <div
            class=move || if is_dragover.get() { "upload-area dragover" } else { "upload-area" }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <input
                node_ref=input_ref
                type="file"
                accept="image/*"
                class="hidden"
                on:change=on_change
                on:click=|ev: MouseEvent| ev.stop_propagation()
            />
            <div class="upload-icon">"📷"</div>
            <p>"Upload Skin Lesion Image"</p>
            <p class="text-muted">"Drag and drop or click to select an image"</p>
            <p class="text-muted">{UPLOAD_HINT}</p>
        </div>
    }
}
