//! オブジェクトURLによるプレビュー
//!
//! Drop時にrevokeObjectURLで解放する

use ks_detect_common::{Error, ImageFile, Preview, PreviewFactory, Result};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, Url};

pub struct ObjectUrlPreview {
    url: String,
}

impl Preview for ObjectUrlPreview {
    fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrlPreview {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.url);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ObjectUrlPreviewFactory;

fn preview_error(value: JsValue) -> Error {
    Error::Preview(format!("{:?}", value))
}

impl PreviewFactory for ObjectUrlPreviewFactory {
    type Preview = ObjectUrlPreview;

    fn create(&self, file: &ImageFile) -> Result<ObjectUrlPreview> {
        let bytes = js_sys::Uint8Array::from(file.content());
        let parts = js_sys::Array::of1(&bytes);

        let opts = BlobPropertyBag::new();
        opts.set_type(&file.media_type);

        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(preview_error)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(preview_error)?;

        Ok(ObjectUrlPreview { url })
    }
}
