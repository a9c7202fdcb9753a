use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, FileReader, HtmlButtonElement, HtmlImageElement, HtmlInputElement};

/// Wires the file input to the preview image: each selection is read to a
/// data URL, shown in the preview, and unlocks the submit control. Reads
/// are not cancelled; the last one to finish owns the image source.
pub(crate) fn install_image_preview(
    input: HtmlInputElement,
    preview: HtmlImageElement,
    submit: HtmlButtonElement,
) -> EventListener {
    let input_for_change = input.clone();
    EventListener::new(&input, "change", move |_event| {
        let Some(file) = input_for_change.files().and_then(|files| files.get(0)) else {
            return;
        };
        let preview = preview.clone();
        let submit = submit.clone();
        spawn_local(async move {
            match read_data_url(file).await {
                Ok(data_url) => {
                    preview.set_src(&data_url);
                    submit.set_disabled(false);
                }
                Err(message) => {
                    gloo::console::warn!("image preview failed", message);
                }
            }
        });
    })
}

async fn read_data_url(file: File) -> Result<String, String> {
    let reader = FileReader::new().map_err(|_| "failed to create file reader".to_string())?;
    let reader = Rc::new(reader);
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let reader_onload = reader.clone();
        let onload = Closure::once(move || {
            let result = reader_onload.result().unwrap_or(JsValue::NULL);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        let onerror = Closure::once(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("file_read_failed"));
        });
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onload.forget();
        onerror.forget();
    });
    reader
        .read_as_data_url(&file)
        .map_err(|_| "failed to read file".to_string())?;
    let value = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|_| "failed to read file".to_string())?;
    value
        .as_string()
        .ok_or_else(|| "file read produced no data".to_string())
}
