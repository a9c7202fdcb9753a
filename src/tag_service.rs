use std::fmt::Write;
use std::rc::Rc;

use gloo::net::http::Request;
use wasm_bindgen_futures::spawn_local;

use crate::app_core::EditorCore;
use crate::app_router::TagQueryConfig;

const TAGS_ENDPOINT: &str = "/image_tags";

fn tags_url(config: &TagQueryConfig) -> String {
    let mut url = TAGS_ENDPOINT.to_string();
    let mut separator = '?';
    for (key, value) in &config.params {
        url.push(separator);
        separator = '&';
        let key = String::from(js_sys::encode_uri_component(key));
        let value = String::from(js_sys::encode_uri_component(value));
        let _ = write!(url, "{key}={value}");
    }
    url
}

async fn fetch_tags(config: &TagQueryConfig) -> Result<Vec<String>, String> {
    let url = tags_url(config);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|_| "tag query request failed".to_string())?;
    if !response.ok() {
        return Err(format!("tag query failed with status {}", response.status()));
    }
    response
        .json::<Vec<String>>()
        .await
        .map_err(|_| "tag query returned malformed data".to_string())
}

/// Issues one fetch for the view's tag query. No retry loop and no timeout;
/// a user-driven retry calls this again.
pub(crate) fn start_tag_fetch(core: Rc<EditorCore>, config: TagQueryConfig) {
    core.begin_fetch();
    spawn_local(async move {
        let result = fetch_tags(&config).await;
        if let Err(message) = &result {
            gloo::console::warn!("tag query failed", message.clone());
        }
        core.finish_fetch(result);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn tags_url_encodes_params() {
        let config = TagQueryConfig {
            params: vec![("query".to_string(), "cat -dog".to_string())],
        };
        assert_eq!(tags_url(&config), "/image_tags?query=cat%20-dog");
    }

    #[wasm_bindgen_test]
    fn tags_url_joins_multiple_params() {
        let config = TagQueryConfig {
            params: vec![
                ("id".to_string(), "42".to_string()),
                ("query".to_string(), "beach".to_string()),
            ],
        };
        assert_eq!(tags_url(&config), "/image_tags?id=42&query=beach");
    }
}
