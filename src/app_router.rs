use web_sys::UrlSearchParams;

/// The query pairs that trigger a tag fetch on view load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct TagQueryConfig {
    pub(crate) params: Vec<(String, String)>,
}

pub(crate) fn load_tag_query() -> Option<TagQueryConfig> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    parse_tag_query(&search)
}

fn parse_tag_query(search: &str) -> Option<TagQueryConfig> {
    let search = search.trim();
    if search.is_empty() || search == "?" {
        return None;
    }
    let params = UrlSearchParams::new_with_str(search).ok()?;
    let mut pairs = Vec::new();
    for key in ["id", "query"] {
        if let Some(value) = params.get(key) {
            pairs.push((key.to_string(), value));
        }
    }
    if pairs.is_empty() {
        return None;
    }
    Some(TagQueryConfig { params: pairs })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn parse_picks_id_and_query_keys() {
        let config = parse_tag_query("?id=42&page=3&query=cat%20-dog").expect("config");
        assert_eq!(
            config.params,
            vec![
                ("id".to_string(), "42".to_string()),
                ("query".to_string(), "cat -dog".to_string()),
            ]
        );
    }

    #[wasm_bindgen_test]
    fn parse_without_interesting_keys_is_none() {
        assert!(parse_tag_query("?page=3").is_none());
        assert!(parse_tag_query("").is_none());
        assert!(parse_tag_query("?").is_none());
        assert!(parse_tag_query("   ").is_none());
    }
}
