use std::rc::Rc;

use web_sys::{HtmlInputElement, InputEvent, MouseEvent};
use yew::prelude::*;

use crate::app_core::EditorCore;
use crate::app_router::TagQueryConfig;
use crate::tag_service;

#[derive(Properties)]
pub(crate) struct AppProps {
    pub(crate) core: Rc<EditorCore>,
    pub(crate) query: Option<TagQueryConfig>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core) && self.query == other.query
    }
}

#[function_component(App)]
pub(crate) fn app(props: &AppProps) -> Html {
    let core = props.core.clone();
    let snapshot = use_state_eq(|| core.snapshot());
    {
        let snapshot = snapshot.clone();
        let core = core.clone();
        use_effect(move || {
            let hook_core = core.clone();
            let hook_snapshot = snapshot.clone();
            let subscription = core.subscribe(Rc::new(move || {
                hook_snapshot.set(hook_core.snapshot());
            }));
            // Catch up on anything that changed before this effect ran.
            snapshot.set(core.snapshot());
            move || drop(subscription)
        });
    }
    let view = (*snapshot).clone();

    let oninput = {
        let core = props.core.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            core.input_changed(&input.value());
        })
    };

    let on_retry = {
        let core = props.core.clone();
        let query = props.query.clone();
        Callback::from(move |_event: MouseEvent| {
            if let Some(config) = query.clone() {
                tag_service::start_tag_fetch(core.clone(), config);
            }
        })
    };

    html! {
        <div class="tag-editor">
            <ul class="tag-list">
                { for view.tags.iter().map(|tag| {
                    let on_remove = {
                        let core = props.core.clone();
                        let tag = tag.clone();
                        Callback::from(move |_event: MouseEvent| core.remove_tag(&tag))
                    };
                    let classes = props.core.style_for(tag).join(" ");
                    html! {
                        <li key={tag.clone()}>
                            <span class={classes}>{ tag.clone() }</span>
                            <button type="button" class="tag-remove" onclick={on_remove}>
                                { "\u{00d7}" }
                            </button>
                        </li>
                    }
                }) }
            </ul>
            <input
                type="text"
                class="tag-input"
                placeholder="Enter space-delimited tags"
                value={view.pending.clone()}
                oninput={oninput}
            />
            if view.loading {
                <p class="tag-loading">{ "Loading tags\u{2026}" }</p>
            }
            if let Some(message) = view.fetch_error.clone() {
                <p class="tag-error">
                    { message }
                    if props.query.is_some() {
                        <button type="button" class="tag-retry" onclick={on_retry}>
                            { "Retry" }
                        </button>
                    }
                </p>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_error_panic_hook::set_once as set_panic_hook;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_app(core: Rc<EditorCore>) -> web_sys::Element {
        set_panic_hook();
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let root = document.create_element("div").expect("create test root");
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append test root");
        yew::Renderer::<App>::with_root_and_props(root.clone(), AppProps { core, query: None })
            .render();
        root
    }

    #[wasm_bindgen_test]
    async fn committed_tags_render_as_badges() {
        let core = EditorCore::new();
        let root = mount_app(core.clone());
        core.seed_tags(["banana", "apple"]);
        core.input_changed("cherry ");
        TimeoutFuture::new(50).await;
        let badges = root.query_selector_all(".badge").expect("query badges");
        assert_eq!(badges.length(), 3);
        let input = root
            .query_selector(".tag-input")
            .expect("query input")
            .expect("input rendered")
            .unchecked_into::<web_sys::HtmlInputElement>();
        assert_eq!(input.value(), "");
    }

    #[wasm_bindgen_test]
    async fn removing_a_tag_updates_the_list() {
        let core = EditorCore::new();
        let root = mount_app(core.clone());
        core.seed_tags(["a", "b", "c"]);
        core.remove_tag("b");
        TimeoutFuture::new(50).await;
        let badges = root.query_selector_all(".badge").expect("query badges");
        assert_eq!(badges.length(), 2);
    }

    #[wasm_bindgen_test]
    async fn fetch_failure_clears_loading_and_shows_error() {
        let core = EditorCore::new();
        let root = mount_app(core.clone());
        core.begin_fetch();
        core.finish_fetch(Err("tag query request failed".to_string()));
        TimeoutFuture::new(50).await;
        assert!(root
            .query_selector(".tag-loading")
            .expect("query loading")
            .is_none());
        assert!(root
            .query_selector(".tag-error")
            .expect("query error")
            .is_some());
    }

    #[wasm_bindgen_test]
    fn snapshot_follows_editor_operations() {
        let core = EditorCore::new();
        core.seed_tags(["b", "a"]);
        core.input_changed("c ");
        core.remove_tag("a");
        let snapshot = core.snapshot();
        assert_eq!(snapshot.tags, vec!["b", "c"]);
        assert_eq!(snapshot.pending, "");
        assert!(!snapshot.loading);
        assert!(snapshot.fetch_error.is_none());
    }

    #[wasm_bindgen_test]
    fn fetch_success_replaces_tags() {
        let core = EditorCore::new();
        core.seed_tags(["stale"]);
        core.begin_fetch();
        assert!(core.snapshot().loading);
        core.finish_fetch(Ok(vec!["zebra".to_string(), "ant".to_string()]));
        let snapshot = core.snapshot();
        assert!(!snapshot.loading);
        assert_eq!(snapshot.tags, vec!["ant", "zebra"]);
    }
}
