use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlElement, HtmlImageElement, HtmlInputElement};

use crate::app_core::EditorCore;
use crate::app_router::TagQueryConfig;
use crate::drag_resize::DragResizeController;
use crate::image_preview;
use crate::yew_app::{App, AppProps};
use tagbox_core::render_markdown;

const TAG_EDITOR_ROOT_ID: &str = "tag-editor";
const SEED_TAGS_ID: &str = "seed-tags";
const SUMMARY_SOURCE_ID: &str = "summary-source";
const SUMMARY_TARGET_ID: &str = "summary";
const FILE_INPUT_ID: &str = "image_selector";
const PREVIEW_IMAGE_ID: &str = "upload-preview";
const SUBMIT_BUTTON_ID: &str = "upload-submit";

/// Owns every document lookup and listener registration, so the view-model
/// and core logic never touch the page globals themselves. Dropping the
/// binder detaches everything it wired.
pub(crate) struct PageBinder {
    document: Document,
    listeners: Vec<EventListener>,
    #[allow(dead_code)]
    drag_resize: Option<Rc<DragResizeController>>,
}

impl PageBinder {
    pub(crate) fn new(document: Document) -> Self {
        Self {
            document,
            listeners: Vec::new(),
            drag_resize: None,
        }
    }

    /// The JSON-encoded tag list embedded in the page, if any.
    pub(crate) fn seed_tags(&self) -> Vec<String> {
        let Some(text) = self.element_text(SEED_TAGS_ID) else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<String>>(&text) {
            Ok(tags) => tags,
            Err(err) => {
                gloo::console::warn!("seed tag list is not valid JSON", err.to_string());
                Vec::new()
            }
        }
    }

    pub(crate) fn mount_tag_editor(&self, core: Rc<EditorCore>, query: Option<TagQueryConfig>) {
        let Some(root) = self.document.get_element_by_id(TAG_EDITOR_ROOT_ID) else {
            gloo::console::warn!("tag editor root missing; editor not mounted");
            return;
        };
        yew::Renderer::<App>::with_root_and_props(root, AppProps { core, query }).render();
    }

    pub(crate) fn mount_summary(&self) {
        let Some(source) = self.element_text(SUMMARY_SOURCE_ID) else {
            return;
        };
        let Some(target) = self.document.get_element_by_id(SUMMARY_TARGET_ID) else {
            return;
        };
        target.set_inner_html(&render_markdown(&source));
    }

    pub(crate) fn bind_image_preview(&mut self) {
        let Some(input) = self.element::<HtmlInputElement>(FILE_INPUT_ID) else {
            return;
        };
        let Some(preview) = self.element::<HtmlImageElement>(PREVIEW_IMAGE_ID) else {
            return;
        };
        let Some(submit) = self.element::<HtmlButtonElement>(SUBMIT_BUTTON_ID) else {
            return;
        };
        self.listeners
            .push(image_preview::install_image_preview(input, preview, submit));
    }

    pub(crate) fn bind_drag_resize(&mut self) {
        let Some(target) = self.element::<HtmlElement>(PREVIEW_IMAGE_ID) else {
            return;
        };
        self.drag_resize = Some(DragResizeController::attach(target));
    }

    fn element<T: JsCast>(&self, id: &str) -> Option<T> {
        self.document.get_element_by_id(id)?.dyn_into::<T>().ok()
    }

    fn element_text(&self, id: &str) -> Option<String> {
        let text = self.document.get_element_by_id(id)?.text_content()?;
        let text = text.trim().to_string();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
