use std::cell::RefCell;

use crate::app_core::EditorCore;
use crate::app_router;
use crate::binder::PageBinder;
use crate::tag_service;

thread_local! {
    static PAGE_BINDER: RefCell<Option<PageBinder>> = RefCell::new(None);
}

/// One-time page bootstrap: build the view-model, seed it from the embedded
/// data, kick off the tag query when the location asks for one, and hand
/// the whole thing to the binder. The binder is parked for the lifetime of
/// the page so its listeners stay attached.
pub(crate) fn boot() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        gloo::console::warn!("no document; tag editor not mounted");
        return;
    };
    let mut binder = PageBinder::new(document);

    let core = EditorCore::new();
    core.seed_tags(binder.seed_tags());

    let query = app_router::load_tag_query();
    if let Some(config) = query.clone() {
        tag_service::start_tag_fetch(core.clone(), config);
    }

    binder.mount_tag_editor(core, query);
    binder.mount_summary();
    binder.bind_image_preview();
    binder.bind_drag_resize();

    PAGE_BINDER.with(|slot| {
        *slot.borrow_mut() = Some(binder);
    });
}
