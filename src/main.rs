mod app_builder;
mod app_core;
mod app_router;
mod binder;
mod drag_resize;
mod image_preview;
mod tag_service;
mod yew_app;

fn main() {
    console_error_panic_hook::set_once();
    app_builder::boot();
}
