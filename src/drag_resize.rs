use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, MouseEvent};

pub(crate) const RESIZE_HANDLE_PX: f64 = 16.0;
pub(crate) const MIN_SIZE_PX: f64 = 48.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DragMode {
    Move,
    Resize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragFrame {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

#[derive(Clone, Copy)]
struct DragState {
    mode: DragMode,
    start_x: f64,
    start_y: f64,
    origin: DragFrame,
}

// A press inside the bottom-right handle region resizes; anywhere else moves.
fn mode_for_press(frame_width: f64, frame_height: f64, offset_x: f64, offset_y: f64) -> DragMode {
    if frame_width - offset_x <= RESIZE_HANDLE_PX && frame_height - offset_y <= RESIZE_HANDLE_PX {
        DragMode::Resize
    } else {
        DragMode::Move
    }
}

fn frame_after_drag(mode: DragMode, origin: DragFrame, dx: f64, dy: f64) -> DragFrame {
    match mode {
        DragMode::Move => DragFrame {
            left: origin.left + dx,
            top: origin.top + dy,
            ..origin
        },
        DragMode::Resize => DragFrame {
            width: (origin.width + dx).max(MIN_SIZE_PX),
            height: (origin.height + dy).max(MIN_SIZE_PX),
            ..origin
        },
    }
}

/// Move/resize affordances for a single element. Holds no editor state;
/// the listeners live as long as the controller does.
pub(crate) struct DragResizeController {
    target: HtmlElement,
    drag: RefCell<Option<DragState>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl DragResizeController {
    pub(crate) fn attach(target: HtmlElement) -> Rc<Self> {
        let controller = Rc::new(Self {
            target,
            drag: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });
        controller.install_listeners();
        controller
    }

    fn install_listeners(self: &Rc<Self>) {
        let Some(document) = self.target.owner_document() else {
            return;
        };
        let mut listeners = Vec::new();

        let controller = Rc::clone(self);
        let listener = EventListener::new_with_options(
            &self.target,
            "mousedown",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                if event.button() != 0 {
                    return;
                }
                controller.begin_drag(event);
                event.prevent_default();
            },
        );
        listeners.push(listener);

        let controller = Rc::clone(self);
        let listener = EventListener::new_with_options(
            &document,
            "mousemove",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                controller.update_drag(event);
            },
        );
        listeners.push(listener);

        let controller = Rc::clone(self);
        let listener = EventListener::new(&document, "mouseup", move |_event: &Event| {
            controller.end_drag();
        });
        listeners.push(listener);

        *self.listeners.borrow_mut() = listeners;
    }

    fn begin_drag(&self, event: &MouseEvent) {
        let rect = self.target.get_bounding_client_rect();
        let offset_x = event.client_x() as f64 - rect.left();
        let offset_y = event.client_y() as f64 - rect.top();
        let mode = mode_for_press(rect.width(), rect.height(), offset_x, offset_y);
        let origin = DragFrame {
            left: self.target.offset_left() as f64,
            top: self.target.offset_top() as f64,
            width: rect.width(),
            height: rect.height(),
        };
        *self.drag.borrow_mut() = Some(DragState {
            mode,
            start_x: event.client_x() as f64,
            start_y: event.client_y() as f64,
            origin,
        });
    }

    fn update_drag(&self, event: &MouseEvent) {
        let Some(state) = *self.drag.borrow() else {
            return;
        };
        let dx = event.client_x() as f64 - state.start_x;
        let dy = event.client_y() as f64 - state.start_y;
        let frame = frame_after_drag(state.mode, state.origin, dx, dy);
        self.apply_frame(frame);
        event.prevent_default();
    }

    fn end_drag(&self) {
        self.drag.borrow_mut().take();
    }

    fn apply_frame(&self, frame: DragFrame) {
        let style = self.target.style();
        let _ = style.set_property("left", &format!("{:.0}px", frame.left));
        let _ = style.set_property("top", &format!("{:.0}px", frame.top));
        let _ = style.set_property("width", &format!("{:.0}px", frame.width));
        let _ = style.set_property("height", &format!("{:.0}px", frame.height));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn corner_press_resizes_elsewhere_moves() {
        assert_eq!(mode_for_press(200.0, 100.0, 190.0, 95.0), DragMode::Resize);
        assert_eq!(mode_for_press(200.0, 100.0, 20.0, 30.0), DragMode::Move);
        assert_eq!(mode_for_press(200.0, 100.0, 190.0, 10.0), DragMode::Move);
        assert_eq!(mode_for_press(200.0, 100.0, 20.0, 95.0), DragMode::Move);
    }

    #[wasm_bindgen_test]
    fn move_drag_shifts_frame() {
        let origin = DragFrame {
            left: 10.0,
            top: 20.0,
            width: 300.0,
            height: 200.0,
        };
        let frame = frame_after_drag(DragMode::Move, origin, 15.0, -5.0);
        assert_eq!(
            frame,
            DragFrame {
                left: 25.0,
                top: 15.0,
                width: 300.0,
                height: 200.0,
            }
        );
    }

    #[wasm_bindgen_test]
    fn resize_drag_clamps_to_minimum() {
        let origin = DragFrame {
            left: 0.0,
            top: 0.0,
            width: 300.0,
            height: 200.0,
        };
        let frame = frame_after_drag(DragMode::Resize, origin, -400.0, -400.0);
        assert_eq!(frame.width, MIN_SIZE_PX);
        assert_eq!(frame.height, MIN_SIZE_PX);
        assert_eq!(frame.left, 0.0);
        assert_eq!(frame.top, 0.0);
    }

    #[wasm_bindgen_test]
    fn resize_drag_grows_from_origin_size() {
        let origin = DragFrame {
            left: 5.0,
            top: 5.0,
            width: 100.0,
            height: 80.0,
        };
        let frame = frame_after_drag(DragMode::Resize, origin, 40.0, 20.0);
        assert_eq!(frame.width, 140.0);
        assert_eq!(frame.height, 100.0);
    }
}
