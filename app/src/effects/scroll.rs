//! Window-scroll plumbing: the shared scroll signal and smooth anchoring.

use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Subscribe to the window scroll offset.
///
/// One listener per call site; the returned signal updates with the current
/// vertical offset in pixels. The navbar and the hero parallax both derive
/// from the same App-level instance.
pub fn use_window_scroll() -> Signal<f64> {
    let mut offset = use_signal(|| 0.0f64);

    use_effect(move || {
        let closure = Closure::<dyn FnMut()>::new(move || {
            let y = web_sys::window()
                .and_then(|w| w.page_y_offset().ok())
                .unwrap_or(0.0);
            // Use try_write to handle the signal being dropped on unmount
            let _ = offset.try_write().map(|mut w| *w = y);
        });
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    });

    offset
}

/// Smooth-scroll an in-page section into view. Missing targets are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
