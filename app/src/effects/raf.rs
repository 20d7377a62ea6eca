//! Animation-frame driver for counter runs.
//!
//! Cooperative one-step-ahead scheduling: each frame renders, then
//! re-requests itself for the next display refresh until the animation
//! reports done. The closure holds itself through an `Rc` slot and drops
//! out of it on the terminal frame, so finished runs leak nothing.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use verdant_core::counter::CounterAnimation;

type FrameCallback = Closure<dyn FnMut(f64)>;

fn request_frame(callback: &FrameCallback) {
    if let Some(window) = web_sys::window() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

/// Drive `animation` to completion, feeding each frame's text to `apply`.
///
/// `keep_going` is polled before every frame; returning false abandons the
/// run (used to let a restarted counter supersede an in-flight one).
pub fn run_counter(
    mut animation: CounterAnimation,
    mut apply: impl FnMut(&str) + 'static,
    mut keep_going: impl FnMut() -> bool + 'static,
) {
    let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let slot_inner = Rc::clone(&slot);

    *slot.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
        if !keep_going() {
            slot_inner.borrow_mut().take();
            return;
        }
        let frame = animation.frame(now_ms);
        apply(&frame.text);
        if frame.done {
            slot_inner.borrow_mut().take();
            return;
        }
        if let Some(callback) = slot_inner.borrow().as_ref() {
            request_frame(callback);
        }
    }));

    if let Some(callback) = slot.borrow().as_ref() {
        request_frame(callback);
    }
}
