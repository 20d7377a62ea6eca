//! IntersectionObserver wrapper.
//!
//! One `VisibilityObserver` per effect family (reveal, stats, lazy images),
//! each with its own threshold/root-margin config. Raw browser entries are
//! routed through a [`VisibilityTracker`], which does edge detection and
//! one-shot release accounting; callers only ever see crossings.
//!
//! Observed nodes are tagged with a numeric watch id attribute, since DOM
//! handles are not usable as map keys on the Rust side.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use verdant_core::visibility::{Crossing, ObserverConfig, VisibilityTracker};

const WATCH_ID_ATTR: &str = "data-watch-id";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// A configured geometry observer plus its dispatch state.
pub struct VisibilityObserver {
    inner: web_sys::IntersectionObserver,
    tracker: Rc<RefCell<VisibilityTracker>>,
    next_id: Cell<u64>,
    callback: ObserverCallback,
}

impl VisibilityObserver {
    /// Build an observer; `on_crossing` runs once per crossing into
    /// visibility. Returns `None` if the host environment is missing.
    pub fn new(
        config: &ObserverConfig,
        mut on_crossing: impl FnMut(web_sys::Element, Crossing) + 'static,
    ) -> Option<Self> {
        let tracker = Rc::new(RefCell::new(VisibilityTracker::new()));
        let tracker_cb = Rc::clone(&tracker);

        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let element = entry.target();
                    let Some(id) = watch_id(&element) else {
                        continue;
                    };
                    let crossing = tracker_cb
                        .borrow_mut()
                        .record(id, entry.is_intersecting());
                    if let Some(crossing) = crossing {
                        if crossing.release {
                            observer.unobserve(&element);
                        }
                        on_crossing(element, crossing);
                    }
                }
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config.threshold));
        init.set_root_margin(&config.root_margin);

        let inner = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        )
        .map_err(|err| tracing::warn!("intersection observer unavailable: {err:?}"))
        .ok()?;

        Some(Self {
            inner,
            tracker,
            next_id: Cell::new(0),
            callback,
        })
    }

    /// Start watching an element. With `auto_release` the watch ends after
    /// the first crossing and the node is unobserved exactly once.
    pub fn observe(&self, element: &web_sys::Element, auto_release: bool) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        if element.set_attribute(WATCH_ID_ATTR, &id.to_string()).is_err() {
            return;
        }
        self.tracker.borrow_mut().watch(id, auto_release);
        self.inner.observe(element);
    }

    /// Stop watching an element early.
    pub fn unobserve(&self, element: &web_sys::Element) {
        if let Some(id) = watch_id(element) {
            self.tracker.borrow_mut().release(id);
        }
        self.inner.unobserve(element);
    }

    /// Leak the callback so the observer lives for the page's lifetime.
    ///
    /// The single page never tears its sections down, so every observer is
    /// page-lifetime; this mirrors `Closure::forget` on event listeners.
    pub fn forget(self) {
        self.callback.forget();
    }
}

fn watch_id(element: &web_sys::Element) -> Option<u64> {
    element.get_attribute(WATCH_ID_ATTR)?.parse().ok()
}
