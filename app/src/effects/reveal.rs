//! Scroll-triggered reveal animations.
//!
//! Every node carrying a `data-aos` attribute gets the `aos-animate` class
//! added the first time it crosses into view; the CSS transition does the
//! rest. Adding the class again on later crossings is a no-op, so watches
//! stay persistent.

use wasm_bindgen::JsCast;

use verdant_core::visibility::ObserverConfig;
use verdant_types::EffectTimings;

use super::observer::VisibilityObserver;

/// Revealed marker class, paired with the `[data-aos]` styles in main.css.
pub const REVEAL_CLASS: &str = "aos-animate";

/// Observe all `[data-aos]` nodes currently in the document.
pub fn init_reveal(timings: &EffectTimings) {
    let config = ObserverConfig::new(timings.reveal_threshold, &timings.reveal_root_margin);
    let Some(observer) = VisibilityObserver::new(&config, |element, _crossing| {
        let _ = element.class_list().add_1(REVEAL_CLASS);
    }) else {
        return;
    };

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(nodes) = document.query_selector_all("[data-aos]") else {
        return;
    };
    for index in 0..nodes.length() {
        if let Some(node) = nodes.item(index)
            && let Ok(element) = node.dyn_into::<web_sys::Element>()
        {
            observer.observe(&element, false);
        }
    }
    observer.forget();
}
