//! Deferred image loading.
//!
//! Renders a tiny placeholder immediately; the real source swaps in the
//! first time the node nears the viewport. The watch is one-shot: the
//! observer lets go of the node on that crossing and never fires again.

use dioxus::prelude::*;
use wasm_bindgen::JsCast;

use verdant_core::visibility::ObserverConfig;

use crate::effects::VisibilityObserver;

const DATA_SRC_ATTR: &str = "data-src";

/// 1x1 transparent GIF shown until the deferred source loads.
const PLACEHOLDER_SRC: &str =
    "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

#[component]
pub fn LazyImage(id: String, src: String, alt: String, class: String) -> Element {
    let node_id = id.clone();

    use_effect(move || {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(element) = document.get_element_by_id(&node_id) else {
            return;
        };
        let observer = VisibilityObserver::new(
            &ObserverConfig::default(),
            |element, _crossing| {
                let Some(deferred) = element.get_attribute(DATA_SRC_ATTR) else {
                    return;
                };
                if let Ok(image) = element.dyn_into::<web_sys::HtmlImageElement>() {
                    image.set_src(&deferred);
                    let _ = image.class_list().remove_1("lazy");
                }
            },
        );
        let Some(observer) = observer else {
            return;
        };
        observer.observe(&element, true);
        observer.forget();
    });

    rsx! {
        img {
            id: "{id}",
            class: "{class} lazy",
            src: PLACEHOLDER_SRC,
            "data-src": "{src}",
            alt: "{alt}",
        }
    }
}
