//! Application root: page layout and global wiring.
//!
//! Everything page-wide happens here: config context, toast provider, the
//! shared window-scroll signal feeding the navbar and parallax, reveal
//! observer setup, and one-shot page-view tracking.

use dioxus::prelude::*;

use verdant_types::SiteConfig;

use crate::api;
use crate::components::{
    ContactSection, Footer, Hero, Navbar, Products, Testimonials, ToastFrame, use_toast_provider,
};
use crate::effects;

static MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config = use_context_provider(SiteConfig::default);
    use_toast_provider();

    let scroll = effects::use_window_scroll();

    // Page-view tracking, once per load
    let endpoints = config.endpoints.clone();
    use_effect(move || {
        let endpoints = endpoints.clone();
        spawn(async move {
            api::track_page_view(&endpoints).await;
        });
    });

    // Observe every [data-aos] node once the tree is mounted
    let timings = config.timings.clone();
    use_effect(move || {
        effects::init_reveal(&timings);
    });

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Navbar { scroll }
        Hero { scroll }
        Products {}
        Testimonials {}
        ContactSection {}
        Footer {}
        ToastFrame {}
    }
}
