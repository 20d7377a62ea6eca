//! Site navigation bar: mobile toggle, smooth anchoring, scroll styling.

use dioxus::prelude::*;

use verdant_types::SiteConfig;

use crate::effects::scroll_to_section;

const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("products", "Products"),
    ("testimonials", "Testimonials"),
    ("contact", "Contact"),
];

#[component]
pub fn Navbar(scroll: Signal<f64>) -> Element {
    let config = use_context::<SiteConfig>();
    let mut nav_open = use_signal(|| false);
    let scrolled = scroll() > config.timings.navbar_scroll_px;

    rsx! {
        nav { class: if scrolled { "navbar scrolled" } else { "navbar" },
            div { class: "nav-container",
                a {
                    class: "nav-logo",
                    href: "#home",
                    onclick: move |evt| {
                        evt.prevent_default();
                        scroll_to_section("home");
                    },
                    "Verdant"
                }
                ul { class: if nav_open() { "nav-links active" } else { "nav-links" },
                    for (id, label) in NAV_LINKS.iter().copied() {
                        li {
                            a {
                                href: "#{id}",
                                onclick: move |evt| {
                                    evt.prevent_default();
                                    nav_open.set(false);
                                    scroll_to_section(id);
                                },
                                "{label}"
                            }
                        }
                    }
                }
                button {
                    class: if nav_open() { "hamburger active" } else { "hamburger" },
                    aria_label: "Toggle navigation",
                    onclick: move |_| {
                        let open = *nav_open.peek();
                        nav_open.set(!open);
                    },
                    span {}
                    span {}
                    span {}
                }
            }
        }
    }
}
