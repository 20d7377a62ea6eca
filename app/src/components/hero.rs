//! Hero section: parallax background, headline, animated stat band.

use dioxus::prelude::*;

use verdant_types::SiteConfig;

use crate::components::StatsBand;
use crate::effects::scroll_to_section;
use crate::types::HERO_STATS;

#[component]
pub fn Hero(scroll: Signal<f64>) -> Element {
    let config = use_context::<SiteConfig>();
    let offset = scroll() * config.timings.parallax_speed;

    rsx! {
        section { id: "home", class: "hero",
            div {
                class: "hero-bg-image",
                style: "transform: translateY({offset}px)",
                aria_hidden: "true",
            }
            div { class: "hero-content", "data-aos": "fade-up",
                h1 { class: "hero-title", "Grow something real" }
                p { class: "hero-subtitle",
                    "Organic produce, garden kits, and living soil — grown close to home, delivered to your door."
                }
                button {
                    class: "btn-primary",
                    onclick: move |_| scroll_to_section("products"),
                    "Browse Products"
                }
            }
            StatsBand { id: "hero-stats", stats: HERO_STATS }
        }
    }
}
