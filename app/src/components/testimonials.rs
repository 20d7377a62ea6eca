//! Auto-rotating testimonial carousel.
//!
//! The rotation controller is owned by this component; the timer loop
//! advances it every rotation interval and rendering derives emphasis from
//! it, so exactly one card is active at any time.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use verdant_core::rotator::RotatorController;
use verdant_types::SiteConfig;

use crate::types::TESTIMONIALS;

#[component]
pub fn Testimonials() -> Element {
    let config = use_context::<SiteConfig>();
    let rotator = use_signal(|| RotatorController::new(TESTIMONIALS.len()));
    let interval_ms = config.timings.rotation_interval_ms;

    use_effect(move || {
        let mut rotator = rotator;
        spawn(async move {
            loop {
                TimeoutFuture::new(interval_ms).await;
                // Signal gone means the page tore the carousel down
                let Ok(mut controller) = rotator.try_write() else {
                    break;
                };
                controller.advance();
            }
        });
    });

    let controller = rotator();
    rsx! {
        section { id: "testimonials", class: "testimonials",
            h2 { class: "section-title", "data-aos": "fade-up", "What People Say" }
            div { class: "testimonial-row", "data-aos": "fade-up",
                for (index, testimonial) in TESTIMONIALS.iter().enumerate() {
                    div {
                        class: if controller.is_emphasized(index) { "testimonial-card active" } else { "testimonial-card" },
                        blockquote { class: "testimonial-quote", "{testimonial.quote}" }
                        div { class: "testimonial-author", "{testimonial.author}" }
                        div { class: "testimonial-role", "{testimonial.role}" }
                    }
                }
            }
        }
    }
}
