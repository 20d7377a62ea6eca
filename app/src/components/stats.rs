//! Animated stat counters.
//!
//! Targets are parsed once from the authored spec text and kept for the
//! page's lifetime; each visibility crossing starts a fresh 0-to-target
//! run from that record. The displayed text is never reparsed, so repeated
//! reveal cycles land on the same final text every time. A run-generation
//! guard lets a restart supersede an in-flight run so only one writer
//! drives a given stat at a time.

use std::rc::Rc;

use dioxus::prelude::*;

use verdant_core::counter::{CounterAnimation, CounterTarget};
use verdant_core::visibility::ObserverConfig;
use verdant_types::SiteConfig;

use crate::effects::{VisibilityObserver, run_counter};
use crate::types::StatSpec;

#[component]
pub fn StatsBand(id: String, stats: &'static [StatSpec]) -> Element {
    let config = use_context::<SiteConfig>();
    let displays = use_signal(|| {
        stats
            .iter()
            .map(|s| s.value.to_string())
            .collect::<Vec<_>>()
    });
    let generation = use_signal(|| 0u64);
    let targets = use_hook(|| {
        Rc::new(
            stats
                .iter()
                .map(|s| CounterTarget::parse_or_zero(s.value))
                .collect::<Vec<_>>(),
        )
    });

    let band_id = id.clone();
    let duration_ms = config.timings.counter_duration_ms;
    let threshold = config.timings.stats_threshold;

    use_effect(move || {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(element) = document.get_element_by_id(&band_id) else {
            tracing::warn!("stat band {band_id} missing from document");
            return;
        };

        let targets = Rc::clone(&targets);
        let mut generation = generation;
        let observer = VisibilityObserver::new(
            &ObserverConfig::new(threshold, "0px"),
            move |_element, _crossing| {
                // A new generation abandons any in-flight runs
                let Some(run) = generation.try_read().ok().map(|g| g.wrapping_add(1)) else {
                    return;
                };
                if generation.try_write().map(|mut g| *g = run).is_err() {
                    return;
                }

                for (index, target) in targets.iter().enumerate() {
                    let animation =
                        CounterAnimation::with_duration(target.clone(), duration_ms);
                    let mut displays = displays;
                    run_counter(
                        animation,
                        move |text| {
                            let _ = displays.try_write().map(|mut all| {
                                if let Some(slot) = all.get_mut(index) {
                                    *slot = text.to_string();
                                }
                            });
                        },
                        move || generation.try_read().map(|g| *g == run).unwrap_or(false),
                    );
                }
            },
        );
        let Some(observer) = observer else {
            return;
        };
        // Persistent watch: counters restart on every re-entry
        observer.observe(&element, false);
        observer.forget();
    });

    let texts = displays();
    rsx! {
        div { id: "{id}", class: "stats-band",
            for (index, stat) in stats.iter().enumerate() {
                div { class: "stat",
                    span { class: "stat-number", "{texts.get(index).cloned().unwrap_or_default()}" }
                    span { class: "stat-label", "{stat.label}" }
                }
            }
        }
    }
}
