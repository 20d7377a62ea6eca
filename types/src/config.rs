//! Site-wide configuration.
//!
//! All timing constants and endpoint paths live here so the effect engine
//! and the UI never hardcode them twice. Every field has a serde default,
//! so a partial config deserializes cleanly.

use serde::{Deserialize, Serialize};

/// Timing and geometry settings for the scroll-effect engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectTimings {
    /// Counter animation duration in milliseconds.
    pub counter_duration_ms: f64,
    /// Testimonial rotation period in milliseconds.
    pub rotation_interval_ms: u32,
    /// Intersection threshold for reveal animations.
    pub reveal_threshold: f64,
    /// Root margin for the reveal observer (CSS margin syntax).
    pub reveal_root_margin: String,
    /// Intersection threshold for stat counter bands.
    pub stats_threshold: f64,
    /// Scroll offset in pixels past which the navbar switches styling.
    pub navbar_scroll_px: f64,
    /// Parallax speed factor applied to the hero background.
    pub parallax_speed: f64,
    /// Toast auto-dismiss delay in milliseconds.
    pub toast_duration_ms: u32,
    /// How long button feedback states ("Added!", "Sending...") persist.
    pub button_feedback_ms: u32,
}

impl Default for EffectTimings {
    fn default() -> Self {
        Self {
            counter_duration_ms: 2000.0,
            rotation_interval_ms: 5000,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            stats_threshold: 0.5,
            navbar_scroll_px: 50.0,
            parallax_speed: 0.5,
            toast_duration_ms: 5000,
            button_feedback_ms: 2000,
        }
    }
}

/// Backend endpoint paths, relative to the site origin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiEndpoints {
    pub contact: String,
    pub newsletter: String,
    pub analytics: String,
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self {
            contact: "/api/contact".to_string(),
            newsletter: "/api/newsletter".to_string(),
            analytics: "/api/analytics/track".to_string(),
        }
    }
}

/// Top-level configuration handed to the app at startup.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub timings: EffectTimings,
    pub endpoints: ApiEndpoints,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.timings.counter_duration_ms, 2000.0);
        assert_eq!(cfg.timings.rotation_interval_ms, 5000);
        assert_eq!(cfg.timings.reveal_root_margin, "0px 0px -50px 0px");
        assert_eq!(cfg.endpoints.contact, "/api/contact");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let cfg: SiteConfig =
            serde_json::from_str(r#"{"timings": {"rotation_interval_ms": 8000}}"#).unwrap();
        assert_eq!(cfg.timings.rotation_interval_ms, 8000);
        // Untouched fields keep their defaults
        assert_eq!(cfg.timings.counter_duration_ms, 2000.0);
        assert_eq!(cfg.endpoints.newsletter, "/api/newsletter");
    }
}
