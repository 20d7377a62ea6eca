//! Visibility dispatch bookkeeping.
//!
//! The browser's geometry observer reports raw intersection changes; this
//! module owns the per-node state those reports drive: edge detection into
//! the visible state, and release accounting for watches that must stop
//! observing after their first crossing (lazy images). Consumers that need
//! to re-fire on every re-entry (reveal animations, stat counters) register
//! persistent watches instead.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Geometry-observer configuration handed to the browser glue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObserverConfig {
    /// Fraction of the element that must be visible before a crossing fires.
    pub threshold: f64,
    /// Bounding-box inset, CSS margin syntax (e.g. `"0px 0px -50px 0px"`).
    pub root_margin: String,
}

impl ObserverConfig {
    pub fn new(threshold: f64, root_margin: &str) -> Self {
        Self {
            threshold,
            root_margin: root_margin.to_string(),
        }
    }
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self::new(0.0, "0px")
    }
}

/// Outcome of an intersection report that crossed into visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crossing {
    /// True when the watch was one-shot and has now been forgotten; the
    /// caller must unobserve the node. Guaranteed at most once per watch.
    pub release: bool,
}

#[derive(Clone, Copy, Debug)]
struct WatchEntry {
    auto_release: bool,
    visible: bool,
}

/// Per-node visibility state for one observer instance.
///
/// Crossings are edge-triggered: [`record`](Self::record) returns `Some`
/// only on a transition into visibility, never while a node stays visible
/// or when it leaves.
#[derive(Clone, Debug, Default)]
pub struct VisibilityTracker {
    watches: HashMap<u64, WatchEntry>,
}

impl VisibilityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node. Re-watching an id resets its visibility state.
    pub fn watch(&mut self, id: u64, auto_release: bool) {
        self.watches.insert(
            id,
            WatchEntry {
                auto_release,
                visible: false,
            },
        );
    }

    /// Drop a watch. Returns whether the id was watched.
    pub fn release(&mut self, id: u64) -> bool {
        self.watches.remove(&id).is_some()
    }

    pub fn is_watched(&self, id: u64) -> bool {
        self.watches.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.watches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watches.is_empty()
    }

    /// Record an intersection report for a node.
    ///
    /// Returns `Some(Crossing)` only when the node just crossed into
    /// visibility. Auto-release watches are forgotten on that crossing, so
    /// a later report for the same id is a no-op.
    pub fn record(&mut self, id: u64, visible: bool) -> Option<Crossing> {
        let entry = self.watches.get_mut(&id)?;
        if !visible {
            entry.visible = false;
            return None;
        }
        if entry.visible {
            // Still visible, not an edge
            return None;
        }
        entry.visible = true;
        if entry.auto_release {
            self.watches.remove(&id);
            Some(Crossing { release: true })
        } else {
            Some(Crossing { release: false })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossing_is_edge_triggered() {
        let mut tracker = VisibilityTracker::new();
        tracker.watch(1, false);

        assert_eq!(tracker.record(1, true), Some(Crossing { release: false }));
        // Still visible: no re-fire
        assert_eq!(tracker.record(1, true), None);
        // Leaving fires nothing
        assert_eq!(tracker.record(1, false), None);
        // Re-entering fires again for a persistent watch
        assert_eq!(tracker.record(1, true), Some(Crossing { release: false }));
    }

    #[test]
    fn test_auto_release_fires_exactly_once() {
        let mut tracker = VisibilityTracker::new();
        tracker.watch(7, true);

        assert_eq!(tracker.record(7, true), Some(Crossing { release: true }));
        assert!(!tracker.is_watched(7));
        // Even if the browser delivers another report, nothing fires
        assert_eq!(tracker.record(7, false), None);
        assert_eq!(tracker.record(7, true), None);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut tracker = VisibilityTracker::new();
        assert_eq!(tracker.record(42, true), None);
        assert!(!tracker.release(42));
    }

    #[test]
    fn test_watches_are_independent() {
        let mut tracker = VisibilityTracker::new();
        tracker.watch(1, false);
        tracker.watch(2, true);

        assert_eq!(tracker.record(2, true), Some(Crossing { release: true }));
        assert!(tracker.is_watched(1));
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.record(1, true), Some(Crossing { release: false }));
    }

    #[test]
    fn test_rewatch_resets_state() {
        let mut tracker = VisibilityTracker::new();
        tracker.watch(1, false);
        assert!(tracker.record(1, true).is_some());

        // Re-registering clears the visible bit, so the next report is an edge
        tracker.watch(1, false);
        assert!(tracker.record(1, true).is_some());
    }
}
