//! Scroll-effect engine for the Verdant site.
//!
//! Host-independent state behind the behaviors the wasm frontend drives
//! through browser primitives:
//!
//! - **Visibility dispatch** ([`visibility`]): edge detection and one-shot
//!   release accounting over raw intersection reports.
//! - **Stat counters** ([`counter`]): target parsing and frame-by-frame
//!   animation state.
//! - **Testimonial rotation** ([`rotator`]): an owned carousel controller.
//!
//! Nothing in this crate touches `web-sys`; the app layer feeds timestamps
//! and intersection edges in and applies the resulting DOM effects.

pub mod counter;
pub mod rotator;
pub mod visibility;

pub use counter::{CounterAnimation, CounterFrame, CounterParseError, CounterTarget};
pub use rotator::RotatorController;
pub use visibility::{Crossing, ObserverConfig, VisibilityTracker};
