//! Browser glue for the scroll-effect engine.
//!
//! `verdant-core` owns the state; these modules own the `web-sys` side:
//! intersection observers, the animation-frame driver, window scroll
//! listeners, and smooth scrolling.

pub mod observer;
pub mod raf;
pub mod reveal;
pub mod scroll;

pub use observer::VisibilityObserver;
pub use raf::run_counter;
pub use reveal::init_reveal;
pub use scroll::{scroll_to_section, use_window_scroll};
