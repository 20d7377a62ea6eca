//! UI Components
//!
//! One module per page section plus the shared toast and lazy-image
//! building blocks.

pub mod contact;
pub mod footer;
pub mod hero;
pub mod lazy_image;
pub mod navbar;
pub mod products;
pub mod stats;
pub mod testimonials;
pub mod toast;

pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::Hero;
pub use lazy_image::LazyImage;
pub use navbar::Navbar;
pub use products::Products;
pub use stats::StatsBand;
pub use testimonials::Testimonials;
pub use toast::{ToastFrame, ToastManager, ToastSeverity, use_toast, use_toast_provider};
