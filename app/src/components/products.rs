//! Product grid: lazy images, hover lift, add-to-cart feedback.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use verdant_types::SiteConfig;

use crate::components::{LazyImage, ToastSeverity, use_toast};
use crate::types::{PRODUCTS, ProductSpec};

#[component]
pub fn Products() -> Element {
    rsx! {
        section { id: "products", class: "products",
            h2 { class: "section-title", "data-aos": "fade-up", "Our Products" }
            div { class: "product-grid",
                for (index, product) in PRODUCTS.iter().enumerate() {
                    ProductCard { index, product: *product }
                }
            }
        }
    }
}

#[component]
fn ProductCard(index: usize, product: ProductSpec) -> Element {
    let config = use_context::<SiteConfig>();
    let mut toasts = use_toast();
    let mut hovered = use_signal(|| false);
    let mut added = use_signal(|| false);
    let feedback_ms = config.timings.button_feedback_ms;

    let card_style = if hovered() {
        "transform: translateY(-10px) scale(1.02)"
    } else {
        "transform: translateY(0) scale(1)"
    };

    rsx! {
        div {
            class: "product-card",
            "data-aos": "fade-up",
            style: "{card_style}",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            LazyImage {
                id: "product-image-{index}",
                src: "{product.image}",
                alt: "{product.title}",
                class: "product-image",
            }
            h3 { class: "product-title", "{product.title}" }
            p { class: "product-description", "{product.description}" }
            div { class: "product-footer",
                span { class: "product-price", "{product.price}" }
                button {
                    class: "btn-product",
                    disabled: added(),
                    onclick: move |_| {
                        if *added.peek() {
                            return;
                        }
                        toasts.show(
                            format!("{} added to cart!", product.title),
                            ToastSeverity::Success,
                        );
                        added.set(true);
                        spawn(async move {
                            TimeoutFuture::new(feedback_ms).await;
                            let _ = added.try_write().map(|mut w| *w = false);
                        });
                    },
                    if added() { "Added!" } else { "Add to Cart" }
                }
            }
        }
    }
}
