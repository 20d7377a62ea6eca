//! Footer with the newsletter signup form.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use verdant_types::SiteConfig;

use crate::api;
use crate::components::{ToastSeverity, use_toast};

#[component]
pub fn Footer() -> Element {
    let config = use_context::<SiteConfig>();
    let mut toasts = use_toast();
    let mut email = use_signal(String::new);
    let mut sending = use_signal(|| false);

    let endpoints = config.endpoints.clone();
    let feedback_ms = config.timings.button_feedback_ms;

    let on_subscribe = move |evt: FormEvent| {
        evt.prevent_default();
        if *sending.peek() {
            return;
        }
        sending.set(true);
        spawn(async move {
            TimeoutFuture::new(feedback_ms).await;
            let _ = sending.try_write().map(|mut w| *w = false);
        });

        let address = email.peek().clone();
        let endpoints = endpoints.clone();
        spawn(async move {
            match api::subscribe_newsletter(&endpoints, &address).await {
                Ok(()) => {
                    toasts.show(
                        "Successfully subscribed to our newsletter!",
                        ToastSeverity::Success,
                    );
                    let _ = email.try_write().map(|mut w| w.clear());
                }
                Err(server_message) => {
                    toasts.show(
                        server_message.unwrap_or_else(|| {
                            "Failed to subscribe. Please try again.".to_string()
                        }),
                        ToastSeverity::Error,
                    );
                }
            }
        });
    };

    rsx! {
        footer { class: "footer",
            div { class: "footer-content",
                div { class: "footer-brand",
                    span { class: "footer-logo", "Verdant" }
                    p { "Organic growing, without the guesswork." }
                }
                form { class: "newsletter-form", onsubmit: on_subscribe,
                    label { r#for: "newsletter-email", "Join our newsletter" }
                    div { class: "newsletter-row",
                        input {
                            id: "newsletter-email",
                            r#type: "email",
                            placeholder: "you@example.com",
                            required: true,
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                        button {
                            r#type: "submit",
                            class: "btn-primary",
                            disabled: sending(),
                            if sending() { "Sending..." } else { "Subscribe" }
                        }
                    }
                }
            }
            div { class: "footer-meta", "© 2026 Verdant. All rights reserved." }
        }
    }
}
