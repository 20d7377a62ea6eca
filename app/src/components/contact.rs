//! Contact form section.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use verdant_types::SiteConfig;

use crate::api::{self, ContactPayload};
use crate::components::{ToastSeverity, use_toast};

#[component]
pub fn ContactSection() -> Element {
    let config = use_context::<SiteConfig>();
    let mut toasts = use_toast();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut sending = use_signal(|| false);

    let endpoints = config.endpoints.clone();
    let feedback_ms = config.timings.button_feedback_ms;

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if *sending.peek() {
            return;
        }
        sending.set(true);
        // The loading state reverts on a fixed delay, independent of the
        // request outcome
        spawn(async move {
            TimeoutFuture::new(feedback_ms).await;
            let _ = sending.try_write().map(|mut w| *w = false);
        });

        let payload = ContactPayload {
            name: name.peek().clone(),
            email: email.peek().clone(),
            // The subject field doubles as company on the backend
            company: subject.peek().clone(),
            message: message.peek().clone(),
        };
        let endpoints = endpoints.clone();
        spawn(async move {
            match api::submit_contact(&endpoints, &payload).await {
                Ok(()) => {
                    toasts.show(
                        "Message sent successfully! We'll get back to you soon.",
                        ToastSeverity::Success,
                    );
                    let _ = name.try_write().map(|mut w| w.clear());
                    let _ = email.try_write().map(|mut w| w.clear());
                    let _ = subject.try_write().map(|mut w| w.clear());
                    let _ = message.try_write().map(|mut w| w.clear());
                }
                Err(err) => {
                    tracing::warn!("contact submit failed: {err}");
                    toasts.show(
                        "Failed to send message. Please try again.",
                        ToastSeverity::Error,
                    );
                }
            }
        });
    };

    rsx! {
        section { id: "contact", class: "contact",
            h2 { class: "section-title", "data-aos": "fade-up", "Get in Touch" }
            form { class: "contact-form", "data-aos": "fade-up", onsubmit: on_submit,
                div { class: "form-row",
                    input {
                        r#type: "text",
                        placeholder: "Your Name",
                        required: true,
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    input {
                        r#type: "email",
                        placeholder: "Your Email",
                        required: true,
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                input {
                    r#type: "text",
                    placeholder: "Company",
                    value: "{subject}",
                    oninput: move |evt| subject.set(evt.value()),
                }
                textarea {
                    placeholder: "How can we help?",
                    rows: 5,
                    required: true,
                    value: "{message}",
                    oninput: move |evt| message.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    class: "btn-primary",
                    disabled: sending(),
                    if sending() { "Sending..." } else { "Send Message" }
                }
            }
        }
    }
}
