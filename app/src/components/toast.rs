//! Toast notification system for displaying user-facing messages.
//!
//! Provides a global toast manager accessible via context, with auto-dismiss
//! and manual close functionality.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use verdant_types::SiteConfig;

/// Most toasts shown at once; the oldest is dropped past this.
const MAX_TOASTS: usize = 5;

/// Severity level for toast notifications.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Error,
    Info,
}

/// A single toast notification.
#[derive(Clone)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub severity: ToastSeverity,
}

/// Global toast manager for showing notifications.
///
/// Access via `use_toast()` from any component.
#[derive(Clone, Copy)]
pub struct ToastManager {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u32>,
    duration_ms: u32,
}

impl ToastManager {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            toasts: Signal::new(vec![]),
            next_id: Signal::new(0),
            duration_ms,
        }
    }

    /// Show a toast that auto-dismisses after the configured delay.
    pub fn show(&mut self, message: impl Into<String>, severity: ToastSeverity) {
        let id = *self.next_id.peek();
        *self.next_id.write() += 1;

        {
            let mut toasts = self.toasts.write();
            if toasts.len() >= MAX_TOASTS {
                toasts.remove(0);
            }
            toasts.push(Toast {
                id,
                message: message.into(),
                severity,
            });
        }

        let mut toasts_signal = self.toasts;
        let duration = self.duration_ms;
        spawn(async move {
            TimeoutFuture::new(duration).await;
            let _ = toasts_signal
                .try_write()
                .map(|mut w| w.retain(|t| t.id != id));
        });
    }

    /// Manually dismiss a toast by ID.
    pub fn dismiss(&mut self, id: u32) {
        self.toasts.write().retain(|t| t.id != id);
    }
}

/// Initialize the toast provider at the app root.
///
/// Call this once in your App component before any children that might use
/// toasts. Requires the `SiteConfig` context to already be provided.
pub fn use_toast_provider() -> ToastManager {
    let config = use_context::<SiteConfig>();
    use_context_provider(|| ToastManager::new(config.timings.toast_duration_ms))
}

/// Get the toast manager from context.
pub fn use_toast() -> ToastManager {
    use_context::<ToastManager>()
}

/// Toast container component - renders all active toasts.
///
/// Place this once at the end of the main layout.
#[component]
pub fn ToastFrame() -> Element {
    let mut manager = use_toast();
    let toasts = manager.toasts.read();

    rsx! {
        div { class: "toast-container",
            for toast in toasts.iter() {
                div {
                    key: "{toast.id}",
                    class: match toast.severity {
                        ToastSeverity::Success => "toast toast-success",
                        ToastSeverity::Error => "toast toast-error",
                        ToastSeverity::Info => "toast",
                    },
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-close",
                        onclick: {
                            let id = toast.id;
                            move |_| manager.dismiss(id)
                        },
                        "X"
                    }
                }
            }
        }
    }
}
