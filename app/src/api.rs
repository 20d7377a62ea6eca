//! Backend API client.
//!
//! Thin, type-safe wrappers around the site's JSON endpoints, centralizing
//! all backend communication. Two tiers: submit functions return the error
//! for caller display; fire-and-forget helpers absorb failures into logs.

use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use verdant_types::ApiEndpoints;

// ─────────────────────────────────────────────────────────────────────────────
// Payloads
// ─────────────────────────────────────────────────────────────────────────────

/// Contact form submission. The form's subject field doubles as company.
#[derive(Clone, Debug, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

#[derive(Serialize)]
struct NewsletterPayload<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct PageView {
    page_url: String,
    referrer: String,
}

/// Error envelope some endpoints return in their body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Helper Functions
// ─────────────────────────────────────────────────────────────────────────────

/// POST a JSON body, returning the raw response.
async fn post_json<T: Serialize + ?Sized>(
    url: &str,
    body: &T,
) -> Result<web_sys::Response, String> {
    let window = web_sys::window().ok_or("no window")?;
    let json = serde_json::to_string(body).map_err(|e| e.to_string())?;

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&json));

    let request = web_sys::Request::new_with_str_and_init(url, &init)
        .map_err(|e| format!("bad request: {e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("bad header: {e:?}"))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch failed: {e:?}"))?;
    response
        .dyn_into::<web_sys::Response>()
        .map_err(|_| "fetch returned a non-response".to_string())
}

/// Pull the `error` field out of a JSON error body, if there is one.
async fn error_message(response: &web_sys::Response) -> Option<String> {
    let promise = response.json().ok()?;
    let value = JsFuture::from(promise).await.ok()?;
    serde_wasm_bindgen::from_value::<ErrorBody>(value)
        .ok()?
        .error
}

// ─────────────────────────────────────────────────────────────────────────────
// Endpoints
// ─────────────────────────────────────────────────────────────────────────────

/// Submit the contact form.
pub async fn submit_contact(
    endpoints: &ApiEndpoints,
    payload: &ContactPayload,
) -> Result<(), String> {
    let response = post_json(&endpoints.contact, payload).await?;
    if response.ok() {
        Ok(())
    } else {
        Err(format!("contact endpoint returned {}", response.status()))
    }
}

/// Subscribe an address to the newsletter.
///
/// On failure, `Err(Some(msg))` carries the server's own error message when
/// the body had one; `Err(None)` means the caller should show generic copy.
pub async fn subscribe_newsletter(
    endpoints: &ApiEndpoints,
    email: &str,
) -> Result<(), Option<String>> {
    let response = post_json(&endpoints.newsletter, &NewsletterPayload { email })
        .await
        .map_err(|err| {
            tracing::warn!("newsletter request failed: {err}");
            None
        })?;
    if response.ok() {
        Ok(())
    } else {
        Err(error_message(&response).await)
    }
}

/// Record a page view. Failures are logged and swallowed.
pub async fn track_page_view(endpoints: &ApiEndpoints) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let page_view = PageView {
        page_url: window.location().href().unwrap_or_default(),
        referrer: document.referrer(),
    };
    if let Err(err) = post_json(&endpoints.analytics, &page_view).await {
        tracing::debug!("analytics tracking failed: {err}");
    }
}
