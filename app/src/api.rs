//! Browser API module
//!
//! Thin wrappers around `fetch`, `requestAnimationFrame` and DOM lookups so
//! components never touch `web_sys` directly.

use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlElement, Response};

use zenith_core::loader::{self, HeroCollection, LoadError};
use zenith_core::timing::Millis;

// ─────────────────────────────────────────────────────────────────────────────
// Helper Functions
// ─────────────────────────────────────────────────────────────────────────────

/// Extract a readable message from a rejected promise value
fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn window() -> Result<web_sys::Window, LoadError> {
    web_sys::window().ok_or_else(|| LoadError::Network("No window".to_string()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Data Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Fetch and validate the hero collection. Called once per page session.
pub async fn fetch_heroes(url: &str) -> Result<HeroCollection, LoadError> {
    let window = window()?;
    tracing::debug!(url, "Fetching hero data");

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| LoadError::Network(js_error_message(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| LoadError::Network("fetch did not return a Response".to_string()))?;

    let status = response.status();
    let status_text = response.status_text();
    // status is checked before the body is read
    loader::check_status(status, &status_text)?;

    let text_promise = response
        .text()
        .map_err(|e| LoadError::Network(js_error_message(&e)))?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|e| LoadError::Network(js_error_message(&e)))?
        .as_string()
        .unwrap_or_default();

    loader::load_from_response(status, &status_text, &body)
}

// ─────────────────────────────────────────────────────────────────────────────
// Scheduling
// ─────────────────────────────────────────────────────────────────────────────

/// Current time on the `performance.now()` clock.
pub fn now() -> Millis {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Resolve on the next animation frame with its timestamp.
pub async fn next_frame() -> Millis {
    let promise = Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.request_animation_frame(&resolve);
        } else {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    match JsFuture::from(promise).await {
        Ok(ts) => ts.as_f64().unwrap_or_else(now),
        Err(_) => now(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DOM Access
// ─────────────────────────────────────────────────────────────────────────────

fn element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

/// Natural content height of an element, 0 if it is not in the DOM.
pub fn scroll_height(id: &str) -> f64 {
    element_by_id(id).map_or(0.0, |el| el.scroll_height() as f64)
}

/// Move keyboard focus to an element.
pub fn focus(id: &str) {
    if let Some(el) = element_by_id(id).and_then(|el| el.dyn_into::<HtmlElement>().ok()) {
        let _ = el.focus();
    }
}

/// Whether the window `load` event has already fired.
pub fn document_complete() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .is_some_and(|d| d.ready_state() == "complete")
}

/// Toggle a class on `<body>`.
pub fn set_body_class(class: &str, on: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let list = body.class_list();
    let _ = if on { list.add_1(class) } else { list.remove_1(class) };
}
