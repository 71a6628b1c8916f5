//! Document and window listeners that live for the whole page session.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, KeyboardEvent};

use zenith_core::page::is_search_shortcut;

use crate::api;
use crate::state::PageHandle;

/// DOM id of the search input.
pub const SEARCH_INPUT_ID: &str = "search";

/// Install the global listeners. Called once from the app root.
pub fn install(handle: PageHandle) {
    let Some(window) = web_sys::window() else {
        return;
    };

    // Ctrl/Cmd + K focuses search
    if let Some(document) = window.document() {
        let closure = Closure::<dyn Fn(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if is_search_shortcut(&event.key(), event.ctrl_key(), event.meta_key()) {
                event.prevent_default();
                api::focus(SEARCH_INPUT_ID);
            }
        });
        let _ = document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Page loader: hide shortly after window load, fallback timer covers the rest
    if api::document_complete() {
        handle.window_loaded();
    } else {
        let closure = Closure::<dyn Fn(web_sys::Event)>::new(move |_event: web_sys::Event| {
            handle.window_loaded();
        });
        let _ = window.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Throttled, passive scroll hook
    let closure = Closure::<dyn Fn(web_sys::Event)>::new(move |_event: web_sys::Event| {
        handle.scrolled();
    });
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();

    // Drop pending timers on unload
    let closure = Closure::<dyn Fn(web_sys::Event)>::new(move |_event: web_sys::Event| {
        handle.teardown();
    });
    let _ = window.add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref());
    closure.forget();
}
