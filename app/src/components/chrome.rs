//! Loading skeleton and full-page loader.

use dioxus::prelude::*;

use zenith_types::formatting::format_millis;

use crate::state::use_page;

/// Placeholder cards shown while the collection is in flight.
#[component]
pub fn LoadingSkeleton() -> Element {
    let handle = use_page();
    let (loading, fade_ms) = {
        let page = handle.page.read();
        (page.loading(), page.config().loading_fade_ms)
    };
    let fade = format_millis(fade_ms as f64);
    let display = if loading.is_displayed() { "block" } else { "none" };
    let opacity = loading.opacity();

    rsx! {
        div {
            id: "loading",
            class: "loading-skeleton",
            style: "display: {display}; opacity: {opacity}; transition: opacity {fade} ease;",
            for i in 0..3 {
                div { key: "{i}", class: "skeleton-card" }
            }
        }
    }
}

#[component]
pub fn PageLoaderView() -> Element {
    let handle = use_page();
    let hidden = handle.page.read().page_loader().is_hidden();

    rsx! {
        div { class: if hidden { "page-loader hide" } else { "page-loader" },
            div { class: "spinner" }
        }
    }
}
