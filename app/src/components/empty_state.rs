//! Empty-results and load-error presenter.

use dioxus::prelude::*;

use zenith_core::page::{EmptyContent, LOAD_FAILED_HEADING};

use crate::state::use_page;

#[component]
pub fn EmptyStateView() -> Element {
    let handle = use_page();
    let page = handle.page.read();
    let visible = page.visibility().empty_state;
    let content = page.empty_state().content.clone();
    drop(page);

    rsx! {
        div {
            id: "emptyState",
            class: "empty-state",
            style: if visible { "display: block;" } else { "display: none;" },
            match content {
                EmptyContent::Error { message } => rsx! {
                    svg {
                        class: "empty-icon error",
                        width: "48",
                        height: "48",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        circle { cx: "12", cy: "12", r: "10" }
                        line { x1: "12", y1: "8", x2: "12", y2: "12" }
                        line { x1: "12", y1: "16", x2: "12.01", y2: "16" }
                    }
                    h3 { "{LOAD_FAILED_HEADING}" }
                    p { "{message}" }
                },
                EmptyContent::NoResults => rsx! {
                    h3 { "No heroes found" }
                    p { "Try a different search term or role." }
                },
            }
        }
    }
}
