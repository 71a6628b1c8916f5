//! Zenith hero browser
//!
//! Loads the hero collection, renders it as expandable cards and lets the
//! user filter by role and search text.

use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

mod api;
mod components;
mod listeners;
mod state;

use components::{EmptyStateView, FilterBar, HeroList, LoadingSkeleton, PageLoaderView};
use state::use_page_provider;
use zenith_core::PageConfig;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // fails only if a global subscriber is already set
    let _ = dioxus_logger::init(Level::INFO);
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let handle = use_page_provider(PageConfig::default());

    use_effect(move || listeners::install(handle));

    use_future(move || async move {
        handle.bootstrap().await;
    });

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        PageLoaderView {}
        main { class: "page",
            header { class: "page-header",
                h1 { "Heroes" }
                FilterBar {}
            }
            LoadingSkeleton {}
            EmptyStateView {}
            HeroList {}
        }
    }
}
