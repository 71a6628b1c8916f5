//! Collapsible series row inside an expanded card.

use dioxus::prelude::*;

use zenith_core::animation::Activation;
use zenith_types::formatting::{format_delay, format_px};

use crate::state::{series_inner_id, use_page};

#[component]
pub fn SeriesRowItem(card_index: usize, card_key: String, row: usize) -> Element {
    let handle = use_page();
    let page = handle.page.read();
    let Some(series) = page
        .renderer()
        .cards()
        .get(card_index)
        .filter(|c| c.view.key == card_key)
        .and_then(|c| c.controller.series())
        .and_then(|rows| rows.get(row))
    else {
        return rsx! {};
    };

    let view = series.view().clone();
    let open = series.is_open();
    let height = format_px(series.height());
    drop(page);

    let delay = format_delay(view.stagger_ms);
    let count = view.variants.len();
    let inner_id = series_inner_id(&card_key, row);
    let click_key = card_key.clone();
    let key_key = card_key.clone();

    rsx! {
        div {
            class: "series-item",
            style: "animation-delay: {delay};",
            div {
                class: if open { "series-header active" } else { "series-header" },
                role: "button",
                tabindex: "0",
                "aria-expanded": "{open}",
                onclick: move |_| handle.toggle_series(card_index, &click_key, row),
                onkeydown: move |evt: KeyboardEvent| {
                    if Activation::from_key(&evt.key().to_string()).is_some() {
                        evt.prevent_default();
                        handle.toggle_series(card_index, &key_key, row);
                    }
                },
                span { class: "series-name", "{view.name}" }
                span { class: "series-count", "{count}" }
            }
            div {
                class: "series-content",
                style: "height: {height};",
                div { id: "{inner_id}", class: "series-content-inner",
                    for link in view.variants.iter() {
                        a {
                            class: "variant-btn",
                            href: "{link.href}",
                            target: link.target,
                            rel: link.rel,
                            "{link.name}"
                        }
                    }
                }
            }
        }
    }
}
