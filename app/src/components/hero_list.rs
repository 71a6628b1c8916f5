//! Card list container.

use dioxus::prelude::*;

use crate::components::hero_card::HeroCard;
use crate::state::use_page;

/// The list container. Keys change with every render pass, so Dioxus drops
/// all previous card nodes instead of reusing them.
#[component]
pub fn HeroList() -> Element {
    let handle = use_page();
    let page = handle.page.read();
    let visible = page.visibility().list;
    let cards: Vec<(usize, String)> = page
        .renderer()
        .cards()
        .iter()
        .map(|c| (c.view.index, c.view.key.clone()))
        .collect();
    drop(page);

    rsx! {
        div {
            id: "listWrap",
            class: "hero-list",
            style: if visible { "display: block;" } else { "display: none;" },
            for (index, card_key) in cards {
                HeroCard { key: "{card_key}", index, card_key: card_key.clone() }
            }
        }
    }
}
