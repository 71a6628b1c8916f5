//! A single hero card with its expandable variant region.

use dioxus::prelude::*;

use zenith_core::animation::{Activation, RegionHeight, RegionStyle};
use zenith_types::formatting::{format_delay, format_px};

use crate::components::hero_image::HeroImage;
use crate::components::series_row::SeriesRowItem;
use crate::state::{expanded_id, use_page};

fn region_css(region: RegionStyle) -> String {
    let mut css = String::new();
    css.push_str(if region.displayed { "display: block;" } else { "display: none;" });
    match region.height {
        RegionHeight::Unset => {}
        RegionHeight::Px(h) => {
            css.push_str(" height: ");
            css.push_str(&format_px(h));
            css.push(';');
        }
        RegionHeight::Auto => css.push_str(" height: auto;"),
    }
    if region.clipped {
        css.push_str(" overflow: hidden;");
    }
    css
}

#[component]
pub fn HeroCard(index: usize, card_key: String) -> Element {
    let handle = use_page();
    let page = handle.page.read();
    // the list may already belong to a newer pass
    let Some(card) = page
        .renderer()
        .cards()
        .get(index)
        .filter(|c| c.view.key == card_key)
    else {
        return rsx! {};
    };

    let hero = card.view.hero.clone();
    let name = card.view.name().to_string();
    let description = card.view.description().to_string();
    let delay = format_delay(card.view.stagger_ms);
    let open = card.controller.is_open();
    let chevron_active = card.controller.chevron_active();
    let region = card.controller.region();
    let rows: Vec<usize> = card
        .controller
        .series()
        .map(|rows| rows.iter().map(|r| r.view().index).collect())
        .unwrap_or_default();
    drop(page);

    let region_id = expanded_id(&card_key);
    let region_style = region_css(region);

    rsx! {
        article {
            class: "hero-card",
            style: "animation-delay: {delay};",
            div { class: "hero-card-main",
                HeroImage { hero }
                div { class: "hero-info",
                    h3 { class: "hero-name", "{name}" }
                    p { class: "hero-desc", "{description}" }
                }
                button {
                    class: if chevron_active { "chevron-btn active" } else { "chevron-btn" },
                    "aria-expanded": "{open}",
                    "aria-controls": "{region_id}",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        handle.toggle_card(index, Activation::Pointer);
                    },
                    onkeydown: move |evt: KeyboardEvent| {
                        if let Some(activation) = Activation::from_key(&evt.key().to_string()) {
                            evt.prevent_default();
                            handle.toggle_card(index, activation);
                        }
                    },
                    span { class: "chevron", "▾" }
                }
            }
            div {
                id: "{region_id}",
                class: if region.show { "expanded-area show" } else { "expanded-area" },
                style: "{region_style}",
                if !rows.is_empty() {
                    div { class: "variants-grid",
                        for row in rows {
                            SeriesRowItem {
                                key: "{row}",
                                card_index: index,
                                card_key: card_key.clone(),
                                row,
                            }
                        }
                    }
                }
            }
        }
    }
}
