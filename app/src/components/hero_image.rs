//! Lazily loaded hero portrait with a placeholder fallback.

use std::sync::Arc;

use dioxus::prelude::*;

use zenith_core::render::ImageState;
use zenith_types::HeroRecord;

#[component]
pub fn HeroImage(hero: Arc<HeroRecord>) -> Element {
    let mut state = use_signal(ImageState::default);
    let current = state();
    let alt = hero.name.clone();

    let src = if current.is_fallback() {
        hero.fallback_image_url()
    } else {
        hero.image_url()
    };
    let mut style = String::from("transition: opacity 0.4s ease-in-out;");
    style.push_str(if current.is_visible() { " opacity: 1;" } else { " opacity: 0;" });
    if current.is_fallback() {
        style.push_str(" object-fit: contain; padding: 8px;");
    }

    rsx! {
        img {
            class: "hero-img",
            loading: "lazy",
            alt: "{alt}",
            src: "{src}",
            style: "{style}",
            onload: move |_| state.set(state().on_load()),
            onerror: move |_| {
                // never retry once on the placeholder
                if !state().is_fallback() {
                    state.set(state().on_error());
                }
            },
        }
    }
}
