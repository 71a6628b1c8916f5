//! Search box and role selector buttons.

use dioxus::prelude::*;

use zenith_core::animation::Activation;

use crate::listeners::SEARCH_INPUT_ID;
use crate::state::use_page;

/// Button label for a role id ("tank" -> "Tank").
fn role_label(role: &str) -> String {
    let mut chars = role.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
pub fn FilterBar() -> Element {
    let handle = use_page();
    let (roles, active) = {
        let page = handle.page.read();
        (page.config().roles.clone(), page.role().as_str().to_string())
    };

    rsx! {
        div { class: "filter-bar",
            input {
                id: SEARCH_INPUT_ID,
                class: "search-input",
                r#type: "search",
                placeholder: "Search heroes... (Ctrl+K)",
                autocomplete: "off",
                oninput: move |evt: FormEvent| handle.search_input(evt.value()),
            }
            div { class: "role-filters", role: "group",
                for role in roles {
                    RoleButton {
                        key: "{role}",
                        active: role.eq_ignore_ascii_case(&active),
                        role: role.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn RoleButton(role: String, active: bool) -> Element {
    let handle = use_page();
    let label = role_label(&role);
    let on_click_role = role.clone();
    let on_key_role = role.clone();

    rsx! {
        button {
            class: if active { "role-btn active" } else { "role-btn" },
            "data-role": "{role}",
            "aria-pressed": "{active}",
            onclick: move |_| handle.select_role(&on_click_role),
            onkeydown: move |evt: KeyboardEvent| {
                if Activation::from_key(&evt.key().to_string()).is_some() {
                    evt.prevent_default();
                    handle.select_role(&on_key_role);
                }
            },
            "{label}"
        }
    }
}
