use dioxus::prelude::*;

use crate::domain::models::{menu_item_delay_ms, NavItem};
use crate::shared::hooks::UseMenuReturn;

/// Dropdown shown below the header on small screens while the menu is open.
/// Following any link closes it.
#[component]
pub fn MobileMenu(items: Vec<NavItem>, menu: UseMenuReturn) -> Element {
    let mut menu = menu;

    if !menu.is_open() {
        return rsx! {};
    }

    let entries: Vec<(usize, NavItem, String)> = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let delay = format!("animation-delay: {}ms;", menu_item_delay_ms(index));
            (index, item, delay)
        })
        .collect();

    rsx! {
        div { class: "c-mobile-menu",
            div { class: "c-mobile-menu__list",
                for (index, item, delay) in entries {
                    a {
                        key: "{index}",
                        class: "c-mobile-menu__link",
                        href: "{item.target}",
                        style: "{delay}",
                        onclick: move |_| menu.close(),
                        span { class: "c-mobile-menu__label", "{item.label}" }
                        span { class: "c-mobile-menu__marker" }
                    }
                }
            }
        }
    }
}
