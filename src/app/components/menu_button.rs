use dioxus::prelude::*;

use crate::shared::hooks::UseMenuReturn;

/// Hamburger button for small screens; turns into an "X" while the menu is open
#[component]
pub fn MenuButton(menu: UseMenuReturn) -> Element {
    let mut menu = menu;
    let open = menu.is_open();
    let icon_path = menu.icon_path();

    rsx! {
        div { class: "c-navbar__menu-toggle",
            button {
                class: "c-menu-button",
                aria_label: "Toggle menu",
                aria_expanded: "{open}",
                onclick: move |_| menu.toggle(),
                svg {
                    class: "c-menu-button__icon",
                    fill: "none",
                    stroke: "currentColor",
                    view_box: "0 0 24 24",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: "{icon_path}",
                    }
                }
            }
        }
    }
}
