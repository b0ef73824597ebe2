use dioxus::prelude::*;

use crate::app::components::{Brand, MenuButton};
use crate::app::layouts::MobileMenu;
use crate::config::NavbarConfig;
use crate::shared::hooks::{use_menu, use_scroll_sample};

/// Fixed site header that condenses as the page scrolls.
///
/// At the top of the page the brand stands alone next to a compact, centered
/// link box. Scrolling down fades the brand into the box, which widens into a
/// full-width bar while the header darkens and tightens. The exact curve
/// depends on `config.profile`. Scroll and menu state are independent.
#[component]
pub fn Navbar(#[props(default)] config: NavbarConfig) -> Element {
    let current = use_scroll_sample(config.profile);
    let menu = use_menu();

    let style = config.profile.style(current.progress);

    let header_style = style.header_style();
    let wrapper_style = style.wrapper_style();
    let container_style = style.container_style();
    let links_style = style.links_style();
    let header_class = if current.is_scrolled {
        "c-navbar c-navbar--scrolled"
    } else {
        "c-navbar"
    };

    rsx! {
        header { class: "{header_class}", style: "{header_style}",
            nav { class: "c-navbar__inner",
                Brand {
                    name: config.brand.clone(),
                    class: "c-navbar__brand",
                    style: style.logo_style(),
                }

                // Desktop navigation
                div { class: "c-navbar__desktop", style: "{wrapper_style}",
                    div { class: "c-navbar__box", style: "{container_style}",
                        Brand {
                            name: config.brand.clone(),
                            class: "c-navbar__brand c-navbar__brand--inner",
                            style: style.inner_logo_style(),
                        }
                        div { class: "c-navbar__links", style: "{links_style}",
                            for (index, item) in config.items.iter().enumerate() {
                                a {
                                    key: "{index}",
                                    class: "c-navbar__link",
                                    href: "{item.target}",
                                    "{item.label}"
                                    span { class: "c-navbar__underline" }
                                }
                            }
                        }
                    }
                }

                MenuButton { menu }
            }

            MobileMenu { items: config.items.clone(), menu }
        }
    }
}
