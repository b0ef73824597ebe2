use dioxus::prelude::*;

use crate::domain::models::NavItem;

/// Placeholder sections behind each anchor so there is something to scroll
#[component]
pub fn HomePage(items: Vec<NavItem>) -> Element {
    // (anchor id, heading); "#" alone points at the page top and has no section
    let sections: Vec<(usize, String, String)> = items
        .into_iter()
        .filter_map(|item| {
            let id = item.target.strip_prefix('#')?;
            (!id.is_empty()).then(|| (id.to_string(), item.label))
        })
        .enumerate()
        .map(|(index, (id, label))| (index, id, label))
        .collect();

    rsx! {
        main { class: "c-page",
            for (index, id, label) in sections {
                section { key: "{index}", id: "{id}", class: "c-page__section",
                    h2 { class: "c-page__title", "{label}" }
                }
            }
        }
    }
}
