use dioxus::prelude::*;

/// Brand wordmark. Two instances exist: the stand-alone one that fades out
/// and the one inside the link container that fades in.
#[component]
pub fn Brand(name: String, class: String, style: String) -> Element {
    rsx! {
        div { class: "{class}", style: "{style}", "{name}" }
    }
}
