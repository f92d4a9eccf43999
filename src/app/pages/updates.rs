//! Updates page placeholder.

use dioxus::prelude::*;

pub(super) const HEADING: &str = "Updates";
pub(super) const BODY: &str = "Release notes and product news will be published here.";

#[component]
pub fn UpdatesPage() -> Element {
    rsx! {
        div { class: "container",
            h1 { "{HEADING}" }
            p { "{BODY}" }
        }
    }
}
