//! Blog page placeholder.

use dioxus::prelude::*;

pub(super) const HEADING: &str = "Blog";
pub(super) const BODY: &str = "Stories from the team are on their way. Check back soon.";

#[component]
pub fn BlogPage() -> Element {
    rsx! {
        div { class: "container",
            h1 { "{HEADING}" }
            p { "{BODY}" }
        }
    }
}
