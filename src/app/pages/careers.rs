//! Careers page placeholder.

use dioxus::prelude::*;

pub(super) const HEADING: &str = "Careers";
pub(super) const BODY: &str = "We are not hiring right now, but we would still like to hear from you.";

#[component]
pub fn CareersPage() -> Element {
    rsx! {
        div { class: "container",
            h1 { "{HEADING}" }
            p { "{BODY}" }
        }
    }
}
