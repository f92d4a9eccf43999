//! Security page placeholder.

use dioxus::prelude::*;

pub(super) const HEADING: &str = "Security";
pub(super) const BODY: &str = "Found a vulnerability? Write to security@lumen.dev and we will respond within two business days.";

#[component]
pub fn SecurityPage() -> Element {
    rsx! {
        div { class: "container",
            h1 { "{HEADING}" }
            p { "{BODY}" }
        }
    }
}
