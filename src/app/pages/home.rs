use dioxus::prelude::*;

use crate::app::components::{ContentSection, FooterSection};

/// Landing page. `section` is the URL fragment; scrolling to it is handled
/// by `ScrollToAnchor`.
#[component]
pub fn HomePage(section: String) -> Element {
    if !section.is_empty() {
        tracing::trace!(%section, "Home page opened at section");
    }

    rsx! {
        ContentSection {}
        FooterSection {}
    }
}
