use dioxus::prelude::*;

use super::{Navbar, OfflineIndicator, ScrollToAnchor};
use crate::app::Route;

/// Page chrome around the routed page.
#[component]
pub fn AppLayout() -> Element {
    rsx! {
        Navbar {}
        OfflineIndicator {}
        ScrollToAnchor {}

        main { class: "container",
            Outlet::<Route> {}
        }
    }
}
