//! Marketing copy shown on the home page.
//!
//! Section ids are stable so that links like `/#pricing` can target them.

use dioxus::prelude::*;

use crate::app::Route;
use crate::config::{HERO_IMAGE, SITE_NAME};

#[component]
pub fn ContentSection() -> Element {
    rsx! {
        section { class: "hero",
            div {
                h1 { "See every release before your users do" }
                p {
                    "{SITE_NAME} watches your deploys, flags regressions within seconds "
                    "and tells the right people in plain language."
                }
                Link { to: Route::UpdatesPage {}, "Read the latest updates" }
                " "
                Link {
                    to: Route::HomePage { section: "pricing".to_string() },
                    "See pricing"
                }
            }
            img {
                src: HERO_IMAGE,
                alt: "{SITE_NAME} dashboard",
                width: "640",
                height: "360",
                "loading": "lazy",
            }
        }

        section { id: "features",
            h2 { "Features" }
            ul {
                li { "Release health at a glance, per service and per region." }
                li { "Alerts that group related failures instead of paging twice." }
                li { "A timeline that lines up deploys, incidents and fixes." }
            }
        }

        section { id: "pricing",
            h2 { "Pricing" }
            p { "Free for small teams. Paid plans start when you need more than five services." }
        }
    }
}
