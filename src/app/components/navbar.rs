use dioxus::prelude::*;

use crate::app::Route;
use crate::config::SITE_NAME;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        header { class: "container",
            nav { class: "navbar",
                Link { to: Route::HomePage { section: String::new() }, strong { "{SITE_NAME}" } }
                ul {
                    li { Link { to: Route::BlogPage {}, active_class: "active".to_string(), "Blog" } }
                    li { Link { to: Route::CareersPage {}, active_class: "active".to_string(), "Careers" } }
                    li { Link { to: Route::SecurityPage {}, active_class: "active".to_string(), "Security" } }
                    li { Link { to: Route::UpdatesPage {}, active_class: "active".to_string(), "Updates" } }
                }
            }
        }
    }
}
