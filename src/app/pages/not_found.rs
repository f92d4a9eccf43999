use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "No route matched");

    rsx! {
        div { class: "container",
            h1 { "Page not found" }
            p { "Nothing lives at {path}." }
            Link { to: Route::HomePage { section: String::new() }, "Back home" }
        }
    }
}
