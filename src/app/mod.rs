//! Dioxus application entry point.
//!
//! `App` wraps the router in the theme provider; every route renders inside
//! `AppLayout`.

use dioxus::prelude::*;

pub mod components;
pub mod pages;

use crate::anchor::Location;
use crate::config::{DEFAULT_THEME, THEME_STORAGE_KEY};
use components::{AppLayout, ThemeProvider};
use pages::{BlogPage, CareersPage, HomePage, NotFound, SecurityPage, UpdatesPage};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Root app component with routing
#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ThemeProvider {
            default_theme: DEFAULT_THEME.to_string(),
            storage_key: THEME_STORAGE_KEY.to_string(),
            enable_system: true,
            Router::<Route> {}
        }
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/#:section")]
        HomePage { section: String },
        #[route("/blog")]
        BlogPage {},
        #[route("/careers")]
        CareersPage {},
        #[route("/security")]
        SecurityPage {},
        #[route("/updates")]
        UpdatesPage {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Path and fragment this route navigates to.
    pub fn location(&self) -> Location {
        Location::parse(&self.to_string())
    }
}
