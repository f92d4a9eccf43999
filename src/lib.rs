//! Lumen marketing site.
//!
//! A Dioxus web front-end: static content pages, a layout shell, a footer
//! with navigation links and a scroll-to-anchor observer.

pub mod anchor;
pub mod app;
pub mod config;
pub mod error;

pub use error::{Result, SiteError};
