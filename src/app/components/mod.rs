//! Shared building blocks for pages: layout chrome, page sections and
//! route-level behavior.

mod content_section;
mod footer_section;
mod layout;
mod navbar;
mod offline_indicator;
mod scroll_to_anchor;
mod theme_provider;

pub use content_section::ContentSection;
pub use footer_section::{FooterSection, NavLink, FOOTER_LINKS};
pub use layout::AppLayout;
pub use navbar::Navbar;
pub use offline_indicator::OfflineIndicator;
pub use scroll_to_anchor::{use_anchor_scroll, ScrollToAnchor};
pub use theme_provider::{ThemeProvider, ThemeProviderProps};
