//! Compile-time site settings.
//!
//! Bundler settings (app name, title, asset directory) live in `Dioxus.toml`.

use std::time::Duration;

/// Product name shown in the navbar and footer.
pub const SITE_NAME: &str = "Lumen";

/// Delay between observing an anchored route and scrolling to the anchor.
pub const SCROLL_DELAY: Duration = Duration::from_millis(100);

/// Hero image, served from the asset directory.
pub const HERO_IMAGE: &str = "/assets/hero.svg";

/// Options passed to `ThemeProvider` at the application root.
pub const DEFAULT_THEME: &str = "system";
pub const THEME_STORAGE_KEY: &str = "lumen-theme";
