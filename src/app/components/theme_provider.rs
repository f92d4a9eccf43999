use dioxus::prelude::*;

/// Renders its children unchanged.
///
/// The options are accepted so existing call sites keep compiling; none of
/// them are applied.
#[component]
pub fn ThemeProvider(
    default_theme: Option<String>,
    storage_key: Option<String>,
    enable_system: Option<bool>,
    children: Element,
) -> Element {
    tracing::trace!(?default_theme, ?storage_key, ?enable_system, "Theme options ignored");

    rsx! { {children} }
}
