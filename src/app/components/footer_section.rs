use dioxus::prelude::*;

use crate::config::SITE_NAME;

/// One entry of the footer link list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub title: &'static str,
    pub href: &'static str,
    /// Opens in a new tab with a full navigation instead of a router link.
    pub external: bool,
}

pub const FOOTER_LINKS: [NavLink; 6] = [
    NavLink { title: "Blog", href: "/blog", external: false },
    NavLink { title: "Careers", href: "/careers", external: false },
    NavLink { title: "Security", href: "/security", external: false },
    NavLink { title: "Updates", href: "/updates", external: false },
    NavLink { title: "GitHub", href: "https://github.com/lumen-labs", external: true },
    NavLink { title: "Status", href: "https://status.lumen.dev", external: true },
];

#[component]
pub fn FooterSection() -> Element {
    rsx! {
        footer { class: "site-footer container",
            nav {
                ul {
                    for link in FOOTER_LINKS {
                        li { key: "{link.href}",
                            FooterLink { link }
                        }
                    }
                }
            }
            small { "© {SITE_NAME}" }
        }
    }
}

#[component]
fn FooterLink(link: NavLink) -> Element {
    if link.external {
        rsx! {
            a {
                href: link.href,
                target: "_blank",
                rel: "noopener noreferrer",
                {link.title}
            }
        }
    } else {
        rsx! {
            Link { to: link.href, {link.title} }
        }
    }
}
