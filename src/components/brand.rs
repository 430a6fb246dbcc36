//! Brand logo and social links shown in the header and footer.

use dioxus::prelude::*;
use shoepro_ui::{Icon, IconKind};

pub const STORE_NAME: &str = "ShoePro Store";

/// Social profiles linked from the footer
pub const SOCIAL_LINKS: [(IconKind, &str, &str); 3] = [
    (IconKind::Instagram, "Instagram", "https://instagram.com"),
    (IconKind::Facebook, "Facebook", "https://facebook.com"),
    (IconKind::Twitter, "Twitter", "https://twitter.com"),
];

/// Text logo with the accent mark on the left
#[component]
pub fn BrandLogo(#[props(default = false)] inverted: bool) -> Element {
    rsx! {
        span { class: if inverted { "brand-logo inverted" } else { "brand-logo" },
            span { class: "brand-logo__mark", "S" }
            span { class: "brand-logo__text",
                "Shoe"
                span { class: "brand-logo__accent", "Pro" }
            }
        }
    }
}

#[component]
pub fn SocialLinks() -> Element {
    rsx! {
        div { class: "social-links",
            for (icon, label, href) in SOCIAL_LINKS {
                a {
                    key: "{label}",
                    class: "social-links__item",
                    href: "{href}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "aria-label": "{label}",
                    Icon { kind: icon, size: 18 }
                }
            }
        }
    }
}
