//! Lucide icons as inline SVG.

use dioxus::prelude::*;

/// Icons used by the storefront
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    Search,
    Star,
    Truck,
    Shield,
    RefreshCw,
    ArrowRight,
    ShoppingCart,
    Menu,
    X,
    Plus,
    Minus,
    Trash,
    Instagram,
    Facebook,
    Twitter,
}

impl IconKind {
    /// Lucide icon name, used as a CSS hook
    pub fn name(&self) -> &'static str {
        match self {
            IconKind::Search => "search",
            IconKind::Star => "star",
            IconKind::Truck => "truck",
            IconKind::Shield => "shield",
            IconKind::RefreshCw => "refresh-cw",
            IconKind::ArrowRight => "arrow-right",
            IconKind::ShoppingCart => "shopping-cart",
            IconKind::Menu => "menu",
            IconKind::X => "x",
            IconKind::Plus => "plus",
            IconKind::Minus => "minus",
            IconKind::Trash => "trash-2",
            IconKind::Instagram => "instagram",
            IconKind::Facebook => "facebook",
            IconKind::Twitter => "twitter",
        }
    }
}

/// Inline lucide icon
#[component]
pub fn Icon(
    kind: IconKind,
    #[props(default = 20)] size: u32,
    #[props(default)] class: Option<String>,
) -> Element {
    let class = match class {
        Some(extra) => format!("icon icon-{} {}", kind.name(), extra),
        None => format!("icon icon-{}", kind.name()),
    };

    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {icon_paths(kind)}
        }
    }
}

fn icon_paths(kind: IconKind) -> Element {
    match kind {
        IconKind::Search => rsx! {
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.3-4.3" }
        },
        IconKind::Star => rsx! {
            polygon { points: "12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" }
        },
        IconKind::Truck => rsx! {
            path { d: "M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2" }
            path { d: "M15 18H9" }
            path { d: "M19 18h2a1 1 0 0 0 1-1v-3.65a1 1 0 0 0-.22-.624l-3.48-4.35A1 1 0 0 0 17.52 8H14" }
            circle { cx: "17", cy: "18", r: "2" }
            circle { cx: "7", cy: "18", r: "2" }
        },
        IconKind::Shield => rsx! {
            path { d: "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" }
        },
        IconKind::RefreshCw => rsx! {
            path { d: "M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8" }
            path { d: "M21 3v5h-5" }
            path { d: "M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16" }
            path { d: "M8 16H3v5" }
        },
        IconKind::ArrowRight => rsx! {
            path { d: "M5 12h14" }
            path { d: "m12 5 7 7-7 7" }
        },
        IconKind::ShoppingCart => rsx! {
            circle { cx: "8", cy: "21", r: "1" }
            circle { cx: "19", cy: "21", r: "1" }
            path { d: "M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12" }
        },
        IconKind::Menu => rsx! {
            line { x1: "4", x2: "20", y1: "12", y2: "12" }
            line { x1: "4", x2: "20", y1: "6", y2: "6" }
            line { x1: "4", x2: "20", y1: "18", y2: "18" }
        },
        IconKind::X => rsx! {
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        },
        IconKind::Plus => rsx! {
            path { d: "M5 12h14" }
            path { d: "M12 5v14" }
        },
        IconKind::Minus => rsx! {
            path { d: "M5 12h14" }
        },
        IconKind::Trash => rsx! {
            path { d: "M3 6h18" }
            path { d: "M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6" }
            path { d: "M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2" }
        },
        IconKind::Instagram => rsx! {
            rect { x: "2", y: "2", width: "20", height: "20", rx: "5", ry: "5" }
            path { d: "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" }
            line { x1: "17.5", x2: "17.51", y1: "6.5", y2: "6.5" }
        },
        IconKind::Facebook => rsx! {
            path { d: "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z" }
        },
        IconKind::Twitter => rsx! {
            path { d: "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.2 0 3-1.2 3-1.2z" }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_names_are_lucide_names() {
        assert_eq!(IconKind::ShoppingCart.name(), "shopping-cart");
        assert_eq!(IconKind::RefreshCw.name(), "refresh-cw");
        assert_eq!(IconKind::Trash.name(), "trash-2");
    }

    #[test]
    fn icon_renders_svg() {
        fn app() -> Element {
            rsx! { Icon { kind: IconKind::Search, size: 16 } }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("<svg"));
        assert!(html.contains("icon-search"));
        assert!(html.contains("width=\"16\""));
    }
}
