//! Card container and badges

use dioxus::prelude::*;

use super::button::merge_classes;

#[component]
pub fn Card(children: Element, #[props(default)] class: Option<String>) -> Element {
    let class = merge_classes("card", class.as_deref());

    rsx! {
        div { class: "{class}", {children} }
    }
}

#[component]
pub fn CardContent(children: Element, #[props(default)] class: Option<String>) -> Element {
    let class = merge_classes("card-content", class.as_deref());

    rsx! {
        div { class: "{class}", {children} }
    }
}

/// Badge colour
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeTone {
    /// Brand yellow on black text
    #[default]
    Accent,
    /// Red, used for discounts
    Sale,
    /// Small round counter on icons
    Counter,
}

impl BadgeTone {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeTone::Accent => "badge badge-accent",
            BadgeTone::Sale => "badge badge-sale",
            BadgeTone::Counter => "badge badge-counter",
        }
    }
}

/// Small pill label ("Destacado", "-20%", cart count)
#[component]
pub fn Badge(
    children: Element,
    #[props(default)] tone: BadgeTone,
    #[props(default)] class: Option<String>,
) -> Element {
    let class = merge_classes(tone.class(), class.as_deref());

    rsx! {
        span { class: "{class}", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_tone_classes() {
        assert_eq!(BadgeTone::default().class(), "badge badge-accent");
        assert_eq!(BadgeTone::Sale.class(), "badge badge-sale");
        assert_eq!(BadgeTone::Counter.class(), "badge badge-counter");
    }

    #[test]
    fn card_wraps_children() {
        fn app() -> Element {
            rsx! {
                Card { class: "hover-lift".to_string(),
                    CardContent { "hola" }
                }
            }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("class=\"card hover-lift\""));
        assert!(html.contains("class=\"card-content\""));
        assert!(html.contains("hola"));
    }
}
