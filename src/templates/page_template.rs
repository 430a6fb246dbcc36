//! Bare page frame: header slot, main content, footer slot.

use dioxus::prelude::*;

/// Width behaviour of the main content area
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PageLayout {
    /// Content handles its own containers
    #[default]
    Default,
    /// Edge to edge, no horizontal padding
    FullWidth,
    /// Narrow centered column
    Centered,
}

impl PageLayout {
    pub fn class(&self) -> &'static str {
        match self {
            PageLayout::Default => "page-main",
            PageLayout::FullWidth => "page-main page-main--full",
            PageLayout::Centered => "page-main page-main--centered",
        }
    }
}

#[component]
pub fn PageTemplate(
    header: Element,
    footer: Element,
    children: Element,
    #[props(default)] class: String,
    #[props(default)] layout: PageLayout,
) -> Element {
    let page_class = match class.trim() {
        "" => "page".to_string(),
        extra => format!("page {extra}"),
    };

    rsx! {
        div { class: "{page_class}",
            header { class: "page-header", {header} }
            main { class: layout.class(), {children} }
            footer { class: "page-footer", {footer} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_classes() {
        assert_eq!(PageLayout::default().class(), "page-main");
        assert_eq!(PageLayout::FullWidth.class(), "page-main page-main--full");
        assert_eq!(PageLayout::Centered.class(), "page-main page-main--centered");
    }

    #[test]
    fn renders_slots_in_order() {
        fn app() -> Element {
            rsx! {
                PageTemplate {
                    header: rsx! { span { "cabecera" } },
                    footer: rsx! { span { "pie" } },
                    layout: PageLayout::Centered,
                    p { "contenido" }
                }
            }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        let header = html.find("cabecera").unwrap();
        let body = html.find("contenido").unwrap();
        let footer = html.find("pie").unwrap();
        assert!(header < body && body < footer);
        assert!(html.contains("page-main--centered"));
    }
}
