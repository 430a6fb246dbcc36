//! Input Field Components
//!
//! Text inputs for the storefront. Inputs are controlled when a `value`
//! is passed and uncontrolled otherwise (the newsletter email field).

use dioxus::prelude::*;

use super::button::merge_classes;
use super::icons::{Icon, IconKind};

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current value; `None` leaves the field uncontrolled
    #[props(default)]
    pub value: Option<String>,
    /// Called with the new value on every keystroke
    #[props(default)]
    pub oninput: Option<EventHandler<String>>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, search, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default)]
    pub aria_label: Option<String>,
    #[props(default)]
    pub id: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

/// Text input
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: email(),
///         oninput: move |s| email.set(s),
///         input_type: "email".to_string(),
///         placeholder: "Tu email".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let input_class = merge_classes("input", props.class.as_deref());

    rsx! {
        input {
            id: props.id.clone(),
            class: "{input_class}",
            r#type: "{props.input_type}",
            value: props.value.clone(),
            placeholder: props.placeholder.clone(),
            "aria-label": props.aria_label.clone(),
            oninput: move |e| {
                if let Some(handler) = &props.oninput {
                    handler.call(e.value());
                }
            },
        }
    }
}

/// Search input with a leading magnifier icon
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default = "Buscar...".to_string())]
    pub placeholder: String,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    let input_class = merge_classes("input search-input", props.class.as_deref());

    rsx! {
        div { class: "search-input-wrapper",
            span { class: "search-icon",
                Icon { kind: IconKind::Search, size: 20 }
            }
            input {
                class: "{input_class}",
                r#type: "text",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                "aria-label": "{props.placeholder}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
