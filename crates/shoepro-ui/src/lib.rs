//! ShoePro UI Components
//!
//! Dioxus primitives shared by the storefront pages: buttons, inputs,
//! cards, badges and lucide icons. Components only emit markup and class
//! names; styling lives in the app's stylesheet.

pub mod components;

pub use components::*;
