//! Reusable storefront UI primitives
//!
//! Class names map to rules in the app's global stylesheet.

mod button;
mod card;
mod icons;
mod input;

pub use button::*;
pub use card::*;
pub use icons::*;
pub use input::*;
