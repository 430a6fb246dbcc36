//! Storefront look: palette, layout and component styles.

mod styles;

pub use styles::GLOBAL_STYLES;
