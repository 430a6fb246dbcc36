//! Page templates shared by every storefront route.

mod ecommerce_template;
mod page_template;

pub use ecommerce_template::{
    legal_links, main_links, service_links, CartBadge, EcommerceTemplate, NavLink,
};
pub use page_template::{PageLayout, PageTemplate};
