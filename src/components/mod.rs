//! UI Components for the ShoePro storefront.

mod brand;
mod collection_card;
mod floating_cart;
mod product_card;

pub use brand::{BrandLogo, SocialLinks, STORE_NAME};
pub use collection_card::CollectionCard;
pub use floating_cart::FloatingCart;
pub use product_card::ProductCard;
