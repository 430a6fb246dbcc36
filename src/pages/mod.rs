//! Page components for the ShoePro storefront.

mod collections;
mod index;
mod index_ui;
mod info;
mod not_found;
mod offers;

pub use collections::Collections;
pub use index::{CollectionProducts, Index};
pub use index_ui::IndexUI;
pub use info::{Blog, Contacto, Devoluciones, Envios, Privacidad, Tallas, Terminos};
pub use not_found::NotFound;
pub use offers::Ofertas;
