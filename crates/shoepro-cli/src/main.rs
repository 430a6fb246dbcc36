//! ShoePro Store CLI
//!
//! Thin wrapper around shoepro-core for browsing the catalog and managing
//! the locally saved cart from a terminal.
//!
//! ## Usage
//!
//! ```bash
//! # List collections
//! shoepro collections
//!
//! # List products, optionally filtered
//! shoepro products --collection botas --search cuero
//!
//! # Manage the cart
//! shoepro cart add runner-pro --qty 2
//! shoepro cart show
//! shoepro cart remove runner-pro
//! shoepro cart clear
//!
//! # Print the effective configuration
//! shoepro config
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shoepro_core::{
    badge_label, default_data_dir, filter_products, format_price, Cart, CartStore, Catalog,
    CollectionId, LogLevel, ProductId, StoreConfig, StoreError,
};

/// ShoePro Store - catalog and cart from the command line
#[derive(Parser)]
#[command(name = "shoepro")]
#[command(version)]
#[command(about = "ShoePro Store - catalog and cart from the command line")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data directory for config and cart (default: platform data dir)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List collections
    Collections,

    /// List active products
    Products {
        /// Only products in this collection
        #[arg(short, long)]
        collection: Option<String>,

        /// Case-insensitive search over title and description
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Cart management
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },

    /// Print the effective configuration
    Config,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and totals
    Show,

    /// Add a product to the cart
    Add {
        /// Product ID
        product_id: String,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        qty: u32,
    },

    /// Remove a product from the cart
    Remove {
        /// Product ID
        product_id: String,
    },

    /// Empty the cart
    Clear,
}

fn log_level(verbosity: u8) -> LogLevel {
    match verbosity {
        0 => LogLevel::Warn,
        1 => LogLevel::Info,
        2 => LogLevel::Debug,
        _ => LogLevel::Trace,
    }
}

/// Replace all but the last four characters of a secret.
fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), visible)
}

fn print_cart(cart: &Cart, config: &StoreConfig) {
    if cart.is_empty() {
        println!("Cart is empty.");
        return;
    }

    let symbol = &config.currency_symbol;
    println!("Cart:");
    println!();
    for item in &cart.items {
        println!(
            "  {} x{}  {}  {}",
            item.product_id,
            item.quantity,
            item.title,
            format_price(item.line_total(), symbol)
        );
    }
    println!();

    let total = cart.total_items();
    match badge_label(total) {
        Some(badge) => println!("Items: {total} (badge: {badge})"),
        None => println!("Items: {total}"),
    }
    println!("Subtotal: {}", format_price(cart.subtotal(), symbol));
    match cart.remaining_for_free_shipping(config.free_shipping_threshold) {
        Some(remaining) => println!("Free shipping in: {}", format_price(remaining, symbol)),
        None => println!("Free shipping: yes"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    shoepro_core::logging::init(log_level(cli.verbose));

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let config = StoreConfig::load(&data_dir).context("Failed to load configuration")?;
    let catalog = Catalog::from_config(&config)?;

    tracing::debug!(data_dir = %data_dir.display(), demo = catalog.is_demo(), "CLI started");

    match cli.command {
        Commands::Collections => {
            let collections = catalog.list_collections().await?;
            if collections.is_empty() {
                println!("No collections found.");
            } else {
                println!("Collections ({}):", collections.len());
                println!();
                for collection in collections {
                    let featured = if collection.featured { " [Destacado]" } else { "" };
                    println!("  {}  {}{}", collection.id, collection.name, featured);
                    if let Some(description) = collection.description_text() {
                        println!("      {}", description);
                    }
                }
            }
        }

        Commands::Products { collection, search } => {
            let selected = match collection {
                Some(id) => {
                    let id = CollectionId::new(id);
                    let collections = catalog.list_collections().await?;
                    if !collections.iter().any(|c| c.id == id) {
                        return Err(StoreError::CollectionNotFound(id.to_string()).into());
                    }
                    Some(id)
                }
                None => None,
            };

            let products = catalog.list_products().await?;
            let term = search.unwrap_or_default();
            let filtered = filter_products(&products, &term, selected.as_ref());

            if filtered.is_empty() {
                if term.trim().is_empty() {
                    println!("No hay productos disponibles");
                } else {
                    println!("No encontramos productos");
                }
            } else {
                let symbol = &config.currency_symbol;
                println!("Products ({}):", filtered.len());
                println!();
                for product in filtered {
                    let sale = match (product.compare_at_price, product.discount_percent()) {
                        (Some(original), Some(off)) => {
                            format!("  (antes {}, -{}%)", format_price(original, symbol), off)
                        }
                        _ => String::new(),
                    };
                    println!(
                        "  {}  {}  {}{}",
                        product.id,
                        product.title,
                        format_price(product.price, symbol),
                        sale
                    );
                }
            }
        }

        Commands::Cart { action } => {
            let store = CartStore::in_data_dir(&data_dir).context("Failed to open cart database")?;
            let mut cart = store.load()?;

            match action {
                CartAction::Show => print_cart(&cart, &config),

                CartAction::Add { product_id, qty } => {
                    if qty == 0 {
                        anyhow::bail!("Quantity must be at least 1");
                    }
                    let product = catalog.find_product(&ProductId::new(product_id)).await?;
                    cart.add_product(&product, qty);
                    store.save(&cart)?;
                    println!("Added {} x {}", qty, product.title);
                    println!("Items in cart: {}", cart.total_items());
                }

                CartAction::Remove { product_id } => {
                    let id = ProductId::new(product_id);
                    if cart.remove(&id) {
                        store.save(&cart)?;
                        println!("Removed {}", id);
                    } else {
                        anyhow::bail!("Product {} is not in the cart", id);
                    }
                }

                CartAction::Clear => {
                    store.clear()?;
                    println!("Cart cleared.");
                }
            }
        }

        Commands::Config => {
            println!("Data directory: {}", data_dir.display());
            match &config.backend {
                Some(backend) => {
                    println!("Backend: {}", backend.url);
                    println!("  Key: {}", mask_secret(&backend.anon_key));
                }
                None => println!("Backend: demo catalog"),
            }
            println!("Log level: {}", config.log_level);
            println!("Currency: {}", config.currency_symbol);
            println!(
                "Free shipping from: {}",
                format_price(config.free_shipping_threshold, &config.currency_symbol)
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(log_level(0), LogLevel::Warn);
        assert_eq!(log_level(1), LogLevel::Info);
        assert_eq!(log_level(2), LogLevel::Debug);
        assert_eq!(log_level(7), LogLevel::Trace);
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("abcdefgh"), "****efgh");
        assert_eq!(mask_secret("abc"), "***");
        assert_eq!(mask_secret(""), "");
    }
}
