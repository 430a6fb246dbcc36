#![allow(non_snake_case)]

mod app;
mod components;
mod context;
mod headless;
mod pages;
mod templates;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use shoepro_core::{default_data_dir, CartStore, StoreConfig};

/// Startup state resolved from the command line and config file
pub struct Bootstrap {
    pub data_dir: PathBuf,
    pub config: StoreConfig,
    /// `None` when the cart database could not be opened; the cart then
    /// lives in memory only
    pub cart_store: Option<CartStore>,
}

static BOOTSTRAP: OnceLock<Bootstrap> = OnceLock::new();

/// Startup state, falling back to defaults when `main` did not run
/// (component tests).
pub fn bootstrap() -> &'static Bootstrap {
    BOOTSTRAP.get_or_init(|| Bootstrap {
        data_dir: default_data_dir(),
        config: StoreConfig::default(),
        cart_store: None,
    })
}

/// ShoePro Store - desktop storefront
#[derive(Parser, Debug)]
#[command(name = "shoepro-desktop")]
#[command(about = "ShoePro Store - tu tienda de zapatos")]
struct Args {
    /// Data directory for config and cart (default: platform data dir)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Ignore any configured backend and serve the bundled demo catalog
    #[arg(long)]
    demo: bool,
}

fn main() {
    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    let mut config = match StoreConfig::load(&data_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration ({e}), using defaults");
            StoreConfig::default()
        }
    };
    if args.demo {
        config.backend = None;
    }

    shoepro_core::logging::init(config.log_level);

    let cart_store = match CartStore::in_data_dir(&data_dir) {
        Ok(store) => Some(store),
        Err(e) => {
            tracing::error!(error = %e, "Failed to open cart database, cart will not persist");
            None
        }
    };

    tracing::info!(data_dir = %data_dir.display(), demo = config.backend.is_none(), "Starting ShoePro Store");

    let _ = BOOTSTRAP.set(Bootstrap {
        data_dir,
        config,
        cart_store,
    });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("ShoePro Store")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
