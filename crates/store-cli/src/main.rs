//! # shelf-rs storefront
//!
//! ## Usage
//!
//! ```bash
//! # Optional settings
//! export STORE_NAME="Best Buy"
//! export CATALOG_PATH=config/catalog.toml
//! export RUST_LOG=store_core=debug
//!
//! store
//! ```

use std::io;
use store_cli::{AppConfig, Menu};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they do not mix with the menu
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let config = AppConfig::from_env();
    let mut store = config.load_store()?;

    info!("Store: {}", config.store_name);
    info!("Products loaded: {}", store.len());

    let stdin = io::stdin();
    let mut menu = Menu::new(&mut store, config.store_name.clone(), stdin.lock(), io::stdout());
    menu.run()?;

    Ok(())
}
