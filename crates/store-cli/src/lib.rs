//! # store-cli
//!
//! Terminal storefront for shelf-rs.
//!
//! This crate provides:
//! - `AppConfig` for environment-driven settings and catalog discovery
//! - `Menu`, the interactive command loop over a `store_core::Store`
//!
//! ## Commands
//!
//! | Choice | Action |
//! |--------|--------|
//! | 1 | List active products |
//! | 2 | Show total quantity in store |
//! | 3 | Make an order |
//! | 4 | Quit |

pub mod config;
pub mod menu;

pub use config::AppConfig;
pub use menu::Menu;
