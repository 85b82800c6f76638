//! Profile status command.
//!
//! Reads the profile store directly (no shell mutation surface needed) and
//! prints what a storefront boot would rehydrate.

use thiserror::Error;

use lumina_core::{Cart, Identity, Order};
use lumina_storefront::config::{ConfigError, StorefrontConfig};
use lumina_storefront::store::{self, FileStore, StoreError, keys};

/// Errors that can occur while reading profile status.
#[derive(Debug, Error)]
pub enum StatusError {
    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Profile store could not be read.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Print the persisted state of the active profile.
///
/// # Errors
///
/// Returns [`StatusError`] if the configuration or store is unusable.
/// Malformed stored values print as absent, matching what the storefront
/// would rehydrate.
#[allow(clippy::print_stdout)]
pub fn show() -> Result<(), StatusError> {
    let config = StorefrontConfig::from_env()?;
    let store = FileStore::open(config.store_dir())?;

    println!("profile: {}", config.profile);
    println!("store:   {}", store.dir().display());
    println!();

    match store::read_json::<FileStore, Identity>(&store, keys::USER)? {
        Some(identity) => println!(
            "user:    {} <{}> ({})",
            identity.name, identity.email, identity.role
        ),
        None => println!("user:    signed out"),
    }

    let cart: Cart = store::read_json(&store, keys::CART)?.unwrap_or_default();
    if cart.is_empty() {
        println!("cart:    empty");
    } else {
        println!(
            "cart:    {} lines, {} units, subtotal {}",
            cart.items().len(),
            cart.total_count(),
            cart.subtotal()
        );
        for item in cart.items() {
            println!(
                "  {:>3} x {} @ {}",
                item.quantity, item.product.name, item.product.price
            );
        }
    }

    let orders: Vec<Order> = store::read_json(&store, keys::ORDERS)?.unwrap_or_default();
    println!("orders:  {}", orders.len());
    for order in &orders {
        println!(
            "  {} {} {} ({:?})",
            order.created_at.format("%Y-%m-%d"),
            order.id,
            order.total,
            order.status
        );
    }

    Ok(())
}
