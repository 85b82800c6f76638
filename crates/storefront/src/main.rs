//! Lumina Storefront - storefront state core binary.
//!
//! Boots the application shell against the profile's file store: loads
//! configuration, rehydrates session and cart, and reports the resulting
//! state. Page-level frontends link the library crate and drive the same
//! [`lumina_storefront::state::App`] surface; this binary is the smoke
//! surface for a profile's persisted state.

#![cfg_attr(not(test), forbid(unsafe_code))]

use lumina_storefront::config::StorefrontConfig;
use lumina_storefront::error::AppError;
use lumina_storefront::services::Catalog;
use lumina_storefront::state::App;
use lumina_storefront::store::FileStore;

fn main() {
    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "lumina_storefront=info".into());

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if let Err(e) = run() {
        tracing::error!("storefront failed to start: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = StorefrontConfig::from_env()?;
    tracing::info!(profile = %config.profile, dir = %config.store_dir().display(), "opening profile store");

    let store = FileStore::open(config.store_dir())?;
    let mut app = App::new(store, Catalog::demo());
    app.initialize();

    let session = app.session();
    match session.identity() {
        Some(identity) => {
            tracing::info!(user = %identity.id, name = %identity.name, "signed in");
        }
        None => tracing::info!("no user signed in"),
    }
    tracing::info!(
        items = app.cart().items().len(),
        units = app.cart_count(),
        subtotal = %app.cart().subtotal(),
        "cart ready"
    );
    tracing::info!(products = app.catalog().list().len(), "catalog ready");

    Ok(())
}
