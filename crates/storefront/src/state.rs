//! Application shell composing session, cart, and collaborators.
//!
//! [`App`] is the single mutation surface for page-level collaborators:
//! the four cart operations, the session transitions, checkout, and
//! read-only snapshots of the current state. It holds no business logic of
//! its own beyond this composition and the derived display count.

use lumina_core::{Cart, Identity, Order, Product, ProductId};

use crate::error::{AppError, Result};
use crate::services::{AuthService, Catalog, OrderBook};
use crate::session::Session;
use crate::store::{self, StoreAdapter, StoreError, keys};

/// The storefront application shell.
///
/// Owns the profile store and the state objects rehydrated from it. All
/// mutations are write-through: the store reflects the new state before
/// the operation returns, so closing the process at any point loses
/// nothing.
pub struct App<S: StoreAdapter> {
    store: S,
    session: Session,
    cart: Cart,
    auth: AuthService,
    catalog: Catalog,
    orders: OrderBook,
    initialized: bool,
}

impl<S: StoreAdapter> App<S> {
    /// Create a shell over `store` and `catalog`, not yet initialized.
    ///
    /// The session stays in `Loading` until [`App::initialize`] resolves it.
    #[must_use]
    pub fn new(store: S, catalog: Catalog) -> Self {
        Self {
            store,
            session: Session::new(),
            cart: Cart::new(),
            auth: AuthService,
            catalog,
            orders: OrderBook,
            initialized: false,
        }
    }

    /// Rehydrate session and cart from the store.
    ///
    /// Runs the blocking startup step: after this returns, the session is
    /// in a steady state and the cart reflects the persisted sequence (or
    /// empty, if the stored value is absent or malformed). Called once at
    /// startup; repeat calls are no-ops.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        self.session.initialize(&self.store);

        self.cart = match store::read_json::<S, Cart>(&self.store, keys::CART) {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read stored cart");
                Cart::new()
            }
        };

        tracing::info!(
            status = ?self.session.status(),
            cart_items = self.cart.items().len(),
            "storefront state rehydrated"
        );
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    /// Current session snapshot.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Current cart snapshot.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The product catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Total units in the cart, for the header badge.
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart.total_count()
    }

    // =========================================================================
    // Session operations
    // =========================================================================

    /// Sign in with an identity issued by the authentication collaborator.
    ///
    /// [`App::register`] and [`App::login`] drive this against the built-in
    /// auth service; pages talking to another auth backend call it directly.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the session cannot be persisted.
    pub fn sign_in(&mut self, identity: Identity) -> Result<()> {
        self.session.sign_in(identity, &mut self.store)?;
        Ok(())
    }

    /// Register a new account and sign in as it.
    ///
    /// # Errors
    ///
    /// Returns the auth collaborator's failure reason, or a storage error
    /// if the new session cannot be persisted.
    pub fn register(&mut self, name: &str, email: &str, password: &str) -> Result<Identity> {
        let identity = self.auth.register(&mut self.store, name, email, password)?;
        self.sign_in(identity.clone())?;
        Ok(identity)
    }

    /// Login with existing credentials and sign in.
    ///
    /// # Errors
    ///
    /// Returns the auth collaborator's failure reason, or a storage error
    /// if the new session cannot be persisted.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Identity> {
        let identity = self.auth.login(&self.store, email, password)?;
        self.sign_in(identity.clone())?;
        Ok(identity)
    }

    /// Sign out. Idempotent; the cart is kept.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the persisted identity cannot be removed.
    pub fn sign_out(&mut self) -> Result<()> {
        self.session.sign_out(&mut self.store)?;
        Ok(())
    }

    // =========================================================================
    // Cart operations (write-through)
    // =========================================================================

    /// Add one unit of `product` to the cart.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the cart cannot be persisted.
    pub fn add_to_cart(&mut self, product: &Product) -> Result<()> {
        self.cart.add_item(product);
        self.persist_cart()?;
        Ok(())
    }

    /// Remove the cart line for `product_id`. Absent is a no-op.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the cart cannot be persisted.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> Result<()> {
        self.cart.remove_item(product_id);
        self.persist_cart()?;
        Ok(())
    }

    /// Set the quantity of the line for `product_id`; 0 removes it.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the cart cannot be persisted.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) -> Result<()> {
        self.cart.update_quantity(product_id, quantity);
        self.persist_cart()?;
        Ok(())
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the cart cannot be persisted.
    pub fn clear_cart(&mut self) -> Result<()> {
        self.cart.clear();
        self.persist_cart()?;
        Ok(())
    }

    fn persist_cart(&mut self) -> std::result::Result<(), StoreError> {
        store::write_json(&mut self.store, keys::CART, &self.cart)
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Hand the current cart and identity to the order collaborator.
    ///
    /// On success the cart is cleared (write-through) and the placed order
    /// is returned. On any failure the cart is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotAuthenticated`] if no user is signed in, the
    /// order collaborator's failure reason, or a storage error.
    pub fn checkout(&mut self) -> Result<Order> {
        let identity = self
            .session
            .identity()
            .ok_or(AppError::NotAuthenticated)?
            .clone();

        let order = self.orders.place(&mut self.store, &identity, &self.cart)?;

        self.cart.clear();
        self.persist_cart()?;
        Ok(order)
    }

    /// Orders previously placed by the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotAuthenticated`] if no user is signed in, or a
    /// storage error if the order log cannot be read.
    pub fn order_history(&self) -> Result<Vec<Order>> {
        let identity = self.session.identity().ok_or(AppError::NotAuthenticated)?;
        Ok(self.orders.for_user(&self.store, &identity.id)?)
    }
}
