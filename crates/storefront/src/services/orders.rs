//! Order placement and history.
//!
//! Local stand-in for the upstream order collaborator. Accepts a cart
//! snapshot plus an identity and returns the placed [`Order`]; the caller
//! is responsible for clearing the cart on success.

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use lumina_core::{Cart, Identity, Order, OrderId, OrderStatus, UserId};

use crate::store::{self, StoreAdapter, StoreError, keys};

/// Errors that can occur when placing or listing orders.
#[derive(Debug, Error)]
pub enum OrderError {
    /// An order needs at least one line.
    #[error("cannot place an order for an empty cart")]
    EmptyCart,

    /// The order log could not be read or written.
    #[error("order storage error: {0}")]
    Store(#[from] StoreError),
}

/// Order collaborator over the profile store's order log.
#[derive(Debug, Default)]
pub struct OrderBook;

impl OrderBook {
    /// Place an order for the given cart snapshot.
    ///
    /// The order is appended to the log before this returns; the cart
    /// itself is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyCart`] for an empty cart, or a storage
    /// error if the log cannot be updated.
    pub fn place<S: StoreAdapter>(
        &self,
        store: &mut S,
        identity: &Identity,
        cart: &Cart,
    ) -> Result<Order, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let order = Order {
            id: OrderId::new(Uuid::new_v4().to_string()),
            user_id: identity.id.clone(),
            items: cart.items().to_vec(),
            total: cart.subtotal(),
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };

        let mut orders = load_orders(store)?;
        orders.push(order.clone());
        store::write_json(store, keys::ORDERS, &orders)?;

        tracing::info!(order = %order.id, total = %order.total, "order placed");
        Ok(order)
    }

    /// All orders placed by `user_id`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the order log cannot be read.
    pub fn for_user<S: StoreAdapter>(
        &self,
        store: &S,
        user_id: &UserId,
    ) -> Result<Vec<Order>, OrderError> {
        let orders = load_orders(store)?;
        Ok(orders
            .into_iter()
            .filter(|o| &o.user_id == user_id)
            .collect())
    }
}

/// Load the order log, defaulting to empty.
fn load_orders<S: StoreAdapter>(store: &S) -> Result<Vec<Order>, OrderError> {
    Ok(store::read_json(store, keys::ORDERS)?.unwrap_or_default())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use lumina_core::{CurrencyCode, Email, Price, Product, ProductId, Role};
    use rust_decimal::Decimal;

    use super::*;
    use crate::store::MemoryStore;

    fn identity(id: &str) -> Identity {
        Identity {
            id: UserId::new(id),
            name: "Ada".to_owned(),
            email: Email::parse("ada@example.com").unwrap(),
            role: Role::Customer,
        }
    }

    fn cart_with_one_item() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(&Product {
            id: ProductId::new("p1"),
            name: "Product".to_owned(),
            description: String::new(),
            price: Price::new(Decimal::new(1000, 2), CurrencyCode::USD),
            image: String::new(),
            category: "gear".to_owned(),
            stock: 5,
        });
        cart
    }

    #[test]
    fn test_place_records_order() {
        let mut store = MemoryStore::new();
        let book = OrderBook;
        let cart = cart_with_one_item();

        let order = book.place(&mut store, &identity("u-1"), &cart).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total, cart.subtotal());

        let history = book.for_user(&store, &UserId::new("u-1")).unwrap();
        assert_eq!(history, vec![order]);
    }

    #[test]
    fn test_place_rejects_empty_cart() {
        let mut store = MemoryStore::new();
        let result = OrderBook.place(&mut store, &identity("u-1"), &Cart::new());
        assert!(matches!(result, Err(OrderError::EmptyCart)));
    }

    #[test]
    fn test_history_is_scoped_to_user() {
        let mut store = MemoryStore::new();
        let book = OrderBook;
        let cart = cart_with_one_item();

        book.place(&mut store, &identity("u-1"), &cart).unwrap();
        book.place(&mut store, &identity("u-2"), &cart).unwrap();

        assert_eq!(book.for_user(&store, &UserId::new("u-1")).unwrap().len(), 1);
        assert_eq!(book.for_user(&store, &UserId::new("u-3")).unwrap().len(), 0);
    }

    #[test]
    fn test_corrupted_order_log_treated_as_empty() {
        let mut store = MemoryStore::new();
        store.write(keys::ORDERS, "not an array").unwrap();

        let history = OrderBook.for_user(&store, &UserId::new("u-1")).unwrap();
        assert!(history.is_empty());
    }
}
