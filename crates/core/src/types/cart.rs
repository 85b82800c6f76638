//! Shopping cart model and reducer.
//!
//! Every operation here is a pure transformation of the line sequence;
//! persisting the result is the storefront shell's concern.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::price::{CurrencyCode, Price};
use crate::types::product::Product;

/// A line in the cart: a product snapshot plus a quantity of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// ID of the product this line is for (the dedup key).
    pub product_id: ProductId,
    /// Units of the product. At least 1 while the line exists.
    pub quantity: u32,
    /// Snapshot of the product at the time it was first added.
    pub product: Product,
}

impl CartItem {
    /// Line total (unit price x quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.line_total(self.quantity)
    }
}

/// The shopping cart: an ordered sequence of lines, at most one per product.
///
/// Lines keep insertion order (first added, first listed). A quantity of
/// zero never survives an operation: updating a line to 0 removes it.
///
/// Serializes as the bare line sequence, which is also the persisted wire
/// format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of `product`.
    ///
    /// If a line for the product already exists its quantity grows by 1;
    /// otherwise a new line with quantity 1 is appended at the end. Stock
    /// is not consulted here - capping against it is an external policy.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.quantity += 1;
        } else {
            self.items.push(CartItem {
                product_id: product.id.clone(),
                quantity: 1,
                product: product.clone(),
            });
        }
    }

    /// Remove the line for `product_id`, if present. Absent is a no-op.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.items.retain(|i| &i.product_id != product_id);
    }

    /// Set the quantity of the line for `product_id`.
    ///
    /// A quantity of 0 behaves exactly like [`Cart::remove_item`]. Otherwise
    /// the quantity is replaced in place and the line keeps its position.
    /// Absent `product_id` is a no-op.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| &i.product_id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Reset the cart to empty.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines.
    ///
    /// Always derived from the live sequence, never stored.
    #[must_use]
    pub fn total_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of line totals.
    ///
    /// Uses the first line's currency; an empty cart is zero USD.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        let currency = self
            .items
            .first()
            .map_or(CurrencyCode::default(), |i| i.product.price.currency_code);

        self.items.iter().fold(Price::zero(currency), |acc, item| {
            Price::new(acc.amount + item.line_total().amount, currency)
        })
    }
}
