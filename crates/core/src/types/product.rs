//! Catalog product type.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::price::Price;

/// A product as provided by the catalog collaborator.
///
/// Read-only to the state core: carts take denormalized snapshots of it,
/// they never mutate it. Stock is informational here; whether a cart may
/// exceed it is an external policy decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Longer description for the product page.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Product image URL.
    pub image: String,
    /// Display category.
    pub category: String,
    /// Units currently in stock.
    pub stock: u32,
}

impl Product {
    /// Whether any units are in stock.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }
}
