//! Order types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::cart::CartItem;
use crate::types::id::{OrderId, UserId};
use crate::types::price::Price;

/// A placed order, produced by the order collaborator at checkout.
///
/// The state core only hands over a cart snapshot and an identity; it never
/// mutates an order after placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// User the order belongs to.
    pub user_id: UserId,
    /// Cart lines frozen at checkout.
    pub items: Vec<CartItem>,
    /// Order total at checkout.
    pub total: Price,
    /// Fulfillment status.
    pub status: OrderStatus,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
}

/// Order fulfillment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Shipped,
    Delivered,
}
