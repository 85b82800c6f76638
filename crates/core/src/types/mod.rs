//! Core types for Lumina Market.
//!
//! This module provides type-safe wrappers for common domain concepts and
//! the product/cart/order model shared by the storefront and CLI crates.

pub mod cart;
pub mod email;
pub mod id;
pub mod identity;
pub mod order;
pub mod price;
pub mod product;

pub use cart::{Cart, CartItem};
pub use email::{Email, EmailError};
pub use id::*;
pub use identity::{Identity, Role};
pub use order::{Order, OrderStatus};
pub use price::{CurrencyCode, Price};
pub use product::Product;
