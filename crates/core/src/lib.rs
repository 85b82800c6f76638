//! Lumina Core - Shared domain types library.
//!
//! This crate provides the domain types used across all Lumina Market
//! components:
//! - `storefront` - the storefront state core (cart, session, checkout)
//! - `cli` - command-line tools for inspecting and resetting local state
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations - no I/O, no
//! storage access, no clocks beyond timestamps handed in by callers. The
//! cart reducer lives here: every one of its operations is a pure
//! transformation of the item sequence. Persistence is the storefront
//! crate's concern.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, emails, prices, and the product/cart/order model

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
