//! Store error types.

use crate::ids::ItemId;
use thiserror::Error;

/// Errors that can occur in catalog and cart operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Add-to-cart attempted with no available unit.
    #[error("Out of stock for item {item_id}: requested {requested}, available {available}")]
    OutOfStock {
        item_id: ItemId,
        requested: u32,
        available: u32,
    },

    /// Checkout attempted with no entries.
    #[error("Cart is empty")]
    EmptyCart,

    /// Item not in catalog.
    #[error("Item not found: {0}")]
    NotFound(ItemId),

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    NotInCart(ItemId),

    /// Stock adjustment would drive stock below zero.
    #[error("Insufficient stock for item {item_id}: delta {delta}, available {available}")]
    InsufficientStock {
        item_id: ItemId,
        delta: i64,
        available: u32,
    },

    /// Arithmetic overflow in a money or stock calculation.
    #[error("Arithmetic overflow")]
    Overflow,
}

impl StoreError {
    /// Whether this error should be shown to the shopper.
    ///
    /// Lookup misses are internal and never reach the UI.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, StoreError::OutOfStock { .. } | StoreError::EmptyCart)
    }
}
