//! Checkout module.
//!
//! Contains the receipt produced when the cart is purchased.

mod receipt;

pub use receipt::{Receipt, ReceiptLine};
