//! Shopping cart module.
//!
//! Contains the cart store and its entries. Every cart mutation also moves
//! catalog stock; see [`CartStore`].

mod cart;

pub use cart::{CartEntry, CartStore};
